//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, dispatched
//! statically from `main`.

use anyhow::Context;
use selflink_config::Config;
use selflink_core::FunctionRegistry;
use tracing::{info, warn};

mod call;
mod init;
mod list;
mod version;

pub use call::{CallInput, CallStrategy};
pub use init::InitStrategy;
pub use list::{ListInput, ListStrategy};
pub use version::VersionStrategy;

/// Build the registry for this run: built-ins minus the disabled ones,
/// plus the custom pattern functions from config.
///
/// Disabling happens first so a custom function may take over a built-in name.
fn build_registry(config: &Config) -> anyhow::Result<FunctionRegistry> {
    let mut registry = selflink_functions::default_registry();

    for name in &config.functions.disabled {
        if registry.remove(name) {
            info!("Disabled function: {name}");
        } else {
            warn!("Cannot disable unknown function: {name}");
        }
    }

    selflink_functions::register_custom(&mut registry, &config.functions.custom)
        .context("Invalid custom function in config")?;

    Ok(registry)
}

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
