use selflink_config::Config;
use selflink_core::RunRequest;
use tracing::debug;

/// Input for a single function call.
#[derive(Debug, Clone)]
pub struct CallInput {
    pub config: Config,
    pub function: String,
    pub input: String,
    /// Print the whole response as JSON instead of the bare result.
    pub json: bool,
}

/// Strategy for calling one function with one string argument.
///
/// The result goes to stdout and diagnostics go to stderr, so the output
/// can be captured by scripts. Error diagnostics make the command fail.
#[derive(Debug, Clone, Copy)]
pub struct CallStrategy;

impl super::CommandStrategy for CallStrategy {
    type Input = CallInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let registry = super::build_registry(&input.config)?;
        debug!("Registry has {} functions", registry.len());

        let response = registry.call(&input.function, &RunRequest::from_strings([input.input]));

        if input.json {
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            for diagnostic in &response.diagnostics {
                eprintln!("{diagnostic}");
            }
            if let Some(result) = response.result.as_deref().filter(|_| !response.is_error()) {
                println!("{result}");
            }
        }

        if response.is_error() {
            anyhow::bail!("Error in function call: {}", input.function);
        }
        Ok(())
    }
}
