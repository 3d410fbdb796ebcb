#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    CallInput, CallStrategy, CommandStrategy, InitStrategy, ListInput, ListStrategy,
    VersionStrategy,
};
use selflink_config::Config;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "selflink")]
#[command(about = "Extract names, projects and locations from resource self links", long_about = None)]
struct Cli {
    /// Log at debug level unless `RUST_LOG` says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Call a function with a single string argument
    Call {
        /// Function name, e.g. `resource_name_from_self_link`
        function: String,

        /// Self link, id or other input string
        input: String,

        /// Print the full response, diagnostics included, as JSON
        #[arg(long)]
        json: bool,
    },
    /// List available functions
    List {
        /// Print definitions as JSON
        #[arg(long)]
        json: bool,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

fn init_logging(config: &Config, verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.command {
        Commands::Init | Commands::Version => Config::default(),
        _ => Config::load_or_default()?,
    };
    init_logging(&config, cli.verbose)?;

    match cli.command {
        Commands::Call {
            function,
            input,
            json,
        } => {
            CallStrategy
                .execute(CallInput {
                    config,
                    function,
                    input,
                    json,
                })
                .await?;
        }
        Commands::List { json } => {
            ListStrategy.execute(ListInput { config, json }).await?;
        }
        Commands::Init => InitStrategy.execute(()).await?,
        Commands::Version => VersionStrategy.execute(()).await?,
    }

    Ok(())
}
