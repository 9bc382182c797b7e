use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use winavg::config::resolve_config_path;

#[derive(Parser)]
#[command(name = "winavg")]
#[command(about = "Sliding-window average service", long_about = None)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Run,
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    Init {
        #[arg(long)]
        stdout: bool,
    },
    Validate,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "winavg=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Resolve config path
    let config_path = resolve_config_path(cli.config.as_deref());

    // Dispatch to appropriate handler
    match cli.command {
        Some(Commands::Run) | None => {
            // Default behavior is to run
            winavg::cli::run::run(config_path).await?;
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Init { stdout } => {
                winavg::cli::config::init(stdout)?;
            }
            ConfigAction::Validate => {
                winavg::cli::config::validate(config_path)?;
            }
        },
    }

    Ok(())
}
