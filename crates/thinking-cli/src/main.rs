use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thinking_application::ThinkingService;
use thinking_infrastructure::ConfigService;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "thinking")]
#[command(about = "Structured reasoning sessions for named thinking frameworks", long_about = None)]
struct Cli {
    /// Config file (default: ~/.config/thinking/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Session state file, overriding the configured one
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available frameworks and their steps
    Frameworks,
    /// Run one step of a framework
    Step {
        /// Framework name, e.g. decision-matrix
        tool: String,
        /// Step arguments as a JSON object
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        args: Option<String>,
        /// Read the step arguments from a JSON file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Summarize the active sessions
    Show,
    /// Remove one session, or every session when no framework is given
    Clear {
        tool: Option<String>,
    },
    /// Clear every session if any category is a reset category
    Reset {
        #[arg(required = true)]
        categories: Vec<String>,
    },
}

fn init_tracing(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new().context("Failed to resolve config location")?,
    };
    let mut config = config_service
        .get_config()
        .with_context(|| format!("Failed to load {}", config_service.path().display()))?;
    if let Some(state_file) = cli.state_file {
        config.state_file = Some(state_file);
    }

    init_tracing(&config.log_level);
    tracing::debug!("[CLI] Config loaded from {}", config_service.path().display());

    let service = ThinkingService::from_config(&config).context("Failed to build service")?;
    let engine = service.restore().await.context("Failed to restore sessions")?;

    // Failed steps still advance bookkeeping, so persist before reporting.
    let outcome = match cli.command {
        Commands::Frameworks => commands::frameworks::list(&service),
        Commands::Step { tool, args, file } => commands::step::run(&service, &engine, &tool, args, file),
        Commands::Show => {
            commands::session::show(&service, &engine);
            Ok(())
        }
        Commands::Clear { tool } => {
            commands::session::clear(&service, &engine, tool.as_deref());
            Ok(())
        }
        Commands::Reset { categories } => {
            commands::session::reset(&service, &engine, &categories);
            Ok(())
        }
    };

    if let Err(err) = &outcome {
        tracing::warn!("[CLI] Command failed: {:#}", err);
    }

    service
        .persist(&engine)
        .await
        .context("Failed to persist sessions")?;

    outcome
}
