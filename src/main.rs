use anyhow::Result;
use clap::Parser;
use resume_forge::cli::{handle_command, Cli};
use resume_forge::core::ConfigManager;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("resume_forge=info,rocket=warn")),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration once; everything downstream takes it by value or reference
    let config = ConfigManager::load()?;
    info!("Environment: {}", config.environment);

    handle_command(cli, config).await
}
