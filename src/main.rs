use anyhow::Result;
use clap::Parser;
use resume_insight::cli::{handle_command, Cli};
use resume_insight::config::{AppConfig, LogFormat};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("resume_insight=info,rocket::server=off"));

    // Logs go to stderr so command output on stdout stays parseable.
    match config.environment.log_format {
        LogFormat::Json => Registry::default()
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(false)
                    .with_span_list(false),
            )
            .with(filter)
            .init(),
        LogFormat::Text => Registry::default()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init(),
    }

    info!("Environment: {}", config.environment_name);

    handle_command(cli, config).await
}
