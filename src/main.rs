use anyhow::Result;
use hf_image_to_text::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Builds the log filter, rejecting directives `EnvFilter` cannot parse
fn log_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).map_err(|_| {
        anyhow::anyhow!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let filter = match log_filter(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!(
        "Starting Hugging Face image-to-text service with log level: {}",
        log_level
    );
    info!(
        "Configuration loaded, {} engine(s) to announce to",
        config.engine.urls.len()
    );

    server::run(config).await?;

    Ok(())
}
