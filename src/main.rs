//! homelab-pilot: A terminal dashboard for self-hosted services

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use homelab_pilot_tui::App;
use homelab_rs::DashboardConfig;
use std::fs::File;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{EnvFilter, prelude::*};

/// homelab-pilot: Terminal dashboard for homelab services
#[derive(Parser, Debug)]
#[command(name = "homelab-pilot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the config file (default: ~/.config/homelab-pilot/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Log file path
    #[arg(long, default_value = "/tmp/homelab-pilot.log")]
    log_file: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    color_eyre::install()?;

    // Log to a file, stdout belongs to the TUI
    let log_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let log_file = File::create(&cli.log_file)
        .wrap_err_with(|| format!("could not create log file {}", cli.log_file))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(log_file)
                .with_ansi(false)
                .with_target(false),
        )
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .init();

    tracing::info!("Starting homelab-pilot");

    let config = match &cli.config {
        Some(path) => DashboardConfig::load_from(path),
        None => DashboardConfig::load_default(),
    }
    .wrap_err("failed to load configuration")?;

    tracing::info!(
        "Loaded {} services: {}",
        config.applications.len(),
        config.service_names().join(", ")
    );

    let mut app = App::new(&config)?;
    app.run().await?;

    tracing::info!("Goodbye!");
    Ok(())
}
