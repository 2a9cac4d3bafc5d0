use clap::Parser;
use eyre::{Context, Result};
use log::info;
use std::fs;

mod cli;
mod commands;
mod config;

use cli::{Cli, Commands};
use config::{Config, LogLevel};

fn setup_logging(config: &Config) -> Result<()> {
    // Create log directory
    let log_dir = config.log_dir();

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("scarf.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG env var takes precedence, otherwise use config log_level
    let mut builder = env_logger::Builder::new();

    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(match config.log_level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Off => log::LevelFilter::Off,
        });
    }

    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    info!(
        "Log level: {} (from {})",
        config.log_level.as_filter(),
        if std::env::var("RUST_LOG").is_ok() { "RUST_LOG env" } else { "config" }
    );
    Ok(())
}

fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Send {
            endpoint,
            timeout_ms,
            properties,
        } => commands::send::run(endpoint, timeout_ms, &properties, &config),
        Commands::Status { endpoint, format } => {
            commands::status::run(endpoint, cli::OutputFormat::resolve(format), &config)
        }
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments first
    let cli = Cli::parse();

    // Load configuration (before logging, so log messages in Config::load are silent)
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(&config).context("Failed to setup logging")?;

    info!("Starting scarf with config from: {:?}", cli.config);

    run(cli, config).context("Command failed")?;

    Ok(())
}
