//! Status command
//!
//! Shows the resolved telemetry configuration without sending anything.

use colored::*;
use eyre::Result;
use scarf::EventLogger;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::Config;

#[derive(Debug, Serialize)]
struct Status {
    enabled: bool,
    verbose: bool,
    endpoint: String,
    timeout_ms: u64,
    user_agent: String,
}

impl Status {
    fn from_logger(logger: &EventLogger) -> Self {
        let config = logger.config();
        Self {
            enabled: logger.is_enabled(),
            verbose: config.verbose,
            endpoint: config.endpoint.clone(),
            timeout_ms: u64::try_from(config.default_timeout.as_millis()).unwrap_or(u64::MAX),
            user_agent: logger.user_agent().to_string(),
        }
    }
}

pub fn run(endpoint: Option<String>, format: OutputFormat, config: &Config) -> Result<()> {
    let endpoint = super::resolve_endpoint(endpoint, config);
    let logger = EventLogger::new(endpoint, config.timeout());
    let status = Status::from_logger(&logger);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&status)?),
        OutputFormat::Text => print_text_status(&status),
    }

    Ok(())
}

fn print_text_status(status: &Status) {
    println!("{}", "Scarf Status".bold());
    println!();

    let enabled = if status.enabled {
        "enabled".green()
    } else {
        "disabled".red()
    };
    println!("  {:14} {}", "Analytics:".dimmed(), enabled);
    println!("  {:14} {}", "Verbose:".dimmed(), status.verbose);

    if status.endpoint.trim().is_empty() {
        println!("  {:14} {}", "Endpoint:".dimmed(), "(none)".dimmed());
    } else {
        println!("  {:14} {}", "Endpoint:".dimmed(), status.endpoint);
    }

    println!("  {:14} {}ms", "Timeout:".dimmed(), status.timeout_ms);
    println!("  {:14} {}", "User-Agent:".dimmed(), status.user_agent);
}
