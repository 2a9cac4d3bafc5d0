//! Send command
//!
//! Sends a single event built from KEY=VALUE arguments.

use colored::*;
use eyre::{Result, bail};
use scarf::{EventLogger, Properties, PropertyValue, SendError};
use std::time::Duration;

use crate::config::Config;

pub fn run(endpoint: Option<String>, timeout_ms: Option<u64>, args: &[String], config: &Config) -> Result<()> {
    let properties = parse_properties(args)?;
    let endpoint = super::resolve_endpoint(endpoint, config);

    let logger = EventLogger::new(endpoint, config.timeout());
    log::info!(
        "Sending event with {} properties (enabled: {})",
        properties.len(),
        logger.is_enabled()
    );

    match logger.send(Some(&properties), timeout_ms.map(Duration::from_millis)) {
        Ok(()) => {
            println!("{} Event sent", "✓".green());
            Ok(())
        }
        Err(SendError::Disabled) => {
            println!("{} Analytics disabled; event not sent", "○".yellow());
            Ok(())
        }
        Err(e) => {
            log::warn!("Failed to send event: {}", e);
            eprintln!("{} {}", "✗".red(), e);
            Err(e.into())
        }
    }
}

/// Parse KEY=VALUE arguments into event properties
pub fn parse_properties(args: &[String]) -> Result<Properties> {
    let mut properties = Properties::new();
    for arg in args {
        let (key, value) = parse_property(arg)?;
        properties.insert(key, value);
    }
    Ok(properties)
}

fn parse_property(arg: &str) -> Result<(String, PropertyValue)> {
    let Some((key, raw)) = arg.split_once('=') else {
        bail!("Invalid property '{}': expected KEY=VALUE", arg);
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("Invalid property '{}': key is empty", arg);
    }

    // Numbers, booleans, arrays and objects go out structured; anything else is text
    let value = match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) => PropertyValue::from(json),
        Err(_) => PropertyValue::from(raw),
    };

    Ok((key.to_string(), value))
}
