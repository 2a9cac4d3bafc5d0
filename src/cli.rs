use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// If user specified a format, use it.
    /// Otherwise: TTY → Text, non-TTY (pipe) → Json
    pub fn resolve(user_choice: Option<OutputFormat>) -> OutputFormat {
        match user_choice {
            Some(fmt) => fmt,
            None => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Text
                } else {
                    OutputFormat::Json
                }
            }
        }
    }
}

#[derive(Parser)]
#[command(
    name = "scarf",
    about = "Send telemetry events to a collection endpoint",
    version = env!("SCARF_SDK_VERSION"),
    after_help = "Opt out with DO_NOT_TRACK=1 or SCARF_NO_ANALYTICS=1. SCARF_VERBOSE=1 prints diagnostics to stderr."
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to scarf.yaml config file")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send one event
    Send {
        /// Endpoint URL (overrides the config file)
        #[arg(long, short)]
        endpoint: Option<String>,

        /// Timeout for this call in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Event properties as KEY=VALUE; JSON values are sent structured
        #[arg(value_name = "KEY=VALUE")]
        properties: Vec<String>,
    },

    /// Show whether analytics are enabled and what would be sent
    Status {
        /// Endpoint URL (overrides the config file)
        #[arg(long, short)]
        endpoint: Option<String>,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_send() {
        let cli = Cli::parse_from(["scarf", "send", "-e", "https://example.com", "event=install", "n=3"]);
        match cli.command {
            Commands::Send {
                endpoint,
                timeout_ms,
                properties,
            } => {
                assert_eq!(endpoint.as_deref(), Some("https://example.com"));
                assert!(timeout_ms.is_none());
                assert_eq!(properties, vec!["event=install", "n=3"]);
            }
            _ => panic!("expected send"),
        }
    }

    #[test]
    fn test_parse_status_format() {
        let cli = Cli::parse_from(["scarf", "status", "-o", "json"]);
        assert!(matches!(
            cli.command,
            Commands::Status {
                format: Some(OutputFormat::Json),
                ..
            }
        ));
    }

    #[test]
    fn test_resolve_explicit_format() {
        assert_eq!(OutputFormat::resolve(Some(OutputFormat::Text)), OutputFormat::Text);
    }
}
