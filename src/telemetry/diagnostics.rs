//! Verbose diagnostic lines

use chrono::Local;

/// Tag prefixed to every diagnostic line
pub const TAG: &str = "[scarf]";

/// Line-oriented destination for diagnostic output
pub trait DiagnosticSink: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Writes diagnostic lines to standard error
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn write_line(&self, line: &str) {
        eprintln!("{}", line);
    }
}

/// Format a diagnostic line with tag and local timestamp
pub fn format_line(message: &str) -> String {
    format!("{} {} {}", TAG, Local::now().format("%Y/%m/%d %H:%M:%S"), message)
}
