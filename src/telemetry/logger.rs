//! Event logger: sends one telemetry event per call

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use ureq::Agent;

use super::diagnostics::{self, DiagnosticSink, StderrSink};
use super::error::SendError;
use super::query::merge_query;
use super::settings::{LoggerConfig, resolve_timeout};
use super::user_agent::user_agent;
use super::value::Properties;

/// Sends telemetry events to a configured endpoint
pub struct EventLogger {
    config: LoggerConfig,
    agent: Agent,
    user_agent: String,
    sink: Arc<dyn DiagnosticSink>,
}

impl EventLogger {
    /// Create a logger for `endpoint`, reading opt-out and verbosity from the
    /// environment once
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self::with_config(LoggerConfig::from_env(endpoint, timeout))
    }

    /// Create a logger from an already-resolved config
    pub fn with_config(config: LoggerConfig) -> Self {
        let agent = Agent::new_with_config(
            Agent::config_builder()
                .timeout_global(Some(config.default_timeout))
                .http_status_as_error(false)
                .build(),
        );

        Self {
            config,
            agent,
            user_agent: user_agent(),
            sink: Arc::new(StderrSink),
        }
    }

    /// Replace the diagnostic sink (stderr by default)
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Whether analytics are enabled
    pub fn is_enabled(&self) -> bool {
        !self.config.disabled
    }

    /// Configuration resolved at construction
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// `User-Agent` value sent with every event
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Check that an endpoint is configured
    pub fn validate(&self) -> Result<(), SendError> {
        if self.config.endpoint.trim().is_empty() {
            return Err(SendError::MissingEndpoint);
        }
        Ok(())
    }

    /// Send an event with the default timeout; true on a 2xx response
    pub fn log_event(&self, properties: &Properties) -> bool {
        self.send(Some(properties), None).is_ok()
    }

    /// Send an event with a timeout for this call only; true on a 2xx response
    pub fn log_event_with_timeout(&self, properties: &Properties, timeout: Duration) -> bool {
        self.send(Some(properties), Some(timeout)).is_ok()
    }

    /// Send an event.
    ///
    /// `timeout` applies to this call only; `None` or zero uses the configured
    /// default. Every failure is returned, never retried.
    pub fn send(&self, properties: Option<&Properties>, timeout: Option<Duration>) -> Result<(), SendError> {
        if self.config.disabled {
            self.note("analytics disabled via env; not sending event");
            return Err(SendError::Disabled);
        }

        self.validate().inspect_err(|_| self.note("no endpoint URL configured; aborting"))?;

        let empty = Properties::new();
        let properties = properties.unwrap_or(&empty);

        let url = merge_query(&self.config.endpoint, properties)
            .inspect_err(|e| self.note(format!("invalid endpoint URL: {}", e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            let reason = format!("unsupported URL scheme: {}", url.scheme());
            self.note(format!("failed to build request: {}", reason));
            return Err(SendError::RequestBuildFailed(reason));
        }

        let timeout = resolve_timeout(timeout, self.config.default_timeout);
        self.note(format!("sending event to {} (timeout={:?})", url, timeout));

        // Request-scoped config copies the agent's settings; the agent itself is untouched
        let result = self
            .agent
            .post(url.as_str())
            .config()
            .timeout_global(Some(timeout))
            .build()
            .header("User-Agent", self.user_agent.as_str())
            .send_empty();

        let mut response = match result {
            Ok(response) => response,
            Err(e @ (ureq::Error::Http(_) | ureq::Error::BadUri(_))) => {
                self.note(format!("failed to build request: {}", e));
                return Err(SendError::RequestBuildFailed(e.to_string()));
            }
            Err(e) => {
                self.note(format!("request failed: {}", e));
                return Err(SendError::RequestFailed(e));
            }
        };

        // Drain so the connection can be reused; errors here don't matter
        if let Err(e) = std::io::copy(&mut response.body_mut().as_reader(), &mut std::io::sink()) {
            log::debug!("Failed to drain response body: {}", e);
        }

        let status = response.status();
        if status.is_success() {
            self.note(format!("event logged successfully: {}", status));
            Ok(())
        } else {
            self.note(format!("non-success status: {}", status));
            Err(SendError::NonSuccessStatus { status: status.as_u16() })
        }
    }

    fn note(&self, message: impl AsRef<str>) {
        let message = message.as_ref();
        log::debug!("{}", message);
        if self.config.verbose {
            self.sink.write_line(&diagnostics::format_line(message));
        }
    }
}

impl fmt::Debug for EventLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventLogger")
            .field("config", &self.config)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        lines: Mutex<Vec<String>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn write_line(&self, line: &str) {
            self.lines.lock().unwrap().push(line.to_string());
        }
    }

    fn config(endpoint: &str, disabled: bool, verbose: bool) -> LoggerConfig {
        LoggerConfig {
            endpoint: endpoint.to_string(),
            default_timeout: Duration::from_millis(500),
            disabled,
            verbose,
        }
    }

    fn logger_with_sink(config: LoggerConfig) -> (EventLogger, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let logger = EventLogger::with_config(config).with_sink(sink.clone());
        (logger, sink)
    }

    #[test]
    fn test_disabled_short_circuits() {
        let (logger, sink) = logger_with_sink(config("", true, true));
        assert!(!logger.is_enabled());
        assert!(matches!(logger.send(None, None), Err(SendError::Disabled)));

        let lines = sink.lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("analytics disabled"));
    }

    #[test]
    fn test_missing_endpoint() {
        let (logger, _) = logger_with_sink(config("   ", false, false));
        assert!(logger.is_enabled());
        assert!(matches!(logger.validate(), Err(SendError::MissingEndpoint)));
        assert!(matches!(logger.send(None, None), Err(SendError::MissingEndpoint)));
    }

    #[test]
    fn test_invalid_endpoint() {
        let (logger, _) = logger_with_sink(config("not a url", false, false));
        assert!(matches!(logger.send(None, None), Err(SendError::InvalidEndpoint(_))));
    }

    #[test]
    fn test_unsupported_scheme_fails_build() {
        let (logger, _) = logger_with_sink(config("ftp://example.com/events", false, false));
        match logger.send(None, None) {
            Err(SendError::RequestBuildFailed(reason)) => assert!(reason.contains("ftp")),
            other => panic!("expected RequestBuildFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_quiet_when_not_verbose() {
        let (logger, sink) = logger_with_sink(config("", false, false));
        let _ = logger.send(None, None);
        assert!(sink.lines.lock().unwrap().is_empty());
    }

    #[test]
    fn test_verbose_lines_are_tagged() {
        let (logger, sink) = logger_with_sink(config("", false, true));
        let _ = logger.send(None, None);

        let lines = sink.lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[scarf] "));
        assert!(lines[0].ends_with("no endpoint URL configured; aborting"));
    }

    #[test]
    fn test_log_event_false_on_failure() {
        let (logger, _) = logger_with_sink(config("", true, false));
        assert!(!logger.log_event(&Properties::new()));
        assert!(!logger.log_event_with_timeout(&Properties::new(), Duration::from_secs(1)));
    }

    #[test]
    fn test_logger_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EventLogger>();
    }
}
