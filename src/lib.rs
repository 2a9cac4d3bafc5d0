//! Minimal client-side telemetry event emitter
//!
//! Sends a single analytics ping per call:
//! - Opt-out via `DO_NOT_TRACK` / `SCARF_NO_ANALYTICS`
//! - Property values encoded into the endpoint's query string
//! - Per-call timeout without touching the shared HTTP agent

pub mod telemetry;

pub use telemetry::{
    DEFAULT_TIMEOUT, DiagnosticSink, EventLogger, LoggerConfig, Properties, PropertyValue, SendError, StderrSink,
};
