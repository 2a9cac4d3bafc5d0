//! Telemetry event transmission
//!
//! - settings: environment-derived, frozen configuration
//! - value: property value encoding
//! - query: merging encoded properties into the endpoint URL
//! - user_agent: self-describing client signature
//! - diagnostics: verbose-only stderr lines
//! - logger: the send path and outcome classification

pub mod diagnostics;
pub mod error;
pub mod logger;
pub mod query;
pub mod settings;
pub mod user_agent;
pub mod value;

pub use diagnostics::{DiagnosticSink, StderrSink};
pub use error::SendError;
pub use logger::EventLogger;
pub use settings::{DEFAULT_TIMEOUT, LoggerConfig};
pub use value::{Properties, PropertyValue};
