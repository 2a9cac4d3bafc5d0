//! Failure outcomes of a send

use thiserror::Error;

/// Why an event was not delivered, in precedence order
#[derive(Debug, Error)]
pub enum SendError {
    #[error("analytics disabled via environment")]
    Disabled,

    #[error("no endpoint URL configured")]
    MissingEndpoint,

    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("failed to build request: {0}")]
    RequestBuildFailed(String),

    #[error("request failed: {0}")]
    RequestFailed(#[source] ureq::Error),

    #[error("non-success status: {status}")]
    NonSuccessStatus { status: u16 },
}

impl SendError {
    /// Transport failure caused by the timeout expiring
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::RequestFailed(ureq::Error::Timeout(_)) => true,
            Self::RequestFailed(ureq::Error::Io(e)) => e.kind() == std::io::ErrorKind::TimedOut,
            _ => false,
        }
    }

    /// Status code of a non-2xx response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NonSuccessStatus { status } => Some(*status),
            _ => None,
        }
    }
}
