use thiserror::Error;

use crate::category::RequestCategory;

/// Failure to complete an HTTP round trip.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Connection, DNS, timeout or body read failure.
    #[error("HTTP request failed: {0}")]
    Request(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Errors returned by [`WugClient`](crate::WugClient).
#[derive(Debug, Error)]
pub enum WugError {
    #[error("{category} request failed")]
    Transport {
        category: RequestCategory,
        #[source]
        source: TransportError,
    },

    /// The body did not match the category's response schema. The same
    /// body is still available through the raw accessors.
    #[error("failed to decode {category} response")]
    Decode {
        category: RequestCategory,
        #[source]
        source: serde_json::Error,
    },
}

impl WugError {
    pub fn category(&self) -> RequestCategory {
        match self {
            WugError::Transport { category, .. } | WugError::Decode { category, .. } => *category,
        }
    }
}

#[derive(Debug, Error)]
#[error(
    "Unknown category '{0}'. Supported categories: conditions, forecast, forecast10day, hourly, hourly10day."
)]
pub struct UnknownCategory(pub String);
