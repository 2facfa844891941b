// ── Core error types ──
//
// `UnicornError` is the closed taxonomy the state layer sees: one kind per
// CRUD operation family plus a catch-all. Entity clients collapse every
// transport, status, and decode failure into the family's kind.
//
// `CoreError` covers building the runtime itself (bad endpoint, TLS setup).

use thiserror::Error;

/// Failure of a single entity-client operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum UnicornError {
    #[error("failed to load unicorns")]
    Fetch,

    #[error("failed to add the unicorn")]
    Add,

    #[error("failed to edit the unicorn")]
    Edit,

    #[error("failed to delete the unicorn")]
    Delete,

    #[error("unknown error")]
    Unknown,
}

/// Unified error type for constructing core services.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Cannot reach backend at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<unicorn_api::Error> for CoreError {
    fn from(err: unicorn_api::Error) -> Self {
        match err {
            unicorn_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            unicorn_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            unicorn_api::Error::Transport(ref e) => CoreError::ConnectionFailed {
                url: e
                    .url()
                    .map(|u| u.origin().ascii_serialization())
                    .unwrap_or_else(|| "<unknown>".into()),
                reason: e.to_string(),
            },
            other => CoreError::Internal(other.to_string()),
        }
    }
}
