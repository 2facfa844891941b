//! CLI error types with miette diagnostics.

use miette::Diagnostic;
use thiserror::Error;

use unicorn_config::ConfigError;
use unicorn_core::{AlertState, CoreError};

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach backend at {url}")]
    #[diagnostic(
        code(unicorn::connection_failed),
        help("Check the endpoint, or try: unicorn --backend memory list")
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("No API secret configured")]
    #[diagnostic(
        code(unicorn::no_secret),
        help(
            "Pass --secret, set UNICORN_SECRET, or store one with:\n\
             unicorn --secret <SECRET> config init"
        )
    )]
    NoSecret,

    // ── Workflow ─────────────────────────────────────────────────────
    #[error("{title}: {message}")]
    #[diagnostic(code(unicorn::rejected))]
    Rejected { title: String, message: String },

    #[error("Unicorn '{identifier}' not found")]
    #[diagnostic(
        code(unicorn::not_found),
        help("Run: unicorn list to see available unicorns")
    )]
    NotFound { identifier: String },

    #[error("'{identifier}' matches {count} unicorns")]
    #[diagnostic(code(unicorn::ambiguous), help("Use the unicorn id instead of its name"))]
    Ambiguous { identifier: String, count: usize },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(unicorn::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration file already exists at {path}")]
    #[diagnostic(code(unicorn::config_exists), help("Use --force to overwrite it"))]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(code(unicorn::config))]
    Config(ConfigError),

    #[error("Internal error: {0}")]
    #[diagnostic(code(unicorn::internal))]
    Internal(String),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to encode output: {0}")]
    #[diagnostic(code(unicorn::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::NoSecret => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Ambiguous { .. } | Self::ConfigExists { .. } => exit_code::CONFLICT,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

impl From<&AlertState> for CliError {
    fn from(alert: &AlertState) -> Self {
        Self::Rejected {
            title: alert.title.clone(),
            message: alert.message.clone(),
        }
    }
}

// ── Lower-layer error mapping ────────────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoSecret => Self::NoSecret,
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(other),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => Self::ConnectionFailed { url, reason },
            CoreError::Config { message } => Self::Validation {
                field: "config".into(),
                reason: message,
            },
            CoreError::Internal(message) => Self::Internal(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicorn_core::{UnicornError, translate};

    #[test]
    fn alert_becomes_general_failure() {
        let err = CliError::from(&translate(&UnicornError::Add));
        assert_eq!(err.exit_code(), exit_code::GENERAL);
        assert!(err.to_string().starts_with("Error: An error was encountered"));
    }

    #[test]
    fn missing_secret_is_auth_failure() {
        assert_eq!(
            CliError::from(ConfigError::NoSecret).exit_code(),
            exit_code::AUTH
        );
    }

    #[test]
    fn connection_errors_keep_url() {
        let err = CliError::from(CoreError::ConnectionFailed {
            url: "https://crudcrud.com".into(),
            reason: "refused".into(),
        });
        assert_eq!(err.exit_code(), exit_code::CONNECTION);
        assert!(err.to_string().contains("crudcrud.com"));
    }
}
