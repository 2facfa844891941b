use thiserror::Error;

/// Top-level error type for the `unicorn-api` crate.
///
/// Covers every failure mode of the REST surface: transport, URL
/// construction, unexpected status codes, and body decoding.
/// `unicorn-core` collapses these into per-operation domain errors.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Protocol ────────────────────────────────────────────────────
    /// The backend answered with a status other than the one the
    /// operation requires (e.g. 200 instead of 201 on create).
    #[error("Unexpected HTTP status {status} (expected {expected}): {body}")]
    UnexpectedStatus {
        status: u16,
        expected: u16,
        body: String,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_status_names_both_codes() {
        let err = Error::UnexpectedStatus {
            status: 200,
            expected: 201,
            body: "{}".into(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected HTTP status 200 (expected 201): {}"
        );
    }

    #[test]
    fn deserialization_message_omits_body() {
        let err = Error::Deserialization {
            message: "expected value".into(),
            body: "secret-bearing body".into(),
        };
        assert_eq!(err.to_string(), "Deserialization error: expected value");
    }
}
