// ── Runtime backend configuration ──
//
// These types describe *which* backend the entity client talks to and how.
// They carry credential data and connection tuning, but never touch disk.
// The CLI constructs a `BackendConfig` and hands it in.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use unicorn_api::{TlsMode, TransportConfig};

/// Where unicorns are stored.
#[derive(Debug, Clone)]
pub enum Backend {
    /// Process-local store seeded with the sample unicorns.
    Memory,
    /// crudcrud-style REST service.
    Http { endpoint: Url, secret: SecretString },
}

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (local self-signed backends).
    DangerAcceptInvalid,
}

/// Configuration for the entity client.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub backend: Backend,
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Memory,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl BackendConfig {
    pub(crate) fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: match &self.tls {
                TlsVerification::SystemDefaults => TlsMode::System,
                TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
                TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
            },
            timeout: self.timeout,
        }
    }
}
