//! Shared configuration for the unicorn CLI.
//!
//! A flat TOML file, `UNICORN_`-prefixed environment overrides, secret
//! resolution (env + keyring + plaintext), and translation to
//! `unicorn_core::BackendConfig`. The CLI layers its flag overrides on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use unicorn_core::{Backend, BackendConfig, TlsVerification};

const KEYRING_SERVICE: &str = "unicorn";
const KEYRING_USER: &str = "api-secret";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no API secret configured for the http backend")]
    NoSecret,

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config ─────────────────────────────────────────────────────

/// Which entity client to run against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Http,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendKind,

    /// crudcrud base URL; requests go to `{endpoint}/api/{secret}/unicorns`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API secret (plaintext; prefer keyring or env var).
    pub api_secret: Option<String>,

    /// Environment variable name containing the API secret.
    pub api_secret_env: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    #[serde(default)]
    pub insecure: bool,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            endpoint: default_endpoint(),
            api_secret: None,
            api_secret_env: None,
            ca_cert: None,
            insecure: false,
            timeout: default_timeout(),
            output: default_output(),
        }
    }
}

fn default_endpoint() -> String {
    "https://crudcrud.com".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_output() -> String {
    "table".into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "unicorn", "unicorn").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("unicorn");
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the config from the canonical path + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load the config from `path` + environment. A missing file is not an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("UNICORN_"));

    Ok(figment.extract()?)
}

/// Load config, returning a default if it cannot be read.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Write `cfg` to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(cfg)?)?;
    Ok(())
}

// ── Secret resolution ───────────────────────────────────────────────

/// Resolve the API secret: named env var, then system keyring, then
/// plaintext config.
pub fn resolve_secret(cfg: &Config) -> Result<SecretString, ConfigError> {
    if let Some(ref env_name) = cfg.api_secret_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    if let Some(ref secret) = cfg.api_secret {
        return Ok(SecretString::from(secret.clone()));
    }

    Err(ConfigError::NoSecret)
}

/// Store the API secret in the system keyring.
pub fn store_secret(secret: &str) -> Result<(), ConfigError> {
    keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER)
        .and_then(|entry| entry.set_password(secret))
        .map_err(|e| ConfigError::Validation {
            field: "keyring".into(),
            reason: e.to_string(),
        })
}

// ── Translation ─────────────────────────────────────────────────────

fn tls(cfg: &Config) -> TlsVerification {
    if cfg.insecure {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = cfg.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    }
}

/// Build a `BackendConfig`, resolving the secret from the credential chain.
pub fn to_backend_config(cfg: &Config) -> Result<BackendConfig, ConfigError> {
    let secret = match cfg.backend {
        BackendKind::Memory => None,
        BackendKind::Http => Some(resolve_secret(cfg)?),
    };
    to_backend_config_with(cfg, secret)
}

/// Build a `BackendConfig` with an already resolved secret.
pub fn to_backend_config_with(
    cfg: &Config,
    secret: Option<SecretString>,
) -> Result<BackendConfig, ConfigError> {
    let backend = match cfg.backend {
        BackendKind::Memory => Backend::Memory,
        BackendKind::Http => {
            let endpoint: url::Url = cfg.endpoint.parse().map_err(|_| ConfigError::Validation {
                field: "endpoint".into(),
                reason: format!("invalid URL: {}", cfg.endpoint),
            })?;
            Backend::Http {
                endpoint,
                secret: secret.ok_or(ConfigError::NoSecret)?,
            }
        }
    };

    Ok(BackendConfig {
        backend,
        tls: tls(cfg),
        timeout: Duration::from_secs(cfg.timeout),
    })
}
