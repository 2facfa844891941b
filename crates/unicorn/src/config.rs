//! CLI configuration, a thin wrapper around `unicorn_config`.
//!
//! Applies `GlobalOpts` flag overrides on top of the loaded file and
//! environment, then resolves the backend the commands run against.

use secrecy::SecretString;

use unicorn_config::BackendKind;
use unicorn_core::BackendConfig;

use crate::cli::{BackendArg, GlobalOpts};
use crate::error::CliError;

pub use unicorn_config::{Config, config_path, load_config_or_default, save_config};

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Http => BackendKind::Http,
            BackendArg::Memory => BackendKind::Memory,
        }
    }
}

/// Merge CLI flags into `cfg`. Flags win over file and environment.
pub fn apply_overrides(mut cfg: Config, global: &GlobalOpts) -> Config {
    if let Some(backend) = global.backend {
        cfg.backend = backend.into();
    }
    if let Some(ref endpoint) = global.endpoint {
        cfg.endpoint.clone_from(endpoint);
    }
    if let Some(timeout) = global.timeout {
        cfg.timeout = timeout;
    }
    if global.insecure {
        cfg.insecure = true;
    }
    cfg
}

/// The effective config for this invocation.
pub fn effective(global: &GlobalOpts) -> Config {
    apply_overrides(load_config_or_default(), global)
}

/// Build the `BackendConfig` for this invocation.
///
/// A `--secret` flag takes priority over the config credential chain.
pub fn resolve_backend(global: &GlobalOpts) -> Result<BackendConfig, CliError> {
    let cfg = effective(global);
    match (&cfg.backend, &global.secret) {
        (BackendKind::Http, Some(secret)) => Ok(unicorn_config::to_backend_config_with(
            &cfg,
            Some(SecretString::from(secret.clone())),
        )?),
        _ => Ok(unicorn_config::to_backend_config(&cfg)?),
    }
}
