//! Config subcommand handlers.

use std::fmt::Write;

use tracing::warn;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

/// Format config for display, masking the secret.
fn format_config_redacted(cfg: &Config) -> String {
    let mut out = String::new();
    let backend = match cfg.backend {
        unicorn_config::BackendKind::Http => "http",
        unicorn_config::BackendKind::Memory => "memory",
    };
    let _ = writeln!(out, "backend = \"{backend}\"");
    let _ = writeln!(out, "endpoint = \"{}\"", cfg.endpoint);
    if cfg.api_secret.is_some() {
        let _ = writeln!(out, "api_secret = \"****\"");
    }
    if let Some(ref env) = cfg.api_secret_env {
        let _ = writeln!(out, "api_secret_env = \"{env}\"");
    }
    if let Some(ref ca) = cfg.ca_cert {
        let _ = writeln!(out, "ca_cert = \"{}\"", ca.display());
    }
    let _ = writeln!(out, "insecure = {}", cfg.insecure);
    let _ = writeln!(out, "timeout = {}", cfg.timeout);
    let _ = write!(out, "output = \"{}\"", cfg.output);
    out
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let mut cfg = config::effective(global);
            if cfg.api_secret.is_some() {
                cfg.api_secret = Some("****".into());
            }
            let out = match global.output {
                OutputFormat::Json => serde_json::to_string_pretty(&cfg)?,
                OutputFormat::JsonCompact => serde_json::to_string(&cfg)?,
                OutputFormat::Table | OutputFormat::Plain => format_config_redacted(&cfg),
            };
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Init { force } => {
            let path = config::config_path();
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }

            let mut cfg = config::effective(global);
            if let Some(ref secret) = global.secret {
                if let Err(e) = unicorn_config::store_secret(secret) {
                    warn!(error = %e, "keyring unavailable, storing secret in config file");
                    cfg.api_secret = Some(secret.clone());
                }
            }

            let written = config::save_config(&cfg)?;
            output::print_status(
                &format!("Config written to {}", written.display()),
                &global.color,
                global.quiet,
            );
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacted_output_masks_secret() {
        let cfg = Config {
            api_secret: Some("s3cr3t".into()),
            ..Config::default()
        };
        let out = format_config_redacted(&cfg);
        assert!(out.contains("api_secret = \"****\""));
        assert!(!out.contains("s3cr3t"));
        assert!(out.starts_with("backend = \"http\""));
    }
}
