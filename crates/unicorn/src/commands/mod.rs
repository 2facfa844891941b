//! Command handlers, one module per command family.

pub mod config_cmd;
pub mod contact;
pub mod unicorns;
pub mod util;

use std::sync::Arc;

use unicorn_core::{Environment, LogUrlOpener};

use crate::cli::{Command, GlobalOpts};
use crate::config;
use crate::error::CliError;

/// Route a backend-bound command to its handler.
pub async fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    let backend = config::resolve_backend(global)?;
    let env = Environment::from_config(&backend, Arc::new(LogUrlOpener))?;

    match cmd {
        Command::List => unicorns::list_all(env, global).await,
        Command::Get { unicorn } => unicorns::get(env, &unicorn, global).await,
        Command::Add { name, flavour } => unicorns::add(env, name, flavour, global).await,
        Command::Edit {
            unicorn,
            name,
            flavour,
        } => unicorns::edit(env, &unicorn, name, flavour, global).await,
        Command::Delete { unicorn } => unicorns::delete(env, &unicorn, global).await,
        Command::Contact { .. } | Command::Config(_) | Command::Completions(_) => Err(
            CliError::Internal("command does not need a backend".into()),
        ),
    }
}
