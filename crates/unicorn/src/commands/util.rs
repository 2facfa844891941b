//! Shared helpers for command handlers.

use uuid::Uuid;

use unicorn_core::ListState;

use crate::error::CliError;

/// Resolve a unicorn identifier (UUID or case-insensitive name) against the
/// loaded list.
pub fn resolve_unicorn(list: &ListState, identifier: &str) -> Result<Uuid, CliError> {
    if let Ok(id) = Uuid::parse_str(identifier) {
        if list.items.contains_key(&id) {
            return Ok(id);
        }
    }

    let matches: Vec<Uuid> = list
        .unicorns()
        .filter(|u| u.name.eq_ignore_ascii_case(identifier))
        .map(|u| u.id)
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(CliError::NotFound {
            identifier: identifier.into(),
        }),
        _ => Err(CliError::Ambiguous {
            identifier: identifier.into(),
            count: matches.len(),
        }),
    }
}
