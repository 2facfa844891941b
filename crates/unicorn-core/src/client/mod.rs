// ── Entity client ──
//
// CRUD over unicorns. Every operation surfaces exactly one error kind on
// failure and never retries; the reducers decide what a failure means.

mod http;
mod memory;

pub use http::HttpUnicornClient;
pub use memory::InMemoryUnicornClient;

use futures_util::future::BoxFuture;
use uuid::Uuid;

use crate::error::UnicornError;
use crate::model::{Flavour, Unicorn};

/// Operations against a unicorn backend.
///
/// - `get_all` / `get` fail with [`UnicornError::Fetch`]
/// - `add` fails with [`UnicornError::Add`]
/// - `update` fails with [`UnicornError::Edit`]
/// - `delete` fails with [`UnicornError::Delete`]
pub trait UnicornClient: Send + Sync {
    fn get_all(&self) -> BoxFuture<'_, Result<Vec<Unicorn>, UnicornError>>;

    fn get(&self, id: Uuid) -> BoxFuture<'_, Result<Option<Unicorn>, UnicornError>>;

    fn add(&self, unicorn: Unicorn) -> BoxFuture<'_, Result<bool, UnicornError>>;

    fn update(
        &self,
        unicorn: Unicorn,
        name: String,
        flavour: Flavour,
    ) -> BoxFuture<'_, Result<bool, UnicornError>>;

    fn delete(&self, unicorn: Unicorn) -> BoxFuture<'_, Result<bool, UnicornError>>;
}
