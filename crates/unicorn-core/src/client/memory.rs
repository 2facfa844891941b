// In-memory entity client.
//
// Local-persistence stand-in: an ordered vector behind a lock. Failures
// can be injected per operation family, and an artificial latency keeps
// operations genuinely asynchronous.

use std::collections::HashSet;
use std::sync::RwLock;
use std::time::Duration;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use tracing::debug;
use uuid::Uuid;

use super::UnicornClient;
use crate::error::UnicornError;
use crate::model::{Flavour, Unicorn};

#[derive(Default)]
pub struct InMemoryUnicornClient {
    unicorns: RwLock<Vec<Unicorn>>,
    failing: RwLock<HashSet<UnicornError>>,
    latency: Duration,
}

impl InMemoryUnicornClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unicorns(unicorns: Vec<Unicorn>) -> Self {
        Self {
            unicorns: RwLock::new(unicorns),
            ..Self::default()
        }
    }

    /// Delay every operation by `latency` before it touches the store.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Make every operation of `kind`'s family fail until [`recover`](Self::recover).
    pub fn fail(&self, kind: UnicornError) {
        if let Ok(mut failing) = self.failing.write() {
            failing.insert(kind);
        }
    }

    pub fn recover(&self, kind: UnicornError) {
        if let Ok(mut failing) = self.failing.write() {
            failing.remove(&kind);
        }
    }

    /// Current contents, in insertion order.
    pub fn snapshot(&self) -> Vec<Unicorn> {
        self.unicorns.read().map(|u| u.clone()).unwrap_or_default()
    }

    async fn enter(&self, kind: UnicornError) -> Result<(), UnicornError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let failing = self.failing.read().map_err(|_| kind)?;
        if failing.contains(&kind) {
            debug!(%kind, "injected failure");
            return Err(kind);
        }
        Ok(())
    }
}

impl UnicornClient for InMemoryUnicornClient {
    fn get_all(&self) -> BoxFuture<'_, Result<Vec<Unicorn>, UnicornError>> {
        async move {
            self.enter(UnicornError::Fetch).await?;
            let unicorns = self.unicorns.read().map_err(|_| UnicornError::Fetch)?;
            Ok(unicorns.clone())
        }
        .boxed()
    }

    fn get(&self, id: Uuid) -> BoxFuture<'_, Result<Option<Unicorn>, UnicornError>> {
        async move {
            self.enter(UnicornError::Fetch).await?;
            let unicorns = self.unicorns.read().map_err(|_| UnicornError::Fetch)?;
            Ok(unicorns.iter().find(|u| u.id == id).cloned())
        }
        .boxed()
    }

    fn add(&self, unicorn: Unicorn) -> BoxFuture<'_, Result<bool, UnicornError>> {
        async move {
            self.enter(UnicornError::Add).await?;
            let mut unicorns = self.unicorns.write().map_err(|_| UnicornError::Add)?;
            if unicorns.iter().any(|u| u.id == unicorn.id) {
                return Err(UnicornError::Add);
            }
            unicorns.push(unicorn);
            Ok(true)
        }
        .boxed()
    }

    fn update(
        &self,
        unicorn: Unicorn,
        name: String,
        flavour: Flavour,
    ) -> BoxFuture<'_, Result<bool, UnicornError>> {
        async move {
            self.enter(UnicornError::Edit).await?;
            let mut unicorns = self.unicorns.write().map_err(|_| UnicornError::Edit)?;
            let stored = unicorns
                .iter_mut()
                .find(|u| u.id == unicorn.id)
                .ok_or(UnicornError::Edit)?;
            stored.name = name;
            stored.flavour = flavour;
            Ok(true)
        }
        .boxed()
    }

    fn delete(&self, unicorn: Unicorn) -> BoxFuture<'_, Result<bool, UnicornError>> {
        async move {
            self.enter(UnicornError::Delete).await?;
            let mut unicorns = self.unicorns.write().map_err(|_| UnicornError::Delete)?;
            let before = unicorns.len();
            unicorns.retain(|u| u.id != unicorn.id);
            if unicorns.len() == before {
                return Err(UnicornError::Delete);
            }
            Ok(true)
        }
        .boxed()
    }
}
