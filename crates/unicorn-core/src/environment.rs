// ── Effect environment ──
//
// The dependencies effects run against. Reducers never see it; the
// `Store` hands a clone to every task it starts.

use std::fmt;
use std::sync::Arc;

use tracing::info;

use crate::client::{HttpUnicornClient, InMemoryUnicornClient, UnicornClient};
use crate::config::{Backend, BackendConfig};
use crate::error::CoreError;
use crate::model::Unicorn;

/// Opens an external link. Fire-and-forget.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str);
}

/// Opener that only records the request in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogUrlOpener;

impl UrlOpener for LogUrlOpener {
    fn open(&self, url: &str) {
        info!(url, "open link");
    }
}

/// Everything an effect may talk to.
#[derive(Clone)]
pub struct Environment {
    pub unicorns: Arc<dyn UnicornClient>,
    pub url_opener: Arc<dyn UrlOpener>,
}

impl Environment {
    pub fn new(unicorns: Arc<dyn UnicornClient>, url_opener: Arc<dyn UrlOpener>) -> Self {
        Self {
            unicorns,
            url_opener,
        }
    }

    /// An environment backed by an in-memory store seeded with the sample
    /// unicorns, and a logging URL opener.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryUnicornClient::with_unicorns(Unicorn::samples())),
            Arc::new(LogUrlOpener),
        )
    }

    /// Build the environment a [`BackendConfig`] describes.
    pub fn from_config(
        config: &BackendConfig,
        url_opener: Arc<dyn UrlOpener>,
    ) -> Result<Self, CoreError> {
        let unicorns: Arc<dyn UnicornClient> = match &config.backend {
            Backend::Memory => Arc::new(InMemoryUnicornClient::with_unicorns(Unicorn::samples())),
            Backend::Http { endpoint, secret } => {
                Arc::new(HttpUnicornClient::new(endpoint, secret, &config.transport())?)
            }
        };
        Ok(Self::new(unicorns, url_opener))
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment").finish_non_exhaustive()
    }
}
