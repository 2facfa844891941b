// HTTP-backed entity client.
//
// Translates `unicorn_api` failures into the operation family's domain
// error. The underlying cause is logged once, then discarded.

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use secrecy::SecretString;
use tracing::warn;
use url::Url;
use uuid::Uuid;

use unicorn_api::{CrudClient, TransportConfig, UnicornRecord};

use super::UnicornClient;
use crate::error::{CoreError, UnicornError};
use crate::model::{Flavour, Unicorn};

pub struct HttpUnicornClient {
    api: CrudClient,
}

impl HttpUnicornClient {
    pub fn new(
        endpoint: &Url,
        secret: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            api: CrudClient::new(endpoint, secret, transport)?,
        })
    }

    pub fn with_api(api: CrudClient) -> Self {
        Self { api }
    }
}

/// Collapse an API error into `kind`, logging the cause.
fn collapse(
    operation: &'static str,
    kind: UnicornError,
) -> impl FnOnce(unicorn_api::Error) -> UnicornError {
    move |err| {
        warn!(operation, error = %err, "backend request failed");
        kind
    }
}

/// The backend record id, required to address an existing unicorn.
fn record_id(
    unicorn: &Unicorn,
    operation: &'static str,
    kind: UnicornError,
) -> Result<String, UnicornError> {
    unicorn.record_id.clone().ok_or_else(|| {
        warn!(operation, id = %unicorn.id, "unicorn has no backend record id");
        kind
    })
}

impl UnicornClient for HttpUnicornClient {
    fn get_all(&self) -> BoxFuture<'_, Result<Vec<Unicorn>, UnicornError>> {
        async move {
            let records = self
                .api
                .list_unicorns()
                .await
                .map_err(collapse("get_all", UnicornError::Fetch))?;
            Ok(records.into_iter().map(Unicorn::from).collect())
        }
        .boxed()
    }

    fn get(&self, id: Uuid) -> BoxFuture<'_, Result<Option<Unicorn>, UnicornError>> {
        // Records are addressed by backend id, so look the semantic id up
        // in the collection.
        async move {
            let records = self
                .api
                .list_unicorns()
                .await
                .map_err(collapse("get", UnicornError::Fetch))?;
            Ok(records.into_iter().map(Unicorn::from).find(|u| u.id == id))
        }
        .boxed()
    }

    fn add(&self, unicorn: Unicorn) -> BoxFuture<'_, Result<bool, UnicornError>> {
        async move {
            self.api
                .create_unicorn(&UnicornRecord::from(&unicorn))
                .await
                .map_err(collapse("add", UnicornError::Add))?;
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
            let record_id = record_id(&unicorn, "update", UnicornError::Edit)?;
            let updated = Unicorn {
                name,
                flavour,
                ..unicorn
            };
            self.api
                .update_unicorn(&record_id, &UnicornRecord::from(&updated))
                .await
                .map_err(collapse("update", UnicornError::Edit))?;
            Ok(true)
        }
        .boxed()
    }

    fn delete(&self, unicorn: Unicorn) -> BoxFuture<'_, Result<bool, UnicornError>> {
        async move {
            let record_id = record_id(&unicorn, "delete", UnicornError::Delete)?;
            self.api
                .delete_unicorn(&record_id)
                .await
                .map_err(collapse("delete", UnicornError::Delete))?;
            Ok(true)
        }
        .boxed()
    }
}
