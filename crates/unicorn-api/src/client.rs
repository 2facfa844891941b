// CRUD REST client
//
// Wraps `reqwest::Client` with crudcrud-style URL construction and
// per-operation status checks. The API secret is embedded in the base
// URL path, so URLs are never logged in full.

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::models::UnicornRecord;
use crate::transport::TransportConfig;

const UNICORNS: &str = "unicorns";

/// Raw HTTP client for a crudcrud-style backend.
///
/// Resources live under `{endpoint}/api/{secret}/{resource}`. Collection
/// reads expect `200`, creates expect `201`, and record-level PUT/DELETE
/// address the backend-assigned `_id` and expect `200`.
pub struct CrudClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CrudClient {
    /// Create a new client from the service endpoint and API secret.
    ///
    /// The `endpoint` is the service root (e.g. `https://crudcrud.com`).
    pub fn new(
        endpoint: &Url,
        secret: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let base = endpoint.as_str().trim_end_matches('/');
        let base_url = Url::parse(&format!("{base}/api/{}", secret.expose_secret()))?;
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client` and a base URL
    /// that already includes the secret segment.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// `{base}/unicorns`
    fn collection_url(&self) -> Result<Url, Error> {
        self.url_for(&[UNICORNS])
    }

    /// `{base}/unicorns/{id}`
    fn record_url(&self, id: &str) -> Result<Url, Error> {
        self.url_for(&[UNICORNS, id])
    }

    fn url_for(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ── Unicorn endpoints ────────────────────────────────────────────

    /// `GET /unicorns`: every stored record, in backend order.
    pub async fn list_unicorns(&self) -> Result<Vec<UnicornRecord>, Error> {
        debug!(resource = UNICORNS, "GET collection");
        let resp = self.http.get(self.collection_url()?).send().await?;
        let resp = expect_status(resp, StatusCode::OK).await?;
        decode(resp).await
    }

    /// `POST /unicorns`: store a new record.
    ///
    /// Returns the stored record when the backend echoes it back.
    pub async fn create_unicorn(
        &self,
        record: &UnicornRecord,
    ) -> Result<Option<UnicornRecord>, Error> {
        debug!(resource = UNICORNS, id = %record.id, "POST record");
        let resp = self
            .http
            .post(self.collection_url()?)
            .json(record)
            .send()
            .await?;
        let resp = expect_status(resp, StatusCode::CREATED).await?;
        let body = resp.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        match serde_json::from_str(&body) {
            Ok(created) => Ok(Some(created)),
            Err(e) => {
                trace!(error = %e, "create response body not a record, ignoring");
                Ok(None)
            }
        }
    }

    /// `PUT /unicorns/{record_id}`: replace a stored record.
    pub async fn update_unicorn(
        &self,
        record_id: &str,
        record: &UnicornRecord,
    ) -> Result<(), Error> {
        debug!(resource = UNICORNS, record_id, "PUT record");
        let resp = self
            .http
            .put(self.record_url(record_id)?)
            .json(record)
            .send()
            .await?;
        expect_status(resp, StatusCode::OK).await?;
        Ok(())
    }

    /// `DELETE /unicorns/{record_id}`
    pub async fn delete_unicorn(&self, record_id: &str) -> Result<(), Error> {
        debug!(resource = UNICORNS, record_id, "DELETE record");
        let resp = self.http.delete(self.record_url(record_id)?).send().await?;
        expect_status(resp, StatusCode::OK).await?;
        Ok(())
    }
}

// ── Response helpers ─────────────────────────────────────────────────

/// Fail with `UnexpectedStatus` unless the response carries `expected`.
async fn expect_status(
    resp: reqwest::Response,
    expected: StatusCode,
) -> Result<reqwest::Response, Error> {
    let status = resp.status();
    if status == expected {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(Error::UnexpectedStatus {
        status: status.as_u16(),
        expected: expected.as_u16(),
        body: body.chars().take(200).collect(),
    })
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        Error::Deserialization {
            message: format!("{e} (body preview: {preview:?})"),
            body,
        }
    })
}
