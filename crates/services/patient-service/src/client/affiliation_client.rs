//! HTTP client for the social work affiliation API.
//!
//! Two lookups are exposed by the API:
//! - `GET {base}/social-works/{name}`
//! - `GET {base}/affiliates/{number}`
//!
//! A 2xx answer means the record exists, a 404 means it does not. Any other
//! status, or a transport failure, is reported as `ServiceUnavailable`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, error};

use super::AffiliationService;
use common::{AppError, AppResult};

const SERVICE_NAME: &str = "affiliation API";

/// Affiliation service backed by the remote registry.
#[derive(Clone)]
pub struct HttpAffiliationClient {
    client: Client,
    base_url: Url,
}

impl HttpAffiliationClient {
    /// Create a client for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout_ms: u64) -> AppResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            AppError::internal(format!("Invalid affiliation API URL '{}': {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::internal(format!(
                "Affiliation API URL '{}' cannot have path segments",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Build `{base}/{collection}/{key}` with `key` percent-encoded.
    fn endpoint(&self, collection: &str, key: &str) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(collection).push(key);
        }
        url
    }

    async fn exists(&self, collection: &str, key: &str) -> AppResult<bool> {
        let url = self.endpoint(collection, key);

        let response = self.client.get(url).send().await.map_err(|e| {
            error!(collection, "Affiliation API request failed: {}", e);
            AppError::service_unavailable(SERVICE_NAME)
        })?;

        let status = response.status();
        debug!(collection, status = %status, "Affiliation API answered");

        match status {
            s if s.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            s => {
                error!(collection, status = %s, "Unexpected affiliation API status");
                Err(AppError::service_unavailable(SERVICE_NAME))
            }
        }
    }
}

#[async_trait]
impl AffiliationService for HttpAffiliationClient {
    async fn social_work_exists(&self, social_work: &str) -> AppResult<bool> {
        self.exists("social-works", social_work.trim()).await
    }

    async fn is_affiliated(&self, affiliate_number: &str) -> AppResult<bool> {
        self.exists("affiliates", affiliate_number.trim()).await
    }
}
