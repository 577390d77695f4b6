//! Clients for the social work affiliation registry.

mod affiliation_client;
mod in_memory;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use common::{AffiliationApiConfig, AppResult};

pub use affiliation_client::HttpAffiliationClient;
pub use in_memory::InMemoryAffiliationRegistry;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Checks social works and their affiliates against an external registry.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AffiliationService: Send + Sync {
    /// Whether a social work with this name exists
    async fn social_work_exists(&self, social_work: &str) -> AppResult<bool>;

    /// Whether this affiliate number belongs to a registered affiliate
    async fn is_affiliated(&self, affiliate_number: &str) -> AppResult<bool>;
}

/// Pick the affiliation backend for `config`: the HTTP API when a base URL
/// is set, otherwise an in-memory registry seeded from the known lists.
pub fn affiliation_service_from_config(
    config: &AffiliationApiConfig,
) -> AppResult<Arc<dyn AffiliationService>> {
    match config.base_url.as_deref() {
        Some(base_url) => {
            info!(base_url, "Using affiliation API");
            let client = HttpAffiliationClient::new(base_url, config.timeout_ms)?;
            Ok(Arc::new(client))
        }
        None => {
            info!(
                social_works = config.known_social_works.len(),
                affiliates = config.known_affiliates.len(),
                "AFFILIATION_API_URL not set, using in-memory affiliation registry"
            );
            Ok(Arc::new(InMemoryAffiliationRegistry::new(
                config.known_social_works.iter().cloned(),
                config.known_affiliates.iter().cloned(),
            )))
        }
    }
}
