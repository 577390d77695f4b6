//! In-memory affiliation registry for development and testing.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::AffiliationService;
use common::AppResult;

/// Affiliation registry backed by fixed sets of known names and numbers.
///
/// Social work names match case-insensitively; affiliate numbers must
/// match exactly.
#[derive(Clone, Default)]
pub struct InMemoryAffiliationRegistry {
    social_works: HashSet<String>,
    affiliates: HashSet<String>,
    /// Number of lookups served, for tests
    lookup_count: Arc<AtomicU64>,
}

impl InMemoryAffiliationRegistry {
    /// Create a registry that knows the given social works and affiliates
    pub fn new<S, A>(social_works: S, affiliates: A) -> Self
    where
        S: IntoIterator<Item = String>,
        A: IntoIterator<Item = String>,
    {
        Self {
            social_works: social_works
                .into_iter()
                .map(|name| name.trim().to_lowercase())
                .filter(|name| !name.is_empty())
                .collect(),
            affiliates: affiliates
                .into_iter()
                .map(|number| number.trim().to_string())
                .filter(|number| !number.is_empty())
                .collect(),
            lookup_count: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get the total number of lookups served
    pub fn lookup_count(&self) -> u64 {
        self.lookup_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AffiliationService for InMemoryAffiliationRegistry {
    async fn social_work_exists(&self, social_work: &str) -> AppResult<bool> {
        self.lookup_count.fetch_add(1, Ordering::SeqCst);
        let exists = self
            .social_works
            .contains(&social_work.trim().to_lowercase());
        debug!(social_work, exists, "In-memory social work lookup");
        Ok(exists)
    }

    async fn is_affiliated(&self, affiliate_number: &str) -> AppResult<bool> {
        self.lookup_count.fetch_add(1, Ordering::SeqCst);
        let affiliated = self.affiliates.contains(affiliate_number.trim());
        debug!(affiliated, "In-memory affiliate lookup");
        Ok(affiliated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> InMemoryAffiliationRegistry {
        InMemoryAffiliationRegistry::new(
            vec!["OSDE".to_string(), " Swiss Medical ".to_string(), String::new()],
            vec!["123456".to_string()],
        )
    }

    #[tokio::test]
    async fn test_known_social_work_is_case_insensitive() {
        let registry = registry();
        assert!(registry.social_work_exists("OSDE").await.unwrap());
        assert!(registry.social_work_exists("osde").await.unwrap());
        assert!(registry.social_work_exists("swiss medical").await.unwrap());
        assert!(!registry.social_work_exists("Galeno").await.unwrap());
        assert!(!registry.social_work_exists("").await.unwrap());
    }

    #[tokio::test]
    async fn test_affiliate_lookup() {
        let registry = registry();
        assert!(registry.is_affiliated("123456").await.unwrap());
        assert!(!registry.is_affiliated("654321").await.unwrap());
        assert_eq!(registry.lookup_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_registry_knows_nothing() {
        let registry = InMemoryAffiliationRegistry::default();
        assert!(!registry.social_work_exists("OSDE").await.unwrap());
        assert!(!registry.is_affiliated("123456").await.unwrap());
    }
}
