//! Patient service configuration.

use std::env;

use common::AffiliationApiConfig;

/// Patient service configuration.
#[derive(Debug, Clone, Default)]
pub struct PatientServiceConfig {
    /// Social work affiliation API settings
    pub affiliation: AffiliationApiConfig,
}

impl PatientServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = AffiliationApiConfig::default();

        Self {
            affiliation: AffiliationApiConfig {
                base_url: env::var("AFFILIATION_API_URL")
                    .ok()
                    .map(|url| url.trim().to_string())
                    .filter(|url| !url.is_empty()),
                timeout_ms: env::var("AFFILIATION_API_TIMEOUT_MS")
                    .ok()
                    .and_then(|ms| ms.parse().ok())
                    .unwrap_or(defaults.timeout_ms),
                known_social_works: env::var("KNOWN_SOCIAL_WORKS")
                    .map(|list| split_list(&list))
                    .unwrap_or_default(),
                known_affiliates: env::var("KNOWN_AFFILIATES")
                    .map(|list| split_list(&list))
                    .unwrap_or_default(),
            },
        }
    }
}

/// Split a comma-separated list, dropping blank entries.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}
