//! Gateway configuration.

use std::env;

use common::{AffiliationApiConfig, DatabaseConfig, ServiceConfig};
use patient_service_lib::PatientServiceConfig;

/// Gateway configuration.
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    /// HTTP listener settings
    pub server: ServiceConfig,
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Social work affiliation API settings
    pub affiliation: AffiliationApiConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let server = ServiceConfig::default();
        let database = DatabaseConfig::default();

        Self {
            server: ServiceConfig {
                host: env::var("GATEWAY_HOST").unwrap_or(server.host),
                port: env::var("GATEWAY_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(server.port),
                log_level: env::var("LOG_LEVEL").unwrap_or(server.log_level),
                ..server
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or(database.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(database.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(database.min_connections),
            },
            affiliation: PatientServiceConfig::from_env().affiliation,
        }
    }
}
