//! API Gateway Library
//!
//! HTTP REST API for the clinic backend. Builds the auth and patient
//! services on top of a shared database and serves them with Axum.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod infra;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use auth_service_lib::{Authenticator, UserStore};
use common::{AffiliationApiConfig, AppResult};
use domain::Argon2Hasher;
use patient_service_lib::{affiliation_service_from_config, PatientManager, PatientStore};

use crate::config::GatewayConfig;
use crate::infra::Database;
use crate::routes::create_router;
use crate::state::AppState;

/// Wire repositories, collaborators and services over a connected database.
pub fn build_state(database: Database, affiliation: &AffiliationApiConfig) -> AppResult<AppState> {
    let connection = database.get_connection();

    let auth_service = Arc::new(Authenticator::new(
        Arc::new(UserStore::new(connection.clone())),
        Arc::new(Argon2Hasher),
    ));

    let patient_service = Arc::new(PatientManager::new(
        Arc::new(PatientStore::new(connection)),
        affiliation_service_from_config(affiliation)?,
    ));

    Ok(AppState::new(auth_service, patient_service, Some(database)))
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database (applies pending migrations)
    let database = Database::connect(&config.database).await?;

    let state = build_state(database, &config.affiliation)?;

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = config.server.addr().parse()?;
    info!("{} listening on {}", config.server.service_name, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &GatewayConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
