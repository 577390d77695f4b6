//! HTTP handlers.

pub mod auth_handler;
pub mod health_handler;
pub mod patient_handler;

pub use auth_handler::auth_routes;
pub use health_handler::health_routes;
pub use patient_handler::patient_routes;
