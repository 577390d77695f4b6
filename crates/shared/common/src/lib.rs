//! Common utilities shared across the services and the gateway.
//!
//! This crate provides:
//! - Unified error handling and its HTTP mapping
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
#[cfg(feature = "database")]
pub use error::is_unique_violation;

#[cfg(all(feature = "database", any(test, feature = "test-utils")))]
pub mod testing;
