//! Auth Service Library
//!
//! Staff authentication: login against stored credentials and registration
//! of new employee accounts. Persistence goes through [`UserRepository`];
//! the gateway wires a [`UserStore`] and an Argon2 hasher into an
//! [`Authenticator`] and serves it over HTTP.

pub mod repository;
pub mod service;

pub use repository::{UserRepository, UserStore};
pub use service::{AuthService, Authenticator};
