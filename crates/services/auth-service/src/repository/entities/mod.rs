//! SeaORM entities backing user accounts.

pub mod employee;
pub mod user;
