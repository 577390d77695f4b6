//! SeaORM entities.

pub mod patient;
