//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories are thin translators between Diesel rows and domain
//! entities; constraint enforcement (unique genre names, movie references,
//! cascading link removal) is left to the database and mapped back into
//! `RepositoryError` variants.
//!
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module.

mod diesel_catalogue_repository;
mod error_mapping;
mod flat_repository_macros;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_catalogue_repository::DieselCatalogue;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
