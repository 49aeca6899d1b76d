//! Outbound adapters implementing the entity store port.
//!
//! - **memory**: process-local store used without a database and in tests
//! - **persistence**: PostgreSQL-backed store using Diesel ORM
//!
//! Adapters translate between domain entities and storage representations
//! and contain no validation logic of their own.

pub mod memory;
pub mod persistence;
