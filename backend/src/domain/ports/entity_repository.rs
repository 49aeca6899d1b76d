//! Driven port for the entity store.
//!
//! One generic contract covers every entity kind; adapters implement it once
//! per kind (`EntityRepository<Genre>`, `EntityRepository<Movie>`, ...).

use async_trait::async_trait;

use crate::domain::{Entity, EntityId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by entity store adapters.
    pub enum RepositoryError {
        /// The store could not be reached.
        Connection {
            /// Underlying cause.
            message: String,
        } => "entity store connection failed: {message}",
        /// A query or mutation failed during execution.
        Query {
            /// Underlying cause.
            message: String,
        } => "entity store query failed: {message}",
        /// A unique constraint rejected the write.
        Duplicate {
            /// Wire name of the unique field.
            field: String,
        } => "duplicate value for unique field {field}",
        /// A reference points at a row that does not exist.
        MissingReference {
            /// Wire name of the relation, `genres` or `actors`.
            field: String,
            /// Identifier that was not found.
            id: i64,
        } => "{field} references missing row {id}",
    }
}

/// Persistence contract for one entity kind.
///
/// `update` and `delete` report an absent identifier through `None`/`false`
/// rather than an error so callers decide how to surface it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityRepository<E: Entity>: Send + Sync {
    /// All rows in ascending identifier order.
    async fn list(&self) -> Result<Vec<E>, RepositoryError>;

    /// Fetch one row.
    async fn find_by_id(&self, id: EntityId) -> Result<Option<E>, RepositoryError>;

    /// Insert a row; the store assigns the identifier.
    async fn insert(&self, draft: &E::Draft) -> Result<E, RepositoryError>;

    /// Overwrite every attribute of an existing row.
    async fn update(&self, id: EntityId, draft: &E::Draft) -> Result<Option<E>, RepositoryError>;

    /// Remove a row, returning whether it existed.
    async fn delete(&self, id: EntityId) -> Result<bool, RepositoryError>;

    /// The subset of `ids` that currently exist.
    async fn existing_ids(&self, ids: Vec<EntityId>) -> Result<Vec<EntityId>, RepositoryError>;
}
