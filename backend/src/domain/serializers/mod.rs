//! Wire-format rendering and validation for catalogue entities.
//!
//! A serializer turns an entity into the JSON object clients see, and turns
//! a client-supplied JSON object back into a validated draft. Unknown keys
//! and client-supplied `id` values are ignored on the way in.

use async_trait::async_trait;
use serde_json::Value;

use super::Entity;
use super::ports::RepositoryError;

mod actor;
mod cinema_hall;
mod fields;
mod genre;
mod movie;

pub use actor::ActorSerializer;
pub use cinema_hall::CinemaHallSerializer;
pub use fields::{FieldErrors, MAX_CHAR_LENGTH, into_record, json_type_name};
pub use genre::GenreSerializer;
pub use movie::{MovieSerializer, missing_pk};

/// A JSON object as sent or received over the wire.
pub type WireRecord = serde_json::Map<String, Value>;

/// Whether a write must supply every required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Every required field must be present (create and PUT).
    Full,
    /// Absent fields keep their current value (PATCH).
    Partial,
}

/// Failure while turning a wire record into a draft.
#[derive(Debug, thiserror::Error)]
pub enum SerializerError {
    /// One or more fields failed validation.
    #[error("validation failed")]
    Invalid(FieldErrors),
    /// Looking up referenced rows failed.
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

impl From<FieldErrors> for SerializerError {
    fn from(errors: FieldErrors) -> Self {
        Self::Invalid(errors)
    }
}

/// Two-way mapping between an entity and its wire record.
#[async_trait]
pub trait Serializer<E: Entity>: Send + Sync {
    /// Render an entity, `id` included.
    fn serialize(&self, entity: &E) -> WireRecord;

    /// Validate `record` into a draft.
    ///
    /// `existing` is the row being updated, if any. In
    /// [`WriteMode::Partial`] absent fields fall back to its values; without
    /// an existing row every write is treated as [`WriteMode::Full`].
    async fn deserialize(
        &self,
        record: &WireRecord,
        existing: Option<&E>,
        mode: WriteMode,
    ) -> Result<E::Draft, SerializerError>;
}

/// The mode a write is actually validated under.
pub(crate) const fn effective_mode<E>(existing: Option<&E>, mode: WriteMode) -> WriteMode {
    if existing.is_some() {
        mode
    } else {
        WriteMode::Full
    }
}
