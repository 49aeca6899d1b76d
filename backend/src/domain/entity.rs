//! Shared identity primitives for catalogue entities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier, unique within one entity kind.
///
/// Identifiers come from the store's sequence and never change once issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(i64);

impl EntityId {
    /// Wrap a raw store identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four kinds of record held by the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A film genre.
    Genre,
    /// A performer.
    Actor,
    /// A screening room.
    CinemaHall,
    /// A film.
    Movie,
}

impl EntityKind {
    /// Lower-case label used in messages and log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Genre => "genre",
            Self::Actor => "actor",
            Self::CinemaHall => "cinema hall",
            Self::Movie => "movie",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted catalogue record.
///
/// `Draft` carries every writable attribute and nothing else; an entity is a
/// draft plus the identifier the store assigned to it.
pub trait Entity: Clone + fmt::Debug + Send + Sync + 'static {
    /// Writable attributes of the entity.
    type Draft: Clone + fmt::Debug + PartialEq + Send + Sync + 'static;

    /// Kind tag used in messages.
    const KIND: EntityKind;

    /// Store-assigned identifier.
    fn id(&self) -> EntityId;

    /// Copy of the writable attributes.
    fn draft(&self) -> Self::Draft;

    /// Assemble an entity from its identifier and attributes.
    fn from_draft(id: EntityId, draft: Self::Draft) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn entity_id_serialises_as_bare_integer() {
        let value = serde_json::to_value(EntityId::new(42)).expect("serialise id");
        assert_eq!(value, serde_json::json!(42));
    }

    #[rstest]
    #[case(EntityKind::Genre, "genre")]
    #[case(EntityKind::CinemaHall, "cinema hall")]
    fn kind_labels(#[case] kind: EntityKind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }
}
