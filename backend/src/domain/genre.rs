//! Genre entity.

use super::entity::{Entity, EntityId, EntityKind};

/// Writable attributes of a genre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreDraft {
    /// Unique genre name.
    pub name: String,
}

/// A film genre, e.g. "Drama".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    id: EntityId,
    name: String,
}

impl Genre {
    /// Unique genre name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl Entity for Genre {
    type Draft = GenreDraft;

    const KIND: EntityKind = EntityKind::Genre;

    fn id(&self) -> EntityId {
        self.id
    }

    fn draft(&self) -> GenreDraft {
        GenreDraft {
            name: self.name.clone(),
        }
    }

    fn from_draft(id: EntityId, draft: GenreDraft) -> Self {
        Self {
            id,
            name: draft.name,
        }
    }
}
