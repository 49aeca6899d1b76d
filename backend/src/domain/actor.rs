//! Actor entity.

use super::entity::{Entity, EntityId, EntityKind};

/// Writable attributes of an actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorDraft {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

/// A performer who can be credited on movies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    id: EntityId,
    first_name: String,
    last_name: String,
}

impl Actor {
    /// Given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }
}

impl Entity for Actor {
    type Draft = ActorDraft;

    const KIND: EntityKind = EntityKind::Actor;

    fn id(&self) -> EntityId {
        self.id
    }

    fn draft(&self) -> ActorDraft {
        ActorDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }

    fn from_draft(id: EntityId, draft: ActorDraft) -> Self {
        let ActorDraft {
            first_name,
            last_name,
        } = draft;
        Self {
            id,
            first_name,
            last_name,
        }
    }
}
