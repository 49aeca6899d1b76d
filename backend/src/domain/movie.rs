//! Movie entity and its genre/actor reference sets.

use super::entity::{Entity, EntityId, EntityKind};

/// Writable attributes of a movie.
///
/// `genres` and `actors` are reference sets: [`Movie::from_draft`] keeps them
/// sorted ascending without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDraft {
    /// Movie title.
    pub title: String,
    /// Free-form synopsis.
    pub description: String,
    /// Running time in minutes.
    pub duration: i32,
    /// Referenced genre identifiers.
    pub genres: Vec<EntityId>,
    /// Referenced actor identifiers.
    pub actors: Vec<EntityId>,
}

/// A film together with the genres and actors it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    id: EntityId,
    title: String,
    description: String,
    duration: i32,
    genres: Vec<EntityId>,
    actors: Vec<EntityId>,
}

/// Sort and deduplicate a reference set.
///
/// # Examples
/// ```
/// use backend::domain::{EntityId, normalise_references};
///
/// let ids = normalise_references(vec![EntityId::new(3), EntityId::new(1), EntityId::new(3)]);
/// assert_eq!(ids, vec![EntityId::new(1), EntityId::new(3)]);
/// ```
#[must_use]
pub fn normalise_references(mut ids: Vec<EntityId>) -> Vec<EntityId> {
    ids.sort_unstable();
    ids.dedup();
    ids
}

impl Movie {
    /// Movie title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Free-form synopsis.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Running time in minutes.
    #[must_use]
    pub const fn duration(&self) -> i32 {
        self.duration
    }

    /// Referenced genres, ascending.
    #[must_use]
    pub fn genres(&self) -> &[EntityId] {
        &self.genres
    }

    /// Referenced actors, ascending.
    #[must_use]
    pub fn actors(&self) -> &[EntityId] {
        &self.actors
    }
}

impl Entity for Movie {
    type Draft = MovieDraft;

    const KIND: EntityKind = EntityKind::Movie;

    fn id(&self) -> EntityId {
        self.id
    }

    fn draft(&self) -> MovieDraft {
        MovieDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            duration: self.duration,
            genres: self.genres.clone(),
            actors: self.actors.clone(),
        }
    }

    fn from_draft(id: EntityId, draft: MovieDraft) -> Self {
        let MovieDraft {
            title,
            description,
            duration,
            genres,
            actors,
        } = draft;
        Self {
            id,
            title,
            description,
            duration,
            genres: normalise_references(genres),
            actors: normalise_references(actors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn from_draft_normalises_reference_sets() {
        let movie = Movie::from_draft(
            EntityId::new(9),
            MovieDraft {
                title: "Heat".to_owned(),
                description: "LA crime saga".to_owned(),
                duration: 170,
                genres: vec![EntityId::new(4), EntityId::new(2), EntityId::new(4)],
                actors: Vec::new(),
            },
        );

        assert_eq!(movie.genres(), &[EntityId::new(2), EntityId::new(4)]);
        assert!(movie.actors().is_empty());
    }
}
