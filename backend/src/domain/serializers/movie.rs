//! Movie wire format and reference validation.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::fields::{MAX_CHAR_LENGTH, RecordReader};
use super::{Serializer, SerializerError, WireRecord, WriteMode, effective_mode};
use crate::domain::ports::{EntityRepository, RepositoryError};
use crate::domain::{
    Actor, Entity, EntityId, Genre, Movie, MovieDraft, normalise_references,
};

/// Wire shape `{"id", "title", "description", "duration", "genres", "actors"}`
/// with the relations rendered as ascending identifier arrays.
///
/// Every referenced identifier must exist; the check runs against the genre
/// and actor stores while validating.
#[derive(Clone)]
pub struct MovieSerializer {
    genres: Arc<dyn EntityRepository<Genre>>,
    actors: Arc<dyn EntityRepository<Actor>>,
}

impl MovieSerializer {
    /// Build a serializer that resolves references through the given stores.
    #[must_use]
    pub const fn new(
        genres: Arc<dyn EntityRepository<Genre>>,
        actors: Arc<dyn EntityRepository<Actor>>,
    ) -> Self {
        Self { genres, actors }
    }
}

fn id_array(ids: &[EntityId]) -> Value {
    Value::Array(ids.iter().map(|id| Value::from(id.get())).collect())
}

/// Identifiers in `wanted` that `store` does not hold, ascending.
async fn missing_references<E: Entity>(
    store: &dyn EntityRepository<E>,
    wanted: &[EntityId],
) -> Result<Vec<EntityId>, RepositoryError> {
    if wanted.is_empty() {
        return Ok(Vec::new());
    }
    let found: BTreeSet<EntityId> = store
        .existing_ids(wanted.to_vec())
        .await?
        .into_iter()
        .collect();
    Ok(wanted
        .iter()
        .copied()
        .filter(|id| !found.contains(id))
        .collect())
}

#[async_trait]
impl Serializer<Movie> for MovieSerializer {
    fn serialize(&self, movie: &Movie) -> WireRecord {
        let mut record = WireRecord::new();
        record.insert("id".to_owned(), Value::from(movie.id().get()));
        record.insert("title".to_owned(), Value::from(movie.title()));
        record.insert("description".to_owned(), Value::from(movie.description()));
        record.insert("duration".to_owned(), Value::from(movie.duration()));
        record.insert("genres".to_owned(), id_array(movie.genres()));
        record.insert("actors".to_owned(), id_array(movie.actors()));
        record
    }

    async fn deserialize(
        &self,
        record: &WireRecord,
        existing: Option<&Movie>,
        mode: WriteMode,
    ) -> Result<MovieDraft, SerializerError> {
        let current = existing.map(Entity::draft);
        let mut reader = RecordReader::new(record, effective_mode(existing, mode));
        let title = reader.text(
            "title",
            Some(MAX_CHAR_LENGTH),
            current.as_ref().map(|draft| draft.title.clone()),
        );
        let description = reader.text(
            "description",
            None,
            current.as_ref().map(|draft| draft.description.clone()),
        );
        let duration =
            reader.non_negative_int("duration", current.as_ref().map(|draft| draft.duration));
        let genres = reader
            .id_list("genres", current.as_ref().map(|draft| draft.genres.clone()))
            .map(normalise_references);
        let actors = reader
            .id_list("actors", current.map(|draft| draft.actors))
            .map(normalise_references);

        if let Some(ids) = genres.as_deref() {
            for id in missing_references(self.genres.as_ref(), ids).await? {
                reader.push_error("genres", missing_pk(id));
            }
        }
        if let Some(ids) = actors.as_deref() {
            for id in missing_references(self.actors.as_ref(), ids).await? {
                reader.push_error("actors", missing_pk(id));
            }
        }

        let errors = reader.finish();
        match (title, description, duration, genres, actors) {
            (Some(title), Some(description), Some(duration), Some(genres), Some(actors))
                if errors.is_empty() =>
            {
                Ok(MovieDraft {
                    title,
                    description,
                    duration,
                    genres,
                    actors,
                })
            }
            _ => Err(errors.into()),
        }
    }
}

/// Message for a reference to a row that does not exist.
#[must_use]
pub fn missing_pk(id: impl std::fmt::Display) -> String {
    format!("Invalid pk \"{id}\" - object does not exist.")
}
