//! In-memory entity store.
//!
//! Used when no database URL is configured and by the HTTP integration
//! tests. All four kinds live behind one lock so cross-kind rules (unique
//! genre names, movie references, cascading deletes) see a consistent view.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{EntityRepository, RepositoryError};
use crate::domain::{Actor, CinemaHall, Entity, EntityId, Genre, GenreDraft, Movie, MovieDraft};

/// Rows of one entity kind plus its identifier sequence.
#[derive(Debug)]
pub struct Table<E> {
    rows: BTreeMap<EntityId, E>,
    last_id: i64,
}

impl<E> Default for Table<E> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<E> Table<E> {
    fn next_id(&mut self) -> EntityId {
        self.last_id += 1;
        EntityId::new(self.last_id)
    }

    fn contains(&self, id: EntityId) -> bool {
        self.rows.contains_key(&id)
    }
}

/// Every table of the catalogue.
#[derive(Debug, Default)]
pub struct Tables {
    genres: Table<Genre>,
    actors: Table<Actor>,
    cinema_halls: Table<CinemaHall>,
    movies: Table<Movie>,
}

/// Binds an entity kind to its table and the integrity rules around it.
pub trait StoredEntity: Entity {
    /// Shared view of the kind's table.
    fn table(tables: &Tables) -> &Table<Self>;

    /// Exclusive view of the kind's table.
    fn table_mut(tables: &mut Tables) -> &mut Table<Self>;

    /// Reject `draft` if writing it under `own_id` would break a constraint.
    fn check(
        _tables: &Tables,
        _own_id: Option<EntityId>,
        _draft: &Self::Draft,
    ) -> Result<(), RepositoryError> {
        Ok(())
    }

    /// Remove rows of other kinds that reference `id`.
    fn cascade(_tables: &mut Tables, _id: EntityId) {}
}

impl StoredEntity for Genre {
    fn table(tables: &Tables) -> &Table<Self> {
        &tables.genres
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.genres
    }

    fn check(
        tables: &Tables,
        own_id: Option<EntityId>,
        draft: &GenreDraft,
    ) -> Result<(), RepositoryError> {
        let taken = tables
            .genres
            .rows
            .values()
            .any(|genre| Some(genre.id()) != own_id && genre.name() == draft.name);
        if taken {
            return Err(RepositoryError::duplicate("name"));
        }
        Ok(())
    }

    fn cascade(tables: &mut Tables, id: EntityId) {
        detach_from_movies(tables, Relation::Genres, id);
    }
}

impl StoredEntity for Actor {
    fn table(tables: &Tables) -> &Table<Self> {
        &tables.actors
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.actors
    }

    fn cascade(tables: &mut Tables, id: EntityId) {
        detach_from_movies(tables, Relation::Actors, id);
    }
}

impl StoredEntity for CinemaHall {
    fn table(tables: &Tables) -> &Table<Self> {
        &tables.cinema_halls
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.cinema_halls
    }
}

impl StoredEntity for Movie {
    fn table(tables: &Tables) -> &Table<Self> {
        &tables.movies
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.movies
    }

    fn check(
        tables: &Tables,
        _own_id: Option<EntityId>,
        draft: &MovieDraft,
    ) -> Result<(), RepositoryError> {
        if let Some(id) = draft.genres.iter().find(|id| !tables.genres.contains(**id)) {
            return Err(RepositoryError::missing_reference("genres", id.get()));
        }
        if let Some(id) = draft.actors.iter().find(|id| !tables.actors.contains(**id)) {
            return Err(RepositoryError::missing_reference("actors", id.get()));
        }
        Ok(())
    }
}

#[derive(Clone, Copy)]
enum Relation {
    Genres,
    Actors,
}

fn detach_from_movies(tables: &mut Tables, relation: Relation, id: EntityId) {
    for movie in tables.movies.rows.values_mut() {
        let mut draft = movie.draft();
        let references = match relation {
            Relation::Genres => &mut draft.genres,
            Relation::Actors => &mut draft.actors,
        };
        if references.contains(&id) {
            references.retain(|candidate| *candidate != id);
            *movie = Movie::from_draft(movie.id(), draft);
        }
    }
}

/// Catalogue held entirely in process memory.
///
/// Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogue {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryCatalogue {
    /// Create an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl<E: StoredEntity> EntityRepository<E> for InMemoryCatalogue {
    async fn list(&self) -> Result<Vec<E>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(E::table(&tables).rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<E>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(E::table(&tables).rows.get(&id).cloned())
    }

    async fn insert(&self, draft: &E::Draft) -> Result<E, RepositoryError> {
        let mut tables = self.tables.write().await;
        E::check(&tables, None, draft)?;
        let table = E::table_mut(&mut tables);
        let entity = E::from_draft(table.next_id(), draft.clone());
        table.rows.insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn update(&self, id: EntityId, draft: &E::Draft) -> Result<Option<E>, RepositoryError> {
        let mut tables = self.tables.write().await;
        if !E::table(&tables).contains(id) {
            return Ok(None);
        }
        E::check(&tables, Some(id), draft)?;
        let entity = E::from_draft(id, draft.clone());
        E::table_mut(&mut tables).rows.insert(id, entity.clone());
        Ok(Some(entity))
    }

    async fn delete(&self, id: EntityId) -> Result<bool, RepositoryError> {
        let mut tables = self.tables.write().await;
        if E::table_mut(&mut tables).rows.remove(&id).is_none() {
            return Ok(false);
        }
        E::cascade(&mut tables, id);
        Ok(true)
    }

    async fn existing_ids(&self, ids: Vec<EntityId>) -> Result<Vec<EntityId>, RepositoryError> {
        let tables = self.tables.read().await;
        let table = E::table(&tables);
        let mut found: Vec<EntityId> = ids.into_iter().filter(|id| table.contains(*id)).collect();
        found.sort_unstable();
        found.dedup();
        Ok(found)
    }
}

#[cfg(test)]
mod tests;
