//! PostgreSQL-backed `EntityRepository` implementations for every catalogue
//! kind.
//!
//! Genres, actors and cinema halls live in one table each. Movies span the
//! `movies` table plus the `movies_genres`/`movies_actors` link tables; every
//! movie write runs in one transaction so a reader never observes a movie
//! with half of its links.

use std::collections::BTreeMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection as _, AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{EntityRepository, RepositoryError};
use crate::domain::{
    Actor, ActorDraft, CinemaHall, CinemaHallDraft, Entity, EntityId, Genre, GenreDraft, Movie,
    MovieDraft,
};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::flat_repository_macros::impl_flat_entity_repository;
use super::models::{
    ActorRow, ActorValues, CinemaHallRow, CinemaHallValues, GenreRow, GenreValues,
    MovieActorLink, MovieGenreLink, MovieRow, MovieValues,
};
use super::pool::DbPool;
use super::schema::{actors, cinema_halls, genres, movies, movies_actors, movies_genres};

/// Diesel-backed catalogue store.
#[derive(Clone)]
pub struct DieselCatalogue {
    pool: DbPool,
}

impl DieselCatalogue {
    /// Create a store over the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl_flat_entity_repository!(Genre, GenreDraft, genres, GenreRow, GenreValues);
impl_flat_entity_repository!(Actor, ActorDraft, actors, ActorRow, ActorValues);
impl_flat_entity_repository!(
    CinemaHall,
    CinemaHallDraft,
    cinema_halls,
    CinemaHallRow,
    CinemaHallValues
);

type Links = BTreeMap<i64, Vec<EntityId>>;

fn group_links(pairs: Vec<(i64, i64)>) -> Links {
    let mut links = Links::new();
    for (movie_id, target_id) in pairs {
        links
            .entry(movie_id)
            .or_default()
            .push(EntityId::new(target_id));
    }
    links
}

fn assemble(row: MovieRow, genres: &mut Links, actors: &mut Links) -> Movie {
    let MovieRow {
        id,
        title,
        description,
        duration,
    } = row;
    Movie::from_draft(
        EntityId::new(id),
        MovieDraft {
            title,
            description,
            duration,
            genres: genres.remove(&id).unwrap_or_default(),
            actors: actors.remove(&id).unwrap_or_default(),
        },
    )
}

/// Load the link rows for `movie_ids`, grouped by movie.
async fn load_links(
    conn: &mut AsyncPgConnection,
    movie_ids: &[i64],
) -> Result<(Links, Links), diesel::result::Error> {
    let genre_pairs: Vec<(i64, i64)> = movies_genres::table
        .filter(movies_genres::movie_id.eq_any(movie_ids))
        .order_by((movies_genres::movie_id, movies_genres::genre_id))
        .select((movies_genres::movie_id, movies_genres::genre_id))
        .load(conn)
        .await?;
    let actor_pairs: Vec<(i64, i64)> = movies_actors::table
        .filter(movies_actors::movie_id.eq_any(movie_ids))
        .order_by((movies_actors::movie_id, movies_actors::actor_id))
        .select((movies_actors::movie_id, movies_actors::actor_id))
        .load(conn)
        .await?;
    Ok((group_links(genre_pairs), group_links(actor_pairs)))
}

/// Write the link rows of `movie_id` from the draft's reference sets.
async fn insert_links(
    conn: &mut AsyncPgConnection,
    movie_id: i64,
    draft: &MovieDraft,
) -> Result<(), diesel::result::Error> {
    let genre_links: Vec<MovieGenreLink> = draft
        .genres
        .iter()
        .map(|genre| MovieGenreLink {
            movie_id,
            genre_id: genre.get(),
        })
        .collect();
    let actor_links: Vec<MovieActorLink> = draft
        .actors
        .iter()
        .map(|actor| MovieActorLink {
            movie_id,
            actor_id: actor.get(),
        })
        .collect();

    if !genre_links.is_empty() {
        diesel::insert_into(movies_genres::table)
            .values(&genre_links)
            .on_conflict_do_nothing()
            .execute(conn)
            .await?;
    }
    if !actor_links.is_empty() {
        diesel::insert_into(movies_actors::table)
            .values(&actor_links)
            .on_conflict_do_nothing()
            .execute(conn)
            .await?;
    }
    Ok(())
}

#[async_trait]
impl EntityRepository<Movie> for DieselCatalogue {
    async fn list(&self) -> Result<Vec<Movie>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // One snapshot for the movie rows and their links.
        let (rows, mut genre_links, mut actor_links) = conn
            .transaction(|tx| {
                async move {
                    let rows: Vec<MovieRow> = movies::table
                        .order_by(movies::id)
                        .select(MovieRow::as_select())
                        .load(tx)
                        .await?;
                    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
                    let (genre_links, actor_links) = load_links(tx, &ids).await?;
                    Ok((rows, genre_links, actor_links))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|row| assemble(row, &mut genre_links, &mut actor_links))
            .collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Movie>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let loaded = conn
            .transaction(|tx| {
                async move {
                    let found: Option<MovieRow> = movies::table
                        .find(id.get())
                        .select(MovieRow::as_select())
                        .first(tx)
                        .await
                        .optional()?;
                    let Some(row) = found else {
                        return Ok(None);
                    };
                    let links = load_links(tx, &[row.id]).await?;
                    Ok(Some((row, links)))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(loaded.map(|(row, (mut genre_links, mut actor_links))| {
            assemble(row, &mut genre_links, &mut actor_links)
        }))
    }

    async fn insert(&self, draft: &MovieDraft) -> Result<Movie, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let inserted = conn
            .transaction(|tx| {
                async move {
                    let row: MovieRow = diesel::insert_into(movies::table)
                        .values(MovieValues::from(draft))
                        .returning(MovieRow::as_returning())
                        .get_result(tx)
                        .await?;
                    insert_links(tx, row.id, draft).await?;
                    Ok(row)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(Movie::from_draft(EntityId::new(inserted.id), draft.clone()))
    }

    async fn update(
        &self,
        id: EntityId,
        draft: &MovieDraft,
    ) -> Result<Option<Movie>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = conn
            .transaction(|tx| {
                async move {
                    let changed: Option<MovieRow> = diesel::update(movies::table.find(id.get()))
                        .set(MovieValues::from(draft))
                        .returning(MovieRow::as_returning())
                        .get_result(tx)
                        .await
                        .optional()?;
                    let Some(row) = changed else {
                        return Ok(false);
                    };
                    diesel::delete(movies_genres::table.filter(movies_genres::movie_id.eq(row.id)))
                        .execute(tx)
                        .await?;
                    diesel::delete(movies_actors::table.filter(movies_actors::movie_id.eq(row.id)))
                        .execute(tx)
                        .await?;
                    insert_links(tx, row.id, draft).await?;
                    Ok(true)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(updated.then(|| Movie::from_draft(id, draft.clone())))
    }

    async fn delete(&self, id: EntityId) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(movies::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }

    async fn existing_ids(&self, ids: Vec<EntityId>) -> Result<Vec<EntityId>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw: Vec<i64> = ids.into_iter().map(EntityId::get).collect();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let found: Vec<i64> = movies::table
            .filter(movies::id.eq_any(raw))
            .order_by(movies::id)
            .select(movies::id)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(found.into_iter().map(EntityId::new).collect())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for link grouping and row assembly.
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn group_links_collects_targets_per_movie() {
        let links = group_links(vec![(1, 4), (1, 2), (3, 7)]);

        assert_eq!(
            links.get(&1),
            Some(&vec![EntityId::new(4), EntityId::new(2)])
        );
        assert_eq!(links.get(&3), Some(&vec![EntityId::new(7)]));
    }

    #[rstest]
    fn assemble_normalises_and_defaults_missing_links() {
        let mut genres = group_links(vec![(5, 3), (5, 1)]);
        let mut actors = Links::new();

        let movie = assemble(
            MovieRow {
                id: 5,
                title: "Ran".to_owned(),
                description: "King Lear, reimagined".to_owned(),
                duration: 162,
            },
            &mut genres,
            &mut actors,
        );

        assert_eq!(movie.genres(), &[EntityId::new(1), EntityId::new(3)]);
        assert!(movie.actors().is_empty());
        assert!(genres.is_empty());
    }
}
