//! Internal Diesel row structs for the catalogue tables.
//!
//! These types never leave the persistence layer; conversions into domain
//! entities live next to each row type.

use diesel::prelude::*;

use crate::domain::{
    Actor, ActorDraft, CinemaHall, CinemaHallDraft, Entity, EntityId, Genre, GenreDraft,
    MovieDraft,
};

use super::schema::{actors, cinema_halls, genres, movies, movies_actors, movies_genres};

// ---------------------------------------------------------------------------
// Genres
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = genres)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct GenreRow {
    pub id: i64,
    pub name: String,
}

/// Column values written on insert and update.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = genres)]
pub(crate) struct GenreValues<'a> {
    pub name: &'a str,
}

impl From<GenreRow> for Genre {
    fn from(row: GenreRow) -> Self {
        Self::from_draft(EntityId::new(row.id), GenreDraft { name: row.name })
    }
}

impl<'a> From<&'a GenreDraft> for GenreValues<'a> {
    fn from(draft: &'a GenreDraft) -> Self {
        Self {
            name: draft.name.as_str(),
        }
    }
}

// ---------------------------------------------------------------------------
// Actors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = actors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ActorRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = actors)]
pub(crate) struct ActorValues<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
}

impl From<ActorRow> for Actor {
    fn from(row: ActorRow) -> Self {
        Self::from_draft(
            EntityId::new(row.id),
            ActorDraft {
                first_name: row.first_name,
                last_name: row.last_name,
            },
        )
    }
}

impl<'a> From<&'a ActorDraft> for ActorValues<'a> {
    fn from(draft: &'a ActorDraft) -> Self {
        Self {
            first_name: draft.first_name.as_str(),
            last_name: draft.last_name.as_str(),
        }
    }
}

// ---------------------------------------------------------------------------
// Cinema halls
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = cinema_halls)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CinemaHallRow {
    pub id: i64,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = cinema_halls)]
pub(crate) struct CinemaHallValues<'a> {
    pub name: &'a str,
    pub rows: i32,
    pub seats_in_row: i32,
}

impl From<CinemaHallRow> for CinemaHall {
    fn from(row: CinemaHallRow) -> Self {
        Self::from_draft(
            EntityId::new(row.id),
            CinemaHallDraft {
                name: row.name,
                rows: row.rows,
                seats_in_row: row.seats_in_row,
            },
        )
    }
}

impl<'a> From<&'a CinemaHallDraft> for CinemaHallValues<'a> {
    fn from(draft: &'a CinemaHallDraft) -> Self {
        Self {
            name: draft.name.as_str(),
            rows: draft.rows,
            seats_in_row: draft.seats_in_row,
        }
    }
}

// ---------------------------------------------------------------------------
// Movies and their link tables
// ---------------------------------------------------------------------------

/// Movie columns; relations are loaded from the link tables separately.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = movies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MovieRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub duration: i32,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = movies)]
pub(crate) struct MovieValues<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub duration: i32,
}

impl<'a> From<&'a MovieDraft> for MovieValues<'a> {
    fn from(draft: &'a MovieDraft) -> Self {
        Self {
            title: draft.title.as_str(),
            description: draft.description.as_str(),
            duration: draft.duration,
        }
    }
}

#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = movies_genres)]
pub(crate) struct MovieGenreLink {
    pub movie_id: i64,
    pub genre_id: i64,
}

#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = movies_actors)]
pub(crate) struct MovieActorLink {
    pub movie_id: i64,
    pub actor_id: i64,
}
