//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the resource driving port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{EntityRepository, ResourcePort};
use crate::domain::serializers::{
    ActorSerializer, CinemaHallSerializer, GenreSerializer, MovieSerializer,
};
use crate::domain::{Actor, CinemaHall, Genre, Movie, ResourceService};

/// One resource port per catalogue collection.
#[derive(Clone)]
pub struct HttpState {
    /// `/movies`
    pub movies: Arc<dyn ResourcePort>,
    /// `/genres`
    pub genres: Arc<dyn ResourcePort>,
    /// `/actors`
    pub actors: Arc<dyn ResourcePort>,
    /// `/cinema-halls`
    pub cinema_halls: Arc<dyn ResourcePort>,
}

impl HttpState {
    /// Bundle already-built ports.
    #[must_use]
    pub const fn new(
        movies: Arc<dyn ResourcePort>,
        genres: Arc<dyn ResourcePort>,
        actors: Arc<dyn ResourcePort>,
        cinema_halls: Arc<dyn ResourcePort>,
    ) -> Self {
        Self {
            movies,
            genres,
            actors,
            cinema_halls,
        }
    }

    /// Wire a [`ResourceService`] for every kind on top of one entity store.
    ///
    /// # Examples
    /// ```
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::memory::InMemoryCatalogue;
    ///
    /// let state = HttpState::from_store(InMemoryCatalogue::new());
    /// # let _ = state;
    /// ```
    #[must_use]
    pub fn from_store<S>(store: S) -> Self
    where
        S: EntityRepository<Genre>
            + EntityRepository<Actor>
            + EntityRepository<CinemaHall>
            + EntityRepository<Movie>
            + Clone
            + 'static,
    {
        let genre_store: Arc<dyn EntityRepository<Genre>> = Arc::new(store.clone());
        let actor_store: Arc<dyn EntityRepository<Actor>> = Arc::new(store.clone());
        let hall_store: Arc<dyn EntityRepository<CinemaHall>> = Arc::new(store.clone());
        let movie_store: Arc<dyn EntityRepository<Movie>> = Arc::new(store);

        let movie_serializer =
            MovieSerializer::new(Arc::clone(&genre_store), Arc::clone(&actor_store));

        Self::new(
            Arc::new(ResourceService::new(movie_store, Arc::new(movie_serializer))),
            Arc::new(ResourceService::new(genre_store, Arc::new(GenreSerializer))),
            Arc::new(ResourceService::new(actor_store, Arc::new(ActorSerializer))),
            Arc::new(ResourceService::new(hall_store, Arc::new(CinemaHallSerializer))),
        )
    }
}
