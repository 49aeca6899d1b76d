//! Diesel table definitions for the catalogue schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate
//! with `diesel print-schema` after changing a migration.

diesel::table! {
    /// Film genres; `name` is unique.
    genres (id) {
        /// Identity primary key.
        id -> Int8,
        /// Display name (max 255 characters).
        name -> Varchar,
    }
}

diesel::table! {
    /// Performers.
    actors (id) {
        /// Identity primary key.
        id -> Int8,
        /// Given name (max 255 characters).
        first_name -> Varchar,
        /// Family name (max 255 characters).
        last_name -> Varchar,
    }
}

diesel::table! {
    /// Screening rooms. Capacity is derived and not stored.
    cinema_halls (id) {
        /// Identity primary key.
        id -> Int8,
        /// Display name (max 255 characters).
        name -> Varchar,
        /// Number of seat rows.
        rows -> Int4,
        /// Seats per row.
        seats_in_row -> Int4,
    }
}

diesel::table! {
    /// Films.
    movies (id) {
        /// Identity primary key.
        id -> Int8,
        /// Title (max 255 characters).
        title -> Varchar,
        /// Unbounded synopsis.
        description -> Text,
        /// Running time in minutes.
        duration -> Int4,
    }
}

diesel::table! {
    /// Movie to genre links; rows vanish with either side.
    movies_genres (movie_id, genre_id) {
        /// Linked movie.
        movie_id -> Int8,
        /// Linked genre.
        genre_id -> Int8,
    }
}

diesel::table! {
    /// Movie to actor links; rows vanish with either side.
    movies_actors (movie_id, actor_id) {
        /// Linked movie.
        movie_id -> Int8,
        /// Linked actor.
        actor_id -> Int8,
    }
}

diesel::joinable!(movies_genres -> movies (movie_id));
diesel::joinable!(movies_genres -> genres (genre_id));
diesel::joinable!(movies_actors -> movies (movie_id));
diesel::joinable!(movies_actors -> actors (actor_id));

diesel::allow_tables_to_appear_in_same_query!(
    genres,
    actors,
    cinema_halls,
    movies,
    movies_genres,
    movies_actors,
);
