//! HTTP inbound adapter exposing the catalogue REST endpoints.

pub mod actors;
pub mod cinema_halls;
pub mod error;
pub mod genres;
pub mod health;
pub mod movies;
pub mod resources;
pub mod routes;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
