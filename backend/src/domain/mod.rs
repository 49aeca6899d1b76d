//! Domain primitives, ports and services for the cinema catalogue.
//!
//! Purpose: define the catalogue entities (genres, actors, cinema halls,
//! movies), the wire serializers that validate client payloads, and the
//! ports through which adapters drive and are driven by the domain. Nothing
//! here knows about HTTP or SQL.
//!
//! Public surface:
//! - `Error`/`ErrorCode`: transport-agnostic failure payload.
//! - `Entity`, `EntityId`, `EntityKind`: shared identity primitives.
//! - `Genre`, `Actor`, `CinemaHall`, `Movie` and their drafts.
//! - `ResourceService`: generic CRUD implementing `ports::ResourcePort`.

pub mod actor;
pub mod cinema_hall;
pub mod entity;
pub mod error;
pub mod genre;
pub mod movie;
pub mod ports;
pub mod resource_service;
pub mod serializers;
pub mod trace_id;

pub use self::actor::{Actor, ActorDraft};
pub use self::cinema_hall::{CinemaHall, CinemaHallDraft};
pub use self::entity::{Entity, EntityId, EntityKind};
pub use self::error::{DomainError, Error, ErrorCode, TRACE_ID_HEADER};
pub use self::genre::{Genre, GenreDraft};
pub use self::movie::{Movie, MovieDraft, normalise_references};
pub use self::resource_service::ResourceService;
pub use self::trace_id::TraceId;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use backend::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("genre 1 not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
