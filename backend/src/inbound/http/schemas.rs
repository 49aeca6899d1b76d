//! OpenAPI schema definitions for the wire formats.
//!
//! Domain types and serializers stay framework-agnostic and never derive
//! `ToSchema`. The wrappers below mirror the JSON the serializers produce and
//! accept, and exist only for documentation.

#![expect(
    dead_code,
    reason = "Schema wrappers are only read by utoipa during OpenAPI generation"
)]

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The entity store cannot be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "validation failed")]
    message: String,
    /// Correlation identifier, mirrored in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// For validation failures, a map of field name to messages.
    #[schema(value_type = Option<Object>, example = json!({ "name": ["This field is required."] }))]
    details: Option<serde_json::Value>,
}

/// A film genre.
#[derive(ToSchema)]
#[schema(as = Genre)]
pub struct GenreSchema {
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "Drama", max_length = 255)]
    name: String,
}

/// Writable genre fields.
#[derive(ToSchema)]
#[schema(as = GenreInput)]
pub struct GenreInputSchema {
    #[schema(example = "Drama", max_length = 255)]
    name: String,
}

/// A performer.
#[derive(ToSchema)]
#[schema(as = Actor)]
pub struct ActorSchema {
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "Ingrid", max_length = 255)]
    first_name: String,
    #[schema(example = "Bergman", max_length = 255)]
    last_name: String,
}

/// Writable actor fields.
#[derive(ToSchema)]
#[schema(as = ActorInput)]
pub struct ActorInputSchema {
    #[schema(example = "Ingrid", max_length = 255)]
    first_name: String,
    #[schema(example = "Bergman", max_length = 255)]
    last_name: String,
}

/// A screening room; `capacity` is `rows * seats_in_row`.
#[derive(ToSchema)]
#[schema(as = CinemaHall)]
pub struct CinemaHallSchema {
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "Blue", max_length = 255)]
    name: String,
    #[schema(example = 10, minimum = 0)]
    rows: i32,
    #[schema(example = 12, minimum = 0)]
    seats_in_row: i32,
    #[schema(example = 120)]
    capacity: i64,
}

/// Writable cinema hall fields. PATCH accepts any subset.
#[derive(ToSchema)]
#[schema(as = CinemaHallInput)]
pub struct CinemaHallInputSchema {
    #[schema(example = "Blue", max_length = 255)]
    name: String,
    #[schema(example = 10, minimum = 0)]
    rows: i32,
    #[schema(example = 12, minimum = 0)]
    seats_in_row: i32,
}

/// A film with its genre and actor identifiers.
#[derive(ToSchema)]
#[schema(as = Movie)]
pub struct MovieSchema {
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "Vertigo", max_length = 255)]
    title: String,
    #[schema(example = "A retired detective is hired to follow a woman.")]
    description: String,
    #[schema(example = 128, minimum = 0)]
    duration: i32,
    #[schema(example = json!([1, 3]))]
    genres: Vec<i64>,
    #[schema(example = json!([2]))]
    actors: Vec<i64>,
}

/// Writable movie fields; `genres` and `actors` default to empty.
#[derive(ToSchema)]
#[schema(as = MovieInput)]
pub struct MovieInputSchema {
    #[schema(example = "Vertigo", max_length = 255)]
    title: String,
    #[schema(example = "A retired detective is hired to follow a woman.")]
    description: String,
    #[schema(example = 128, minimum = 0)]
    duration: i32,
    genres: Option<Vec<i64>>,
    actors: Option<Vec<i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn object_fields<T: PartialSchema>() -> Vec<String> {
        match T::schema() {
            RefOr::T(Schema::Object(object)) => object.properties.keys().cloned().collect(),
            _ => panic!("expected an object schema"),
        }
    }

    #[test]
    fn cinema_hall_schema_documents_capacity() {
        assert!(object_fields::<CinemaHallSchema>().contains(&"capacity".to_owned()));
        assert!(!object_fields::<CinemaHallInputSchema>().contains(&"capacity".to_owned()));
    }

    #[test]
    fn error_schema_uses_camel_case_trace_id() {
        assert!(object_fields::<ErrorSchema>().contains(&"traceId".to_owned()));
    }
}
