//! Movie collection handlers.
//!
//! Movies reference genres and actors by id. Every referenced id must exist
//! when the movie is written; responses render the references as id arrays.

use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::Value;

use crate::domain::serializers::WriteMode;
use crate::inbound::http::ApiResult;
use crate::inbound::http::resources;
use crate::inbound::http::schemas::{ErrorSchema, MovieInputSchema, MovieSchema};
use crate::inbound::http::state::HttpState;

/// List every movie in ascending id order.
#[utoipa::path(
    get,
    path = "/movies",
    responses(
        (status = 200, description = "Movies", body = [MovieSchema]),
        (status = 503, description = "Entity store unavailable", body = ErrorSchema)
    ),
    tags = ["movies"],
    operation_id = "listMovies"
)]
pub async fn list_movies(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    resources::list(state.movies.as_ref()).await
}

/// Create a movie.
///
/// `genres` and `actors` default to empty lists; duplicates collapse.
#[utoipa::path(
    post,
    path = "/movies",
    request_body = MovieInputSchema,
    responses(
        (status = 201, description = "Created", body = MovieSchema),
        (status = 400, description = "Validation failed or unknown reference", body = ErrorSchema),
        (status = 503, description = "Entity store unavailable", body = ErrorSchema)
    ),
    tags = ["movies"],
    operation_id = "createMovie"
)]
pub async fn create_movie(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    resources::create(state.movies.as_ref(), payload.into_inner()).await
}

/// Fetch one movie.
#[utoipa::path(
    get,
    path = "/movies/{id}",
    params(("id" = i64, Path, description = "Movie identifier")),
    responses(
        (status = 200, description = "Movie", body = MovieSchema),
        (status = 404, description = "No such movie")
    ),
    tags = ["movies"],
    operation_id = "getMovie"
)]
pub async fn get_movie(state: web::Data<HttpState>, id: web::Path<i64>) -> ApiResult<HttpResponse> {
    resources::retrieve(state.movies.as_ref(), id.into_inner()).await
}

/// Replace a movie, including its genre and actor sets.
#[utoipa::path(
    put,
    path = "/movies/{id}",
    params(("id" = i64, Path, description = "Movie identifier")),
    request_body = MovieInputSchema,
    responses(
        (status = 200, description = "Updated", body = MovieSchema),
        (status = 400, description = "Validation failed or unknown reference", body = ErrorSchema),
        (status = 404, description = "No such movie")
    ),
    tags = ["movies"],
    operation_id = "replaceMovie"
)]
pub async fn replace_movie(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    resources::update(
        state.movies.as_ref(),
        id.into_inner(),
        &req,
        &body,
        WriteMode::Full,
    )
    .await
}

/// Delete a movie.
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(("id" = i64, Path, description = "Movie identifier")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such movie")
    ),
    tags = ["movies"],
    operation_id = "deleteMovie"
)]
pub async fn delete_movie(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    resources::delete(state.movies.as_ref(), id.into_inner()).await
}
