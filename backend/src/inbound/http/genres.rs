//! Genre collection handlers.
//!
//! ```text
//! GET    /genres
//! POST   /genres        {"name":"Drama"}
//! GET    /genres/{id}
//! PUT    /genres/{id}   {"name":"Drama"}
//! PATCH  /genres/{id}   {"name":"Drama"}
//! DELETE /genres/{id}
//! ```
//!
//! Deleting a genre detaches it from every movie that referenced it.

use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::Value;

use crate::domain::serializers::WriteMode;
use crate::inbound::http::ApiResult;
use crate::inbound::http::resources;
use crate::inbound::http::schemas::{ErrorSchema, GenreInputSchema, GenreSchema};
use crate::inbound::http::state::HttpState;

/// List every genre in ascending id order.
#[utoipa::path(
    get,
    path = "/genres",
    responses(
        (status = 200, description = "Genres", body = [GenreSchema]),
        (status = 503, description = "Entity store unavailable", body = ErrorSchema)
    ),
    tags = ["genres"],
    operation_id = "listGenres"
)]
pub async fn list_genres(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    resources::list(state.genres.as_ref()).await
}

/// Create a genre. Names are unique.
#[utoipa::path(
    post,
    path = "/genres",
    request_body = GenreInputSchema,
    responses(
        (status = 201, description = "Created", body = GenreSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 503, description = "Entity store unavailable", body = ErrorSchema)
    ),
    tags = ["genres"],
    operation_id = "createGenre"
)]
pub async fn create_genre(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    resources::create(state.genres.as_ref(), payload.into_inner()).await
}

/// Fetch one genre.
#[utoipa::path(
    get,
    path = "/genres/{id}",
    params(("id" = i64, Path, description = "Genre identifier")),
    responses(
        (status = 200, description = "Genre", body = GenreSchema),
        (status = 404, description = "No such genre")
    ),
    tags = ["genres"],
    operation_id = "getGenre"
)]
pub async fn get_genre(state: web::Data<HttpState>, id: web::Path<i64>) -> ApiResult<HttpResponse> {
    resources::retrieve(state.genres.as_ref(), id.into_inner()).await
}

/// Replace a genre.
#[utoipa::path(
    put,
    path = "/genres/{id}",
    params(("id" = i64, Path, description = "Genre identifier")),
    request_body = GenreInputSchema,
    responses(
        (status = 200, description = "Updated", body = GenreSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 404, description = "No such genre")
    ),
    tags = ["genres"],
    operation_id = "replaceGenre"
)]
pub async fn replace_genre(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    resources::update(
        state.genres.as_ref(),
        id.into_inner(),
        &req,
        &body,
        WriteMode::Full,
    )
    .await
}

/// Update the supplied genre fields only.
#[utoipa::path(
    patch,
    path = "/genres/{id}",
    params(("id" = i64, Path, description = "Genre identifier")),
    request_body = GenreInputSchema,
    responses(
        (status = 200, description = "Updated", body = GenreSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 404, description = "No such genre")
    ),
    tags = ["genres"],
    operation_id = "patchGenre"
)]
pub async fn patch_genre(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    resources::update(
        state.genres.as_ref(),
        id.into_inner(),
        &req,
        &body,
        WriteMode::Partial,
    )
    .await
}

/// Delete a genre and its movie associations.
#[utoipa::path(
    delete,
    path = "/genres/{id}",
    params(("id" = i64, Path, description = "Genre identifier")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such genre")
    ),
    tags = ["genres"],
    operation_id = "deleteGenre"
)]
pub async fn delete_genre(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    resources::delete(state.genres.as_ref(), id.into_inner()).await
}
