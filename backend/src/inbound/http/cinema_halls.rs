//! Cinema hall collection handlers.
//!
//! Responses carry a derived `capacity`; writes ignore it.

use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::Value;

use crate::domain::serializers::WriteMode;
use crate::inbound::http::ApiResult;
use crate::inbound::http::resources;
use crate::inbound::http::schemas::{CinemaHallInputSchema, CinemaHallSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// List every cinema hall in ascending id order.
#[utoipa::path(
    get,
    path = "/cinema-halls",
    responses(
        (status = 200, description = "Cinema halls", body = [CinemaHallSchema]),
        (status = 503, description = "Entity store unavailable", body = ErrorSchema)
    ),
    tags = ["cinema-halls"],
    operation_id = "listCinemaHalls"
)]
pub async fn list_cinema_halls(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    resources::list(state.cinema_halls.as_ref()).await
}

/// Create a cinema hall.
#[utoipa::path(
    post,
    path = "/cinema-halls",
    request_body = CinemaHallInputSchema,
    responses(
        (status = 201, description = "Created", body = CinemaHallSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 503, description = "Entity store unavailable", body = ErrorSchema)
    ),
    tags = ["cinema-halls"],
    operation_id = "createCinemaHall"
)]
pub async fn create_cinema_hall(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    resources::create(state.cinema_halls.as_ref(), payload.into_inner()).await
}

/// Fetch one cinema hall.
#[utoipa::path(
    get,
    path = "/cinema-halls/{id}",
    params(("id" = i64, Path, description = "Cinema hall identifier")),
    responses(
        (status = 200, description = "Cinema hall", body = CinemaHallSchema),
        (status = 404, description = "No such cinema hall")
    ),
    tags = ["cinema-halls"],
    operation_id = "getCinemaHall"
)]
pub async fn get_cinema_hall(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    resources::retrieve(state.cinema_halls.as_ref(), id.into_inner()).await
}

/// Replace a cinema hall.
#[utoipa::path(
    put,
    path = "/cinema-halls/{id}",
    params(("id" = i64, Path, description = "Cinema hall identifier")),
    request_body = CinemaHallInputSchema,
    responses(
        (status = 200, description = "Updated", body = CinemaHallSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 404, description = "No such cinema hall")
    ),
    tags = ["cinema-halls"],
    operation_id = "replaceCinemaHall"
)]
pub async fn replace_cinema_hall(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    resources::update(
        state.cinema_halls.as_ref(),
        id.into_inner(),
        &req,
        &body,
        WriteMode::Full,
    )
    .await
}

/// Fields left out of the body keep their stored values.
#[utoipa::path(
    patch,
    path = "/cinema-halls/{id}",
    params(("id" = i64, Path, description = "Cinema hall identifier")),
    request_body = CinemaHallInputSchema,
    responses(
        (status = 200, description = "Updated", body = CinemaHallSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 404, description = "No such cinema hall")
    ),
    tags = ["cinema-halls"],
    operation_id = "patchCinemaHall"
)]
pub async fn patch_cinema_hall(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    resources::update(
        state.cinema_halls.as_ref(),
        id.into_inner(),
        &req,
        &body,
        WriteMode::Partial,
    )
    .await
}

/// Delete a cinema hall.
#[utoipa::path(
    delete,
    path = "/cinema-halls/{id}",
    params(("id" = i64, Path, description = "Cinema hall identifier")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such cinema hall")
    ),
    tags = ["cinema-halls"],
    operation_id = "deleteCinemaHall"
)]
pub async fn delete_cinema_hall(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    resources::delete(state.cinema_halls.as_ref(), id.into_inner()).await
}
