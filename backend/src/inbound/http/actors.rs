//! Actor collection handlers.
//!
//! Actors support full replacement only; `PATCH /actors/{id}` answers 405.

use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::Value;

use crate::domain::serializers::WriteMode;
use crate::inbound::http::ApiResult;
use crate::inbound::http::resources;
use crate::inbound::http::schemas::{ActorInputSchema, ActorSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// List every actor in ascending id order.
#[utoipa::path(
    get,
    path = "/actors",
    responses(
        (status = 200, description = "Actors", body = [ActorSchema]),
        (status = 503, description = "Entity store unavailable", body = ErrorSchema)
    ),
    tags = ["actors"],
    operation_id = "listActors"
)]
pub async fn list_actors(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    resources::list(state.actors.as_ref()).await
}

/// Create an actor.
#[utoipa::path(
    post,
    path = "/actors",
    request_body = ActorInputSchema,
    responses(
        (status = 201, description = "Created", body = ActorSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 503, description = "Entity store unavailable", body = ErrorSchema)
    ),
    tags = ["actors"],
    operation_id = "createActor"
)]
pub async fn create_actor(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    resources::create(state.actors.as_ref(), payload.into_inner()).await
}

/// Fetch one actor.
#[utoipa::path(
    get,
    path = "/actors/{id}",
    params(("id" = i64, Path, description = "Actor identifier")),
    responses(
        (status = 200, description = "Actor", body = ActorSchema),
        (status = 404, description = "No such actor")
    ),
    tags = ["actors"],
    operation_id = "getActor"
)]
pub async fn get_actor(state: web::Data<HttpState>, id: web::Path<i64>) -> ApiResult<HttpResponse> {
    resources::retrieve(state.actors.as_ref(), id.into_inner()).await
}

/// Replace an actor.
#[utoipa::path(
    put,
    path = "/actors/{id}",
    params(("id" = i64, Path, description = "Actor identifier")),
    request_body = ActorInputSchema,
    responses(
        (status = 200, description = "Updated", body = ActorSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 404, description = "No such actor")
    ),
    tags = ["actors"],
    operation_id = "replaceActor"
)]
pub async fn replace_actor(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    resources::update(
        state.actors.as_ref(),
        id.into_inner(),
        &req,
        &body,
        WriteMode::Full,
    )
    .await
}

/// Delete an actor and detach it from movies.
#[utoipa::path(
    delete,
    path = "/actors/{id}",
    params(("id" = i64, Path, description = "Actor identifier")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such actor")
    ),
    tags = ["actors"],
    operation_id = "deleteActor"
)]
pub async fn delete_actor(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    resources::delete(state.actors.as_ref(), id.into_inner()).await
}
