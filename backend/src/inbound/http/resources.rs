//! Shared handler bodies for the catalogue collections.
//!
//! Every collection exposes the same list/retrieve/create/update/delete
//! behaviour; the per-kind modules only document the endpoints and pick the
//! port from [`HttpState`](super::state::HttpState).
//!
//! Update bodies arrive as raw bytes and are decoded here rather than by the
//! `Json` extractor, so an unknown id answers `404` even when the body is
//! missing or malformed.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, mime};
use serde_json::Value;

use crate::domain::ports::{ResourcePort, WriteBody};
use crate::domain::serializers::{WriteMode, into_record};
use crate::domain::{EntityId, Error};
use crate::inbound::http::ApiResult;

/// Envelope for a body the JSON decoder rejected.
pub(crate) fn json_error(err: &JsonPayloadError) -> Error {
    Error::invalid_request(format!("JSON parse error - {err}"))
}

/// Decode a write body, requiring a JSON content type like `web::Json`.
///
/// # Examples
/// ```
/// use actix_web::test::TestRequest;
/// use backend::inbound::http::resources::decode_body;
///
/// let req = TestRequest::default()
///     .insert_header(("content-type", "application/json"))
///     .to_http_request();
/// assert!(decode_body(&req, br#"{"name":"Drama"}"#).is_ok());
/// assert!(decode_body(&req, b"{").is_err());
/// ```
pub fn decode_body(req: &HttpRequest, body: &[u8]) -> WriteBody {
    let is_json = matches!(
        req.mime_type(),
        Ok(Some(content_type))
            if content_type.subtype() == mime::JSON || content_type.suffix() == Some(mime::JSON)
    );
    if !is_json {
        return Err(json_error(&JsonPayloadError::ContentType));
    }
    serde_json::from_slice(body).map_err(|err| json_error(&JsonPayloadError::Deserialize(err)))
}

pub(crate) async fn list(port: &dyn ResourcePort) -> ApiResult<HttpResponse> {
    let records = port.list().await?;
    Ok(HttpResponse::Ok().json(records))
}

pub(crate) async fn retrieve(port: &dyn ResourcePort, id: i64) -> ApiResult<HttpResponse> {
    let record = port.retrieve(EntityId::new(id)).await?;
    Ok(HttpResponse::Ok().json(record))
}

pub(crate) async fn create(port: &dyn ResourcePort, body: Value) -> ApiResult<HttpResponse> {
    let record = into_record(body).map_err(Error::validation)?;
    let created = port.create(record).await?;
    Ok(HttpResponse::Created().json(created))
}

pub(crate) async fn update(
    port: &dyn ResourcePort,
    id: i64,
    req: &HttpRequest,
    body: &[u8],
    mode: WriteMode,
) -> ApiResult<HttpResponse> {
    let updated = port
        .update(EntityId::new(id), decode_body(req, body), mode)
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub(crate) async fn delete(port: &dyn ResourcePort, id: i64) -> ApiResult<HttpResponse> {
    port.delete(EntityId::new(id)).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockResourcePort;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::json;

    fn json_request() -> HttpRequest {
        TestRequest::default()
            .insert_header(("content-type", "application/json"))
            .to_http_request()
    }

    #[rstest]
    #[case("application/json")]
    #[case("application/merge-patch+json")]
    fn json_content_types_decode(#[case] content_type: &str) {
        let req = TestRequest::default()
            .insert_header(("content-type", content_type))
            .to_http_request();

        let body = decode_body(&req, br#"{"rows": 12}"#).expect("decodes");

        assert_eq!(body, json!({ "rows": 12 }));
    }

    #[rstest]
    #[case(TestRequest::default().to_http_request(), br#"{"rows": 12}"#.as_slice())]
    #[case(
        TestRequest::default().insert_header(("content-type", "text/plain")).to_http_request(),
        br#"{"rows": 12}"#.as_slice()
    )]
    #[case(json_request(), b"".as_slice())]
    #[case(json_request(), b"{\"rows\":".as_slice())]
    fn undecodable_bodies_are_invalid_requests(#[case] req: HttpRequest, #[case] body: &[u8]) {
        let err = decode_body(&req, body).expect_err("undecodable");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert!(err.message().starts_with("JSON parse error - "));
    }

    #[actix_web::test]
    async fn create_answers_201() {
        let mut port = MockResourcePort::new();
        port.expect_create().times(1).return_once(Ok);

        let response = create(&port, json!({ "name": "Drama" }))
            .await
            .expect("create succeeds");

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn create_rejects_non_objects_before_reaching_the_port() {
        let port = MockResourcePort::new();

        let err = create(&port, json!(5)).await.expect_err("not an object");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[actix_web::test]
    async fn update_hands_undecodable_bodies_to_the_port() {
        let mut port = MockResourcePort::new();
        port.expect_update()
            .withf(|id, body, mode| {
                *id == EntityId::new(9) && body.is_err() && *mode == WriteMode::Full
            })
            .return_once(|id, _, _| Err(Error::not_found(format!("genre {id} not found"))));

        let err = update(&port, 9, &json_request(), b"[", WriteMode::Full)
            .await
            .expect_err("absent row");

        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[actix_web::test]
    async fn delete_answers_204() {
        let mut port = MockResourcePort::new();
        port.expect_delete()
            .with(eq(EntityId::new(8)))
            .return_once(|_| Ok(()));

        let response = delete(&port, 8).await.expect("delete succeeds");

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
