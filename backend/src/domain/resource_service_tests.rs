//! Tests for the generic resource service.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockEntityRepository, WriteBody};
use crate::domain::serializers::{CinemaHallSerializer, GenreSerializer};
use crate::domain::{CinemaHall, CinemaHallDraft, ErrorCode, Genre, GenreDraft};

fn wire(value: Value) -> WireRecord {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn genre(id: i64, name: &str) -> Genre {
    Genre::from_draft(
        EntityId::new(id),
        GenreDraft {
            name: name.to_owned(),
        },
    )
}

fn genre_service(repo: MockEntityRepository<Genre>) -> ResourceService<Genre> {
    ResourceService::new(Arc::new(repo), Arc::new(GenreSerializer))
}

#[tokio::test]
async fn create_inserts_validated_draft() {
    let mut repo = MockEntityRepository::<Genre>::new();
    repo.expect_insert()
        .with(eq(GenreDraft {
            name: "Horror".to_owned(),
        }))
        .times(1)
        .return_once(|draft| Ok(genre(1, &draft.name)));

    let created = genre_service(repo)
        .create(wire(json!({ "name": "Horror" })))
        .await
        .expect("create succeeds");

    assert_eq!(Value::Object(created), json!({ "id": 1, "name": "Horror" }));
}

#[tokio::test]
async fn create_rejects_invalid_payload_without_touching_store() {
    let mut repo = MockEntityRepository::<Genre>::new();
    repo.expect_insert().times(0);

    let error = genre_service(repo)
        .create(wire(json!({ "name": "" })))
        .await
        .expect_err("blank name");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        error.details(),
        Some(&json!({ "name": ["This field may not be blank."] }))
    );
}

#[tokio::test]
async fn create_maps_duplicate_to_field_error() {
    let mut repo = MockEntityRepository::<Genre>::new();
    repo.expect_insert()
        .return_once(|_| Err(RepositoryError::duplicate("name")));

    let error = genre_service(repo)
        .create(wire(json!({ "name": "Drama" })))
        .await
        .expect_err("duplicate");

    assert_eq!(
        error.details(),
        Some(&json!({ "name": ["genre with this name already exists."] }))
    );
}

#[rstest]
#[case(RepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(RepositoryError::query("syntax"), ErrorCode::InternalError)]
#[tokio::test]
async fn list_maps_store_failures(#[case] failure: RepositoryError, #[case] expected: ErrorCode) {
    let mut repo = MockEntityRepository::<Genre>::new();
    repo.expect_list().return_once(move || Err(failure));

    let error = genre_service(repo).list().await.expect_err("store failure");

    assert_eq!(error.code(), expected);
}

#[tokio::test]
async fn retrieve_missing_row_is_not_found() {
    let mut repo = MockEntityRepository::<Genre>::new();
    repo.expect_find_by_id()
        .with(eq(EntityId::new(7)))
        .return_once(|_| Ok(None));

    let error = genre_service(repo)
        .retrieve(EntityId::new(7))
        .await
        .expect_err("missing");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn partial_update_merges_with_existing_row() {
    let hall = CinemaHall::from_draft(
        EntityId::new(4),
        CinemaHallDraft {
            name: "Red".to_owned(),
            rows: 8,
            seats_in_row: 10,
        },
    );
    let mut repo = MockEntityRepository::<CinemaHall>::new();
    repo.expect_find_by_id()
        .return_once(move |_| Ok(Some(hall)));
    repo.expect_update()
        .with(
            eq(EntityId::new(4)),
            eq(CinemaHallDraft {
                name: "Red".to_owned(),
                rows: 8,
                seats_in_row: 12,
            }),
        )
        .return_once(|id, draft| Ok(Some(CinemaHall::from_draft(id, draft.clone()))));

    let service = ResourceService::new(Arc::new(repo), Arc::new(CinemaHallSerializer));
    let updated = service
        .update(
            EntityId::new(4),
            Ok(json!({ "seats_in_row": 12 })),
            WriteMode::Partial,
        )
        .await
        .expect("patch succeeds");

    assert_eq!(updated.get("capacity"), Some(&json!(96)));
}

#[rstest]
#[case(Ok(json!({})))]
#[case(Ok(json!([1])))]
#[case(Err(Error::invalid_request("JSON parse error - EOF while parsing a value")))]
#[tokio::test]
async fn update_of_missing_row_is_not_found_whatever_the_body(#[case] body: WriteBody) {
    let mut repo = MockEntityRepository::<Genre>::new();
    repo.expect_find_by_id().return_once(|_| Ok(None));
    repo.expect_update().times(0);

    let error = genre_service(repo)
        .update(EntityId::new(3), body, WriteMode::Full)
        .await
        .expect_err("missing");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[case(
    Ok(json!([1])),
    Some(json!({ "non_field_errors": ["Invalid data. Expected a dictionary, but got array."] }))
)]
#[case(Err(Error::invalid_request("JSON parse error - EOF while parsing a value")), None)]
#[tokio::test]
async fn update_of_existing_row_reports_body_errors(
    #[case] body: WriteBody,
    #[case] details: Option<Value>,
) {
    let mut repo = MockEntityRepository::<Genre>::new();
    repo.expect_find_by_id()
        .return_once(|id| Ok(Some(genre(id.get(), "Drama"))));
    repo.expect_update().times(0);

    let error = genre_service(repo)
        .update(EntityId::new(3), body, WriteMode::Full)
        .await
        .expect_err("bad body");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.details(), details.as_ref());
}

#[rstest]
#[case(true, None)]
#[case(false, Some(ErrorCode::NotFound))]
#[tokio::test]
async fn delete_reports_absent_rows(#[case] existed: bool, #[case] expected: Option<ErrorCode>) {
    let mut repo = MockEntityRepository::<Genre>::new();
    repo.expect_delete().return_once(move |_| Ok(existed));

    let outcome = genre_service(repo).delete(EntityId::new(2)).await;

    assert_eq!(outcome.err().map(|err| err.code()), expected);
}
