//! Genre wire format.

use async_trait::async_trait;
use serde_json::Value;

use super::fields::{MAX_CHAR_LENGTH, RecordReader};
use super::{Serializer, SerializerError, WireRecord, WriteMode, effective_mode};
use crate::domain::{Entity, Genre, GenreDraft};

/// Wire shape `{"id", "name"}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenreSerializer;

#[async_trait]
impl Serializer<Genre> for GenreSerializer {
    fn serialize(&self, genre: &Genre) -> WireRecord {
        let mut record = WireRecord::new();
        record.insert("id".to_owned(), Value::from(genre.id().get()));
        record.insert("name".to_owned(), Value::from(genre.name()));
        record
    }

    async fn deserialize(
        &self,
        record: &WireRecord,
        existing: Option<&Genre>,
        mode: WriteMode,
    ) -> Result<GenreDraft, SerializerError> {
        let current = existing.map(Entity::draft);
        let mut reader = RecordReader::new(record, effective_mode(existing, mode));
        let name = reader.text(
            "name",
            Some(MAX_CHAR_LENGTH),
            current.map(|draft| draft.name),
        );
        let errors = reader.finish();
        match name {
            Some(name) if errors.is_empty() => Ok(GenreDraft { name }),
            _ => Err(errors.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntityId;
    use crate::domain::serializers::test_support::wire;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({ "name": "Drama" }))]
    #[case(json!({ "id": 40, "name": " Film noir " }))]
    #[tokio::test]
    async fn draft_survives_a_round_trip(#[case] input: Value) {
        let draft = GenreSerializer
            .deserialize(&wire(input), None, WriteMode::Full)
            .await
            .expect("valid genre");
        let rendered = GenreSerializer.serialize(&Genre::from_draft(EntityId::new(1), draft.clone()));

        let reparsed = GenreSerializer
            .deserialize(&rendered, None, WriteMode::Full)
            .await
            .expect("rendered genre is valid");

        assert_eq!(reparsed, draft);
    }

    #[rstest]
    fn renders_id_and_name() {
        let genre = Genre::from_draft(
            EntityId::new(3),
            GenreDraft {
                name: "Noir".to_owned(),
            },
        );
        assert_eq!(
            Value::Object(GenreSerializer.serialize(&genre)),
            json!({ "id": 3, "name": "Noir" })
        );
    }

    #[tokio::test]
    async fn ignores_unknown_keys_and_client_ids() {
        let draft = GenreSerializer
            .deserialize(
                &wire(json!({ "id": 99, "name": " Drama ", "colour": "red" })),
                None,
                WriteMode::Full,
            )
            .await
            .expect("valid genre");
        assert_eq!(draft.name, "Drama");
    }

    #[tokio::test]
    async fn partial_without_existing_row_still_requires_name() {
        let err = GenreSerializer
            .deserialize(&wire(json!({})), None, WriteMode::Partial)
            .await
            .expect_err("name required");
        let SerializerError::Invalid(errors) = err else {
            panic!("expected field errors");
        };
        assert_eq!(
            errors.get("name"),
            Some(&["This field is required.".to_owned()][..])
        );
    }
}
