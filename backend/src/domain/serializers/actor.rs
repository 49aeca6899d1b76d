//! Actor wire format.

use async_trait::async_trait;
use serde_json::Value;

use super::fields::{MAX_CHAR_LENGTH, RecordReader};
use super::{Serializer, SerializerError, WireRecord, WriteMode, effective_mode};
use crate::domain::{Actor, ActorDraft, Entity};

/// Wire shape `{"id", "first_name", "last_name"}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActorSerializer;

#[async_trait]
impl Serializer<Actor> for ActorSerializer {
    fn serialize(&self, actor: &Actor) -> WireRecord {
        let mut record = WireRecord::new();
        record.insert("id".to_owned(), Value::from(actor.id().get()));
        record.insert("first_name".to_owned(), Value::from(actor.first_name()));
        record.insert("last_name".to_owned(), Value::from(actor.last_name()));
        record
    }

    async fn deserialize(
        &self,
        record: &WireRecord,
        existing: Option<&Actor>,
        mode: WriteMode,
    ) -> Result<ActorDraft, SerializerError> {
        let (current_first, current_last) = existing
            .map(Entity::draft)
            .map_or((None, None), |draft| {
                (Some(draft.first_name), Some(draft.last_name))
            });
        let mut reader = RecordReader::new(record, effective_mode(existing, mode));
        let first_name = reader.text("first_name", Some(MAX_CHAR_LENGTH), current_first);
        let last_name = reader.text("last_name", Some(MAX_CHAR_LENGTH), current_last);
        let errors = reader.finish();
        match (first_name, last_name) {
            (Some(first_name), Some(last_name)) if errors.is_empty() => Ok(ActorDraft {
                first_name,
                last_name,
            }),
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
    #[case(json!({ "first_name": "Ingrid", "last_name": "Bergman" }))]
    #[case(json!({ "id": 7, "first_name": " Kim ", "last_name": "Novak", "age": 90 }))]
    #[tokio::test]
    async fn draft_survives_a_round_trip(#[case] input: Value) {
        let draft = ActorSerializer
            .deserialize(&wire(input), None, WriteMode::Full)
            .await
            .expect("valid actor");
        let rendered = ActorSerializer.serialize(&Actor::from_draft(EntityId::new(1), draft.clone()));

        let reparsed = ActorSerializer
            .deserialize(&rendered, None, WriteMode::Full)
            .await
            .expect("rendered actor is valid");

        assert_eq!(reparsed, draft);
    }

    #[tokio::test]
    async fn reports_every_missing_name() {
        let err = ActorSerializer
            .deserialize(&wire(json!({})), None, WriteMode::Full)
            .await
            .expect_err("names required");
        let SerializerError::Invalid(errors) = err else {
            panic!("expected field errors");
        };
        assert!(errors.get("first_name").is_some());
        assert!(errors.get("last_name").is_some());
    }

    #[rstest]
    fn renders_snake_case_names() {
        let actor = Actor::from_draft(
            EntityId::new(1),
            ActorDraft {
                first_name: "Ingrid".to_owned(),
                last_name: "Bergman".to_owned(),
            },
        );
        assert_eq!(
            Value::Object(ActorSerializer.serialize(&actor)),
            json!({ "id": 1, "first_name": "Ingrid", "last_name": "Bergman" })
        );
    }
}
