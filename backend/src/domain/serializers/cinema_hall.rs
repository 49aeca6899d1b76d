//! Cinema hall wire format.

use async_trait::async_trait;
use serde_json::Value;

use super::fields::{MAX_CHAR_LENGTH, RecordReader};
use super::{Serializer, SerializerError, WireRecord, WriteMode, effective_mode};
use crate::domain::{CinemaHall, CinemaHallDraft, Entity};

/// Wire shape `{"id", "name", "rows", "seats_in_row", "capacity"}`.
///
/// `capacity` is derived on output and ignored on input.
#[derive(Debug, Clone, Copy, Default)]
pub struct CinemaHallSerializer;

#[async_trait]
impl Serializer<CinemaHall> for CinemaHallSerializer {
    fn serialize(&self, hall: &CinemaHall) -> WireRecord {
        let mut record = WireRecord::new();
        record.insert("id".to_owned(), Value::from(hall.id().get()));
        record.insert("name".to_owned(), Value::from(hall.name()));
        record.insert("rows".to_owned(), Value::from(hall.rows()));
        record.insert("seats_in_row".to_owned(), Value::from(hall.seats_in_row()));
        record.insert("capacity".to_owned(), Value::from(hall.capacity()));
        record
    }

    async fn deserialize(
        &self,
        record: &WireRecord,
        existing: Option<&CinemaHall>,
        mode: WriteMode,
    ) -> Result<CinemaHallDraft, SerializerError> {
        let current = existing.map(Entity::draft);
        let mut reader = RecordReader::new(record, effective_mode(existing, mode));
        let name = reader.text(
            "name",
            Some(MAX_CHAR_LENGTH),
            current.as_ref().map(|draft| draft.name.clone()),
        );
        let rows = reader.non_negative_int("rows", current.as_ref().map(|draft| draft.rows));
        let seats_in_row = reader.non_negative_int(
            "seats_in_row",
            current.as_ref().map(|draft| draft.seats_in_row),
        );
        let errors = reader.finish();
        match (name, rows, seats_in_row) {
            (Some(name), Some(rows), Some(seats_in_row)) if errors.is_empty() => {
                Ok(CinemaHallDraft {
                    name,
                    rows,
                    seats_in_row,
                })
            }
            _ => Err(errors.into()),
        }
    }
}
