//! Field-level readers that validate wire records and collect error messages.

use std::collections::BTreeMap;

use serde_json::Value;

use super::{WireRecord, WriteMode};
use crate::domain::EntityId;

/// Maximum length of every bounded text field.
pub const MAX_CHAR_LENGTH: usize = 255;

const REQUIRED: &str = "This field is required.";
const NOT_NULL: &str = "This field may not be null.";
const BLANK: &str = "This field may not be blank.";
const NOT_A_STRING: &str = "Not a valid string.";
const NOT_AN_INTEGER: &str = "A valid integer is required.";
const BELOW_ZERO: &str = "Ensure this value is greater than or equal to 0.";
const ABOVE_I32: &str = "Ensure this value is less than or equal to 2147483647.";

/// Per-field validation messages, keyed by field name in sorted order.
///
/// # Examples
/// ```
/// use backend::domain::serializers::FieldErrors;
///
/// let mut errors = FieldErrors::default();
/// errors.push("name", "This field is required.");
/// assert!(!errors.is_empty());
/// assert_eq!(errors.get("name"), Some(&["This field is required.".to_owned()][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// A map holding one message for one field.
    #[must_use]
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.push(field, message);
        errors
    }

    /// Append a message to a field.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// True when no field carries a message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded against `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Render as a JSON object of string arrays.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(
            self.0
                .into_iter()
                .map(|(field, messages)| {
                    let messages = messages.into_iter().map(Value::String).collect();
                    (field, Value::Array(messages))
                })
                .collect(),
        )
    }
}

/// Label used in messages for the JSON type of `value`.
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Accept only JSON objects as write payloads.
///
/// # Examples
/// ```
/// use backend::domain::serializers::into_record;
/// use serde_json::json;
///
/// assert!(into_record(json!({ "name": "Drama" })).is_ok());
/// assert!(into_record(json!(["Drama"])).is_err());
/// ```
pub fn into_record(body: Value) -> Result<WireRecord, FieldErrors> {
    match body {
        Value::Object(record) => Ok(record),
        other => Err(FieldErrors::single(
            "non_field_errors",
            format!(
                "Invalid data. Expected a dictionary, but got {}.",
                json_type_name(&other)
            ),
        )),
    }
}

/// Walks the fields of one wire record, recording a message for every
/// invalid field instead of stopping at the first one.
///
/// Each reader returns `None` exactly when it recorded an error. In partial
/// mode an absent field yields the supplied `current` value unchanged.
pub(crate) struct RecordReader<'a> {
    record: &'a WireRecord,
    mode: WriteMode,
    errors: FieldErrors,
}

impl<'a> RecordReader<'a> {
    pub(crate) fn new(record: &'a WireRecord, mode: WriteMode) -> Self {
        Self {
            record,
            mode,
            errors: FieldErrors::default(),
        }
    }

    /// Non-blank text, trimmed, at most `max_len` characters when bounded.
    pub(crate) fn text(
        &mut self,
        field: &str,
        max_len: Option<usize>,
        current: Option<String>,
    ) -> Option<String> {
        let value = match self.present(field, current) {
            PresentResult::Supplied(value) => value,
            PresentResult::Keep(kept) => return Some(kept),
            PresentResult::Rejected => return None,
        };
        let Value::String(raw) = value else {
            return self.reject(field, NOT_A_STRING);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return self.reject(field, BLANK);
        }
        if let Some(limit) = max_len
            && trimmed.chars().count() > limit
        {
            let message = format!("Ensure this field has no more than {limit} characters.");
            return self.reject(field, &message);
        }
        Some(trimmed.to_owned())
    }

    /// Integer in `0..=i32::MAX`.
    pub(crate) fn non_negative_int(&mut self, field: &str, current: Option<i32>) -> Option<i32> {
        let value = match self.present(field, current) {
            PresentResult::Supplied(value) => value,
            PresentResult::Keep(kept) => return Some(kept),
            PresentResult::Rejected => return None,
        };
        let Value::Number(number) = value else {
            return self.reject(field, NOT_AN_INTEGER);
        };
        match number.as_i64() {
            Some(raw) if raw < 0 => self.reject(field, BELOW_ZERO),
            Some(raw) => match i32::try_from(raw) {
                Ok(parsed) => Some(parsed),
                Err(_) => self.reject(field, ABOVE_I32),
            },
            None if number.is_u64() => self.reject(field, ABOVE_I32),
            None => self.reject(field, NOT_AN_INTEGER),
        }
    }

    /// Optional list of identifiers; absent in full mode means empty.
    pub(crate) fn id_list(
        &mut self,
        field: &str,
        current: Option<Vec<EntityId>>,
    ) -> Option<Vec<EntityId>> {
        let Some(value) = self.record.get(field) else {
            return Some(match self.mode {
                WriteMode::Partial => current.unwrap_or_default(),
                WriteMode::Full => Vec::new(),
            });
        };
        let items = match value {
            Value::Null => return self.reject(field, NOT_NULL),
            Value::Array(items) => items,
            other => {
                let message = format!(
                    "Expected a list of items but got type \"{}\".",
                    json_type_name(other)
                );
                return self.reject(field, &message);
            }
        };

        let mut ids = Vec::with_capacity(items.len());
        let mut valid = true;
        for item in items {
            let Some(raw) = item.as_i64() else {
                valid = false;
                self.errors.push(
                    field,
                    format!(
                        "Incorrect type. Expected pk value, received {}.",
                        json_type_name(item)
                    ),
                );
                continue;
            };
            ids.push(EntityId::new(raw));
        }
        valid.then_some(ids)
    }

    /// Record an error against `field` from outside the built-in readers.
    pub(crate) fn push_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(field, message);
    }

    /// Collected messages.
    pub(crate) fn finish(self) -> FieldErrors {
        self.errors
    }

    /// Apply the presence rules shared by every required field.
    fn present<T>(&mut self, field: &str, current: Option<T>) -> PresentResult<'a, T> {
        match self.record.get(field) {
            None => match (self.mode, current) {
                (WriteMode::Partial, Some(kept)) => PresentResult::Keep(kept),
                _ => {
                    self.errors.push(field, REQUIRED);
                    PresentResult::Rejected
                }
            },
            Some(Value::Null) => {
                self.errors.push(field, NOT_NULL);
                PresentResult::Rejected
            }
            Some(value) => PresentResult::Supplied(value),
        }
    }

    fn reject<T>(&mut self, field: &str, message: &str) -> Option<T> {
        self.errors.push(field, message);
        None
    }
}

enum PresentResult<'a, T> {
    Supplied(&'a Value),
    Keep(T),
    Rejected,
}
