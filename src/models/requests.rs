//! Request validation for item payloads
//!
//! Inbound bodies arrive as raw JSON so that every field can be checked and
//! reported on its own, rather than failing the whole body on the first type
//! mismatch. Create requires all fields; update validates only what is present.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::{ItemChanges, NewItem};

// == Limits ==
/// Maximum item name length in characters
pub const MAX_NAME_LENGTH: usize = 255;

/// Key used for errors that are not tied to a single field
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

const REQUIRED: &str = "This field is required.";
const NOT_NULL: &str = "This field may not be null.";
const NOT_BLANK: &str = "This field may not be blank.";
const NOT_STRING: &str = "Not a valid string.";
const NOT_INTEGER: &str = "A valid integer is required.";

// == Field Errors ==
/// Validation messages grouped by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message against a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Messages recorded for one field, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

// == Validate Create ==
/// Validates a full create payload.
///
/// `name`, `description` and `quantity` are all required. Unknown keys,
/// including a client supplied `id`, are ignored.
pub fn validate_create(data: &Value) -> Result<NewItem, FieldErrors> {
    let changes = validate(data, false)?;
    match changes {
        ItemChanges {
            name: Some(name),
            description: Some(description),
            quantity: Some(quantity),
        } => Ok(NewItem {
            name,
            description,
            quantity,
        }),
        // validate() already reported every missing field
        _ => {
            let mut errors = FieldErrors::new();
            errors.add(NON_FIELD_ERRORS, "Incomplete item payload.");
            Err(errors)
        }
    }
}

// == Validate Update ==
/// Validates a partial update payload. Absent fields are left untouched.
pub fn validate_update(data: &Value) -> Result<ItemChanges, FieldErrors> {
    validate(data, true)
}

fn validate(data: &Value, partial: bool) -> Result<ItemChanges, FieldErrors> {
    let object = as_object(data)?;
    let mut errors = FieldErrors::new();
    let mut changes = ItemChanges::default();

    match object.get("name") {
        Some(value) => match text_field(value, false) {
            Ok(name) if name.chars().count() > MAX_NAME_LENGTH => errors.add(
                "name",
                format!(
                    "Ensure this field has no more than {} characters.",
                    MAX_NAME_LENGTH
                ),
            ),
            Ok(name) => changes.name = Some(name),
            Err(msg) => errors.add("name", msg),
        },
        None if !partial => errors.add("name", REQUIRED),
        None => {}
    }

    match object.get("description") {
        Some(value) => match text_field(value, true) {
            Ok(description) => changes.description = Some(description),
            Err(msg) => errors.add("description", msg),
        },
        None if !partial => errors.add("description", REQUIRED),
        None => {}
    }

    match object.get("quantity") {
        Some(value) => match integer_field(value) {
            Ok(quantity) => changes.quantity = Some(quantity),
            Err(msg) => errors.add("quantity", msg),
        },
        None if !partial => errors.add("quantity", REQUIRED),
        None => {}
    }

    if errors.is_empty() {
        Ok(changes)
    } else {
        Err(errors)
    }
}

fn as_object(data: &Value) -> Result<&Map<String, Value>, FieldErrors> {
    data.as_object().ok_or_else(|| {
        let mut errors = FieldErrors::new();
        errors.add(
            NON_FIELD_ERRORS,
            format!(
                "Invalid data. Expected a dictionary, but got {}.",
                json_type_name(data)
            ),
        );
        errors
    })
}

/// Strings are trimmed. Numbers are accepted and converted to text.
fn text_field(value: &Value, allow_blank: bool) -> Result<String, &'static str> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => return Err(NOT_NULL),
        _ => return Err(NOT_STRING),
    };
    if text.is_empty() && !allow_blank {
        return Err(NOT_BLANK);
    }
    Ok(text)
}

/// Accepts JSON integers, whole floats and integer strings. Booleans are rejected.
fn integer_field(value: &Value) -> Result<i64, &'static str> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
                    .ok_or(NOT_INTEGER)
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| NOT_INTEGER),
        Value::Null => Err(NOT_NULL),
        _ => Err(NOT_INTEGER),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}
