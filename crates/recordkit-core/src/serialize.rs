//! Serialization adapter.
//!
//! Pure data transforms between validated records and generic documents.
//! Nothing here re-validates; documents read back are untyped.

use crate::value::{Map, Value};
use thiserror::Error as ThisError;

///
/// SerializeError
///

#[derive(Debug, ThisError)]
pub enum SerializeError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document root must be an object, {actual} given")]
    NotAnObject { actual: &'static str },
}

/// Collect ordered `(name, value)` pairs into a map.
pub fn to_map<'a, I>(fields: I) -> Map
where
    I: IntoIterator<Item = (&'a str, Value)>,
{
    fields.into_iter().collect()
}

/// Ordered document form of a record.
pub fn to_document<'a, I>(fields: I) -> Value
where
    I: IntoIterator<Item = (&'a str, Value)>,
{
    Value::Map(to_map(fields))
}

/// JSON text of a record; object keys follow field order.
pub fn to_json<'a, I>(fields: I) -> Result<String, SerializeError>
where
    I: IntoIterator<Item = (&'a str, Value)>,
{
    Ok(serde_json::to_string(&to_map(fields))?)
}

/// Unwrap a document into a generic, unvalidated map.
pub fn from_document(document: Value) -> Result<Map, SerializeError> {
    match document {
        Value::Map(map) => Ok(map),
        other => Err(SerializeError::NotAnObject {
            actual: other.type_label(),
        }),
    }
}

/// Parse JSON text into a generic document.
pub fn from_json(json: &str) -> Result<Value, SerializeError> {
    Ok(serde_json::from_str(json)?)
}
