//! Construction-time validation.
//!
//! Fields are visited in construction order (public, private, protected).
//! Each field's candidate value is resolved from the input, its default, or
//! null, then checked for null acceptance and scalar category. The first
//! failing field aborts construction.


use crate::{
    schema::{FieldDescriptor, RecordSchema},
    types::ScalarType,
    value::{Map, Value},
};
use thiserror::Error as ThisError;

///
/// ValidationError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValidationError {
    #[error("field '{field}' must not be null")]
    NullNotAllowed { field: String },

    #[error("field '{field}' must be of type '{expected}', {actual} given")]
    TypeMismatch {
        field: String,
        expected: ScalarType,
        actual: ScalarType,
    },
}

impl ValidationError {
    /// Name of the offending field.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::NullNotAllowed { field } | Self::TypeMismatch { field, .. } => field,
        }
    }

    pub(crate) fn null_not_allowed(field: &str) -> Self {
        Self::NullNotAllowed {
            field: field.to_string(),
        }
    }

    pub(crate) fn type_mismatch(field: &str, expected: ScalarType, actual: ScalarType) -> Self {
        Self::TypeMismatch {
            field: field.to_string(),
            expected,
            actual,
        }
    }
}

/// Candidate value for a field: the explicit input entry (even when it is
/// `Null`), else the declared default, else `Null`.
#[must_use]
pub fn resolve_value(field: &FieldDescriptor, input: &Map) -> Value {
    input
        .get(field.name())
        .or_else(|| field.default_value())
        .cloned()
        .unwrap_or(Value::Null)
}

/// Check one resolved value against its descriptor.
pub fn check(field: &FieldDescriptor, value: &Value) -> Result<(), ValidationError> {
    let Some(actual) = value.scalar_type() else {
        return if field.is_nullable() {
            Ok(())
        } else {
            Err(ValidationError::null_not_allowed(field.name()))
        };
    };

    match field.declared_type() {
        Some(expected) if expected != actual => Err(ValidationError::type_mismatch(
            field.name(),
            expected,
            actual,
        )),
        _ => Ok(()),
    }
}

/// Validate `input` against `schema`, returning one value per field in
/// declaration order. Input keys the schema does not declare are ignored.
pub fn construct(schema: &RecordSchema, input: &Map) -> Result<Vec<Value>, ValidationError> {
    let mut values = vec![Value::Null; schema.len()];

    for (index, field) in schema.ordered() {
        let value = resolve_value(field, input);
        check(field, &value)?;
        values[index] = value;
    }

    Ok(values)
}
