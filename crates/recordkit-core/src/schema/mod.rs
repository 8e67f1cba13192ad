//! Record schemas: field descriptors, visibility grouping, and type
//! resolution. A schema is built once and never mutated.

mod field;
mod keys;
pub mod resolve;

#[cfg(test)]
mod tests;

use crate::{
    types::ScalarType,
    validate::{self, ValidationError},
};
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error as ThisError;

// re-exports
pub use field::FieldDescriptor;
pub use keys::FieldKeys;
pub use resolve::TypeHint;

///
/// SchemaError
///

#[derive(Debug, ThisError)]
pub enum SchemaError {
    #[error("record '{record}' declares field '{field}' more than once")]
    DuplicateField { record: String, field: String },

    #[error("record '{record}' declares a field with an empty name")]
    EmptyFieldName { record: String },

    #[error("default value for field '{field}' is invalid: {source}")]
    InvalidDefault {
        field: String,
        source: ValidationError,
    },
}

///
/// RecordSchema
///
/// Named, ordered set of field descriptors. Field keys and the construction
/// order are computed once when the schema is built.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecordSchema {
    name: String,
    fields: Vec<FieldDescriptor>,

    #[serde(skip)]
    keys: FieldKeys,

    #[serde(skip)]
    order: Vec<usize>,
}

impl RecordSchema {
    #[must_use]
    pub fn builder(name: impl Into<String>) -> RecordSchemaBuilder {
        RecordSchemaBuilder::new(name)
    }

    /// Assemble a schema without builder checks. Callers guarantee unique,
    /// non-empty field names; `#[derive(Record)]` rejects both at compile
    /// time.
    #[doc(hidden)]
    #[must_use]
    pub fn new_unchecked(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        let (keys, order) = keys::introspect(&fields);

        Self {
            name: name.into(),
            fields,
            keys,
            order,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Descriptors in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    #[must_use]
    pub const fn keys(&self) -> &FieldKeys {
        &self.keys
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Declaration index of a field.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == name)
    }

    /// Descriptors in construction order, paired with their declaration index.
    pub fn ordered(&self) -> impl Iterator<Item = (usize, &FieldDescriptor)> {
        self.order.iter().map(|&index| (index, &self.fields[index]))
    }

    /// Nullability of a declared field; `None` if the field is unknown.
    #[must_use]
    pub fn is_nullable(&self, name: &str) -> Option<bool> {
        self.field(name).map(FieldDescriptor::is_nullable)
    }

    /// Declared type of a declared field; `None` if the field is unknown,
    /// `Some(None)` if it is untyped.
    #[must_use]
    pub fn declared_type(&self, name: &str) -> Option<Option<ScalarType>> {
        self.field(name).map(FieldDescriptor::declared_type)
    }
}

///
/// RecordSchemaBuilder
///

#[derive(Debug)]
pub struct RecordSchemaBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
    inherited: Vec<FieldDescriptor>,
}

impl RecordSchemaBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            inherited: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Inherit every field of `parent`. Own fields come first; a parent field
    /// is dropped when this record (or an earlier parent) declares the same
    /// name, so each field appears exactly once.
    #[must_use]
    pub fn inherit(mut self, parent: &RecordSchema) -> Self {
        self.inherited.extend(parent.fields().iter().cloned());
        self
    }

    pub fn build(self) -> Result<RecordSchema, SchemaError> {
        let Self {
            name,
            mut fields,
            inherited,
        } = self;

        for (index, field) in fields.iter().enumerate() {
            if field.name().is_empty() {
                return Err(SchemaError::EmptyFieldName { record: name });
            }
            if fields[..index].iter().any(|f| f.name() == field.name()) {
                return Err(SchemaError::DuplicateField {
                    record: name,
                    field: field.name().to_string(),
                });
            }
        }

        for parent_field in inherited {
            if !fields.iter().any(|f| f.name() == parent_field.name()) {
                fields.push(parent_field);
            }
        }

        for field in &fields {
            check_default(field)?;
        }

        let schema = RecordSchema::new_unchecked(name, fields);
        tracing::debug!(
            record = schema.name(),
            fields = schema.len(),
            "record schema built"
        );

        Ok(schema)
    }
}

// A null default is left for construction to reject, exactly like an absent
// value on a field without a default.
fn check_default(field: &FieldDescriptor) -> Result<(), SchemaError> {
    match field.default_value() {
        Some(value) if !value.is_null() => {
            validate::check(field, value).map_err(|source| SchemaError::InvalidDefault {
                field: field.name().to_string(),
                source,
            })
        }
        _ => Ok(()),
    }
}

/// Return the schema held in `cell`, building it on first use.
///
/// Derived record types keep one cell per type; the schema is read-only once
/// populated.
pub fn cached(
    cell: &'static OnceLock<RecordSchema>,
    init: impl FnOnce() -> RecordSchema,
) -> &'static RecordSchema {
    cell.get_or_init(|| {
        let schema = init();
        tracing::trace!(
            record = schema.name(),
            fields = schema.len(),
            "record schema cached"
        );

        schema
    })
}
