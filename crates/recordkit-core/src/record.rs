use crate::{
    schema::{FieldKeys, RecordSchema},
    serialize::{self, SerializeError},
    validate::{self, ValidationError},
    value::{Map, Value},
};
use std::sync::Arc;
use thiserror::Error as ThisError;

///
/// RecordError
///
/// Errors from accessing a constructed record.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum RecordError {
    #[error("record '{record}' has no field '{field}'")]
    UnknownField { record: String, field: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

///
/// Record
///
/// Dynamic record instance backed by a shared schema. Holds exactly one
/// value per declared field, each validated when it was assigned.
///

#[derive(Clone, Debug)]
pub struct Record {
    schema: Arc<RecordSchema>,
    values: Vec<Value>,
}

impl Record {
    /// Validate `input` against `schema` and construct. Fails on the first
    /// invalid field in construction order.
    pub fn create(schema: &Arc<RecordSchema>, input: &Map) -> Result<Self, ValidationError> {
        let values = validate::construct(schema, input)?;

        Ok(Self {
            schema: Arc::clone(schema),
            values,
        })
    }

    /// Alias of [`Record::create`].
    pub fn generate(schema: &Arc<RecordSchema>, input: &Map) -> Result<Self, ValidationError> {
        Self::create(schema, input)
    }

    #[must_use]
    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    #[must_use]
    pub fn keys(&self) -> &FieldKeys {
        self.schema.keys()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.schema
            .index_of(field)
            .and_then(|index| self.values.get(index))
    }

    /// Assign a new value. The value is validated against the field's
    /// descriptor; on failure the record is left unchanged.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> Result<(), RecordError> {
        let index = self
            .schema
            .index_of(field)
            .ok_or_else(|| RecordError::UnknownField {
                record: self.schema.name().to_string(),
                field: field.to_string(),
            })?;

        let value = value.into();
        validate::check(&self.schema.fields()[index], &value)?;
        self.values[index] = value;

        Ok(())
    }

    /// `(name, value)` pairs in construction order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.schema
            .ordered()
            .map(|(index, field)| (field.name(), &self.values[index]))
    }

    fn field_values(&self) -> impl Iterator<Item = (&str, Value)> {
        self.iter().map(|(name, value)| (name, value.clone()))
    }

    #[must_use]
    pub fn to_map(&self) -> Map {
        serialize::to_map(self.field_values())
    }

    #[must_use]
    pub fn to_document(&self) -> Value {
        serialize::to_document(self.field_values())
    }

    pub fn to_json(&self) -> Result<String, SerializeError> {
        serialize::to_json(self.field_values())
    }
}

// Field-wise equality between records of the same schema. Schemas built
// separately compare by content.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        (Arc::ptr_eq(&self.schema, &other.schema) || self.schema == other.schema)
            && self.values == other.values
    }
}
