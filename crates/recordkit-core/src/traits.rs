use crate::{
    schema::{FieldKeys, RecordSchema, TypeHint},
    serialize::{self, SerializeError},
    types::ScalarType,
    validate::{self, ValidationError},
    value::{Map, Value},
};

///
/// FieldValue
///
/// Rust types that can back a record field. The type contributes the
/// field's type hint and converts to and from `Value`.
///

pub trait FieldValue: Sized {
    /// Whether the Rust type can hold null.
    const NULLABLE: bool = false;

    fn type_hint() -> TypeHint;

    fn to_value(&self) -> Value;

    /// Convert a value that has already passed validation. Still checked, so
    /// a mismatch surfaces as a `ValidationError` for `field`.
    fn from_value(field: &str, value: Value) -> Result<Self, ValidationError>;
}

fn mismatch(field: &str, expected: ScalarType, value: &Value) -> ValidationError {
    value.scalar_type().map_or_else(
        || ValidationError::null_not_allowed(field),
        |actual| ValidationError::type_mismatch(field, expected, actual),
    )
}

macro_rules! impl_field_value {
    ($ty:ty, $scalar:ident, $variant:ident) => {
        impl FieldValue for $ty {
            fn type_hint() -> TypeHint {
                TypeHint::Named(ScalarType::$scalar)
            }

            #[allow(clippy::clone_on_copy)]
            fn to_value(&self) -> Value {
                Value::$variant(self.clone())
            }

            fn from_value(field: &str, value: Value) -> Result<Self, ValidationError> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(mismatch(field, ScalarType::$scalar, &other)),
                }
            }
        }
    };
}

impl_field_value!(bool, Bool, Bool);
impl_field_value!(f64, Float, Float);
impl_field_value!(i64, Int, Int);
impl_field_value!(String, String, Text);
impl_field_value!(Vec<Value>, Array, List);
impl_field_value!(Map, Object, Map);

// Untyped: any value, including null, is representable.
impl FieldValue for Value {
    const NULLABLE: bool = true;

    fn type_hint() -> TypeHint {
        TypeHint::Untyped
    }

    fn to_value(&self) -> Value {
        self.clone()
    }

    fn from_value(_field: &str, value: Value) -> Result<Self, ValidationError> {
        Ok(value)
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    const NULLABLE: bool = true;

    fn type_hint() -> TypeHint {
        T::type_hint().into_nullable()
    }

    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, FieldValue::to_value)
    }

    fn from_value(field: &str, value: Value) -> Result<Self, ValidationError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(field, other).map(Some),
        }
    }
}

///
/// RecordType
///
/// A statically declared record. Usually derived with `#[derive(Record)]`;
/// the derive caches the schema per type and maps fields positionally in
/// declaration order.
///

pub trait RecordType: Sized {
    fn schema() -> &'static RecordSchema;

    /// Build `Self` from validated values in declaration order.
    fn from_values(values: Vec<Value>) -> Result<Self, ValidationError>;

    /// Field values in declaration order.
    fn to_values(&self) -> Vec<Value>;

    /// Validate `input` and construct. An empty map applies every default
    /// and null rule.
    fn create(input: &Map) -> Result<Self, ValidationError> {
        let values = validate::construct(Self::schema(), input)?;

        Self::from_values(values)
    }

    /// Alias of [`RecordType::create`].
    fn generate(input: &Map) -> Result<Self, ValidationError> {
        Self::create(input)
    }

    #[must_use]
    fn fields() -> &'static FieldKeys {
        Self::schema().keys()
    }

    /// `(name, value)` pairs in construction order.
    fn field_values(&self) -> Vec<(&'static str, Value)> {
        let schema = Self::schema();
        let mut values: Vec<Option<Value>> = self.to_values().into_iter().map(Some).collect();

        schema
            .ordered()
            .map(|(index, field)| {
                let value = values
                    .get_mut(index)
                    .and_then(Option::take)
                    .unwrap_or(Value::Null);

                (field.name(), value)
            })
            .collect()
    }

    fn to_map(&self) -> Map {
        serialize::to_map(self.field_values())
    }

    fn to_document(&self) -> Value {
        serialize::to_document(self.field_values())
    }

    fn to_json(&self) -> Result<String, SerializeError> {
        serialize::to_json(self.field_values())
    }
}
