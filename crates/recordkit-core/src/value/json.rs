use crate::value::{Map, Value};
use serde_json::{Number, Value as JsonValue};

// Decoded JSON is the common source of input maps.
impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(v) => Self::Bool(v),
            JsonValue::Number(n) => number_to_value(&n),
            JsonValue::String(v) => Self::Text(v),
            JsonValue::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            JsonValue::Object(object) => Self::Map(
                object
                    .into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn number_to_value(n: &Number) -> Value {
    if let Some(v) = n.as_i64() {
        Value::Int(v)
    } else if let Some(v) = n.as_u64() {
        Value::Float(v as f64)
    } else {
        Value::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

// Non-finite floats have no JSON form and become null.
impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(v) => Self::Bool(v),
            Value::Float(v) => Number::from_f64(v).map_or(Self::Null, Self::Number),
            Value::Int(v) => Self::Number(v.into()),
            Value::List(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Map(map) => Self::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
            Value::Null => Self::Null,
            Value::Text(v) => Self::String(v),
        }
    }
}

impl TryFrom<JsonValue> for Map {
    type Error = JsonValue;

    /// Convert a JSON object into a map; any other JSON value is handed back.
    fn try_from(json: JsonValue) -> Result<Self, Self::Error> {
        match json {
            JsonValue::Object(object) => Ok(object
                .into_iter()
                .map(|(k, v)| (k, Value::from(v)))
                .collect()),
            other => Err(other),
        }
    }
}
