//! Core runtime for recordkit: values, record schemas, construction-time
//! validation, dynamic record instances, and the serialization adapter.

pub mod error;
pub mod record;
pub mod schema;
pub mod serialize;
pub mod traits;
pub mod types;
pub mod validate;
pub mod value;

pub use error::Error;

///
/// Prelude
///
/// Domain vocabulary only; errors and helpers are imported from their
/// modules.
///

pub mod prelude {
    pub use crate::{
        record::Record,
        schema::{FieldDescriptor, FieldKeys, RecordSchema, TypeHint},
        traits::{FieldValue, RecordType},
        types::{ScalarType, Visibility},
        value::{Map, Value},
    };
}
