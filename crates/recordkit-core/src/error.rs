use crate::{
    record::RecordError, schema::SchemaError, serialize::SerializeError,
    validate::ValidationError,
};
use thiserror::Error as ThisError;

///
/// Error
///
/// Crate-level error; each variant wraps the error of one stage.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Serialize(#[from] SerializeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
