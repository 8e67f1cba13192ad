//! ## Crate layout
//! - `value`: the loosely-typed `Value` and the ordered `Map`.
//! - `schema`: field descriptors, visibility grouping, type resolution.
//! - `validate`: construction-time null and type checks.
//! - `record`: dynamic record instances backed by a shared schema.
//! - `traits`: `RecordType` for statically declared records, `FieldValue`
//!   for the Rust types that back their fields.
//! - `serialize`: document, map, and JSON adapters.
//!
//! `#[derive(Record)]` (feature `derive`, on by default) turns a struct with
//! named fields into a `RecordType`.

// derived code refers to `::recordkit`, so it also resolves inside this crate
extern crate self as recordkit;

pub use recordkit_core::{
    Error, error, record, schema, serialize, traits, types, validate, value,
};

#[cfg(feature = "derive")]
pub use recordkit_derive::Record;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use recordkit_core::prelude::*;

    #[cfg(feature = "derive")]
    pub use recordkit_derive::Record;
}
