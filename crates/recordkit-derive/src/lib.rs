use proc_macro::TokenStream;

mod attr;
mod record;

/// Derive `RecordType` for a struct with named fields.
///
/// Field attributes (`#[record(...)]`):
/// - `nullable`: explicit nullable marker; the field type must hold null
/// - `default = expr`: default used when the input omits the key
/// - `visibility = "public" | "private" | "protected"`: overrides the
///   visibility taken from the Rust field
/// - `rename = "key"`: external field name
///
/// Struct attribute: `#[record(name = "...")]` overrides the schema name.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input.into()).into()
}
