use crate::{
    schema::{FieldDescriptor, RecordSchema, SchemaError, cached},
    types::ScalarType,
    validate::ValidationError,
    value::Value,
};
use std::sync::OnceLock;

fn base() -> RecordSchema {
    RecordSchema::builder("Base")
        .field(FieldDescriptor::public("id").typed(ScalarType::Int))
        .field(FieldDescriptor::protected("created").typed(ScalarType::String))
        .build()
        .unwrap()
}

#[test]
fn duplicate_fields_are_rejected() {
    let err = RecordSchema::builder("User")
        .field(FieldDescriptor::public("name"))
        .field(FieldDescriptor::private("name"))
        .build()
        .unwrap_err();

    assert!(matches!(
        err,
        SchemaError::DuplicateField { ref record, ref field } if record == "User" && field == "name"
    ));
}

#[test]
fn empty_field_names_are_rejected() {
    let err = RecordSchema::builder("User")
        .field(FieldDescriptor::public(""))
        .build()
        .unwrap_err();

    assert!(matches!(err, SchemaError::EmptyFieldName { .. }));
}

#[test]
fn defaults_must_satisfy_their_own_field() {
    let err = RecordSchema::builder("User")
        .field(FieldDescriptor::public("age").typed(ScalarType::Int).default("ten"))
        .build()
        .unwrap_err();

    let SchemaError::InvalidDefault { field, source } = err else {
        panic!("expected InvalidDefault");
    };
    assert_eq!(field, "age");
    assert_eq!(
        source,
        ValidationError::TypeMismatch {
            field: "age".to_string(),
            expected: ScalarType::Int,
            actual: ScalarType::String,
        }
    );
}

#[test]
fn null_default_on_strict_field_is_accepted_at_build_time() {
    let schema = RecordSchema::builder("User")
        .field(FieldDescriptor::public("age").typed(ScalarType::Int).default(Value::Null))
        .build()
        .unwrap();

    assert!(schema.field("age").unwrap().has_default());
}

#[test]
fn inherited_fields_appear_once_after_own_fields() {
    let parent = base();
    let schema = RecordSchema::builder("User")
        .field(FieldDescriptor::public("name").typed(ScalarType::String))
        .field(FieldDescriptor::private("id").typed(ScalarType::String))
        .inherit(&parent)
        .build()
        .unwrap();

    let names: Vec<_> = schema.fields().iter().map(FieldDescriptor::name).collect();
    assert_eq!(names, ["name", "id", "created"]);

    // the child's redeclaration wins
    assert_eq!(schema.declared_type("id"), Some(Some(ScalarType::String)));
    assert_eq!(schema.keys().all, ["name", "id", "created"]);
}

#[test]
fn repeated_parents_do_not_duplicate_fields() {
    let parent = base();
    let schema = RecordSchema::builder("User")
        .inherit(&parent)
        .inherit(&parent)
        .build()
        .unwrap();

    assert_eq!(schema.len(), 2);
}

#[test]
fn resolver_queries_by_name() {
    let schema = RecordSchema::builder("User")
        .field(FieldDescriptor::public("name").typed(ScalarType::String))
        .field(FieldDescriptor::public("nick").optional(ScalarType::String))
        .field(FieldDescriptor::public("meta"))
        .build()
        .unwrap();

    assert_eq!(schema.is_nullable("name"), Some(false));
    assert_eq!(schema.is_nullable("nick"), Some(true));
    assert_eq!(schema.is_nullable("meta"), Some(false));
    assert_eq!(schema.is_nullable("missing"), None);

    assert_eq!(schema.declared_type("nick"), Some(Some(ScalarType::String)));
    assert_eq!(schema.declared_type("meta"), Some(None));
    assert_eq!(schema.declared_type("missing"), None);
}

#[test]
fn cached_schema_is_built_once() {
    static CELL: OnceLock<RecordSchema> = OnceLock::new();

    let first = cached(&CELL, base);
    let second = cached(&CELL, || panic!("schema rebuilt"));

    assert!(std::ptr::eq(first, second));
    assert_eq!(first.keys().all, ["id", "created"]);
}
