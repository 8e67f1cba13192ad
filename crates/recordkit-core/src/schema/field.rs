use crate::{
    schema::resolve::{TypeHint, nullability},
    types::{ScalarType, Visibility},
    value::Value,
};
use serde::Serialize;

///
/// FieldDescriptor
///
/// Schema metadata for one declared field. Descriptors are built with the
/// chained constructors below and are immutable once placed in a schema.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldDescriptor {
    name: String,
    visibility: Visibility,
    hint: TypeHint,
    nullable_marker: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<Value>,
}

impl FieldDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            visibility,
            hint: TypeHint::Untyped,
            nullable_marker: false,
            default: None,
        }
    }

    #[must_use]
    pub fn public(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Public)
    }

    #[must_use]
    pub fn private(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Private)
    }

    #[must_use]
    pub fn protected(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Protected)
    }

    //
    // declaration
    //

    /// Declare a single scalar type.
    #[must_use]
    pub fn typed(self, ty: ScalarType) -> Self {
        self.hint(TypeHint::Named(ty))
    }

    /// Declare a nullable-qualified scalar type.
    #[must_use]
    pub fn optional(self, ty: ScalarType) -> Self {
        self.hint(TypeHint::Optional(ty))
    }

    /// Declare a compound annotation.
    #[must_use]
    pub fn union(self, members: impl IntoIterator<Item = ScalarType>, nullable: bool) -> Self {
        self.hint(TypeHint::union(members, nullable))
    }

    #[must_use]
    pub fn hint(mut self, hint: TypeHint) -> Self {
        self.hint = hint;
        self
    }

    /// Set the explicit nullable marker, independent of the declared type.
    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.nullable_marker = true;
        self
    }

    /// Declare a default value. `Value::Null` is a valid declared default and
    /// still counts as having one.
    #[must_use]
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    //
    // accessors
    //

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub const fn type_hint(&self) -> &TypeHint {
        &self.hint
    }

    #[must_use]
    pub const fn has_nullable_marker(&self) -> bool {
        self.nullable_marker
    }

    #[must_use]
    pub const fn has_default(&self) -> bool {
        self.default.is_some()
    }

    #[must_use]
    pub const fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Declared scalar type, `None` when untyped or compound.
    #[must_use]
    pub const fn declared_type(&self) -> Option<ScalarType> {
        self.hint.declared_type()
    }

    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        nullability(&self.hint, self.nullable_marker)
    }
}
