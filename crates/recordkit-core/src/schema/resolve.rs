//! Type resolution for field descriptors.
//!
//! A field's nullability comes from two independent sources: an explicit
//! nullable marker, and a nullable-qualified type hint. They are merged here
//! and nowhere else.

use crate::types::ScalarType;
use serde::{Deserialize, Serialize};

///
/// TypeHint
///
/// Declared type annotation of a field.
///
/// Untyped   → no annotation; accepts any non-null value.
/// Named     → a single scalar type (`int`).
/// Optional  → a nullable-qualified scalar type (`?int`, `Option<i64>`).
/// Union     → a compound annotation; only its nullability is honoured.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", content = "type", rename_all = "snake_case")]
pub enum TypeHint {
    #[default]
    Untyped,
    Named(ScalarType),
    Optional(ScalarType),
    Union {
        members: Vec<ScalarType>,
        nullable: bool,
    },
}

impl TypeHint {
    /// Build a union annotation, collapsing it to a simple form when it only
    /// names a single member.
    #[must_use]
    pub fn union(members: impl IntoIterator<Item = ScalarType>, nullable: bool) -> Self {
        let mut unique: Vec<ScalarType> = Vec::new();
        for member in members {
            if !unique.contains(&member) {
                unique.push(member);
            }
        }

        match (unique.as_slice(), nullable) {
            ([single], false) => Self::Named(*single),
            ([single], true) => Self::Optional(*single),
            _ => Self::Union {
                members: unique,
                nullable,
            },
        }
    }

    /// The same annotation, qualified as accepting null.
    #[must_use]
    pub fn into_nullable(self) -> Self {
        match self {
            Self::Named(ty) | Self::Optional(ty) => Self::Optional(ty),
            Self::Untyped => Self::Union {
                members: Vec::new(),
                nullable: true,
            },
            Self::Union { members, .. } => Self::Union {
                members,
                nullable: true,
            },
        }
    }

    /// Single declared scalar type; compound and missing annotations yield
    /// `None`.
    #[must_use]
    pub const fn declared_type(&self) -> Option<ScalarType> {
        match self {
            Self::Named(ty) | Self::Optional(ty) => Some(*ty),
            Self::Untyped | Self::Union { .. } => None,
        }
    }

    #[must_use]
    pub const fn admits_null(&self) -> bool {
        match self {
            Self::Optional(_) => true,
            Self::Union { nullable, .. } => *nullable,
            Self::Untyped | Self::Named(_) => false,
        }
    }
}

/// Whether a field accepts null. Untyped fields are not implicitly nullable.
#[must_use]
pub const fn nullability(hint: &TypeHint, nullable_marker: bool) -> bool {
    nullable_marker || hint.admits_null()
}
