use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// ScalarType
///
/// Runtime category of a non-null value and the set of types a field may
/// declare. Labels are stable and appear in validation messages.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    Array,
    Bool,
    Float,
    Int,
    Object,
    String,
}

impl ScalarType {
    pub const ALL: [Self; 6] = [
        Self::Int,
        Self::Float,
        Self::Bool,
        Self::String,
        Self::Array,
        Self::Object,
    ];

    /// Stable lowercase label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Bool => "bool",
            Self::Float => "float",
            Self::Int => "int",
            Self::Object => "object",
            Self::String => "string",
        }
    }

    /// Parse a label back into a scalar type.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.label() == label)
    }
}

impl Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

///
/// Visibility
///
/// Field visibility tag. Grouping by visibility decides construction order:
/// public fields first, then private, then protected.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Protected,
}

impl Visibility {
    /// Construction order.
    pub const ALL: [Self; 3] = [Self::Public, Self::Private, Self::Protected];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|vis| vis.label() == label)
    }
}

impl Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
