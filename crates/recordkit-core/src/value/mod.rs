mod json;
mod map;
mod wire;


use crate::types::ScalarType;

// re-exports
pub use map::Map;

///
/// Value
///
/// Loosely-typed input and output value. Every non-null variant maps onto
/// exactly one `ScalarType`, so category checks are a discriminant compare.
///
/// Null → absent-or-null payload; it has no scalar category.
///

#[derive(Clone, Debug, Default, PartialEq)]
#[remain::sorted]
pub enum Value {
    Bool(bool),
    Float(f64),
    Int(i64),
    /// Ordered sequence; elements are not validated against any schema.
    List(Vec<Self>),
    /// Ordered string-keyed object.
    Map(Map),
    #[default]
    Null,
    Text(String),
}

impl Value {
    /// Runtime category, or `None` for `Null`.
    #[must_use]
    pub const fn scalar_type(&self) -> Option<ScalarType> {
        match self {
            Self::Bool(_) => Some(ScalarType::Bool),
            Self::Float(_) => Some(ScalarType::Float),
            Self::Int(_) => Some(ScalarType::Int),
            Self::List(_) => Some(ScalarType::Array),
            Self::Map(_) => Some(ScalarType::Object),
            Self::Null => None,
            Self::Text(_) => Some(ScalarType::String),
        }
    }

    /// Label used in diagnostics; `"null"` for `Null`.
    #[must_use]
    pub const fn type_label(&self) -> &'static str {
        match self.scalar_type() {
            Some(ty) => ty.label(),
            None => "null",
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(v) => Some(v),
            _ => None,
        }
    }
}

//
// conversions
//

macro_rules! impl_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Map(v)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}
