use darling::{FromDeriveInput, FromField, FromMeta, ast::Data, util::Ignored};
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Expr, Generics, Ident, Type};

///
/// RecordInput
///

#[derive(FromDeriveInput)]
#[darling(attributes(record), supports(struct_named))]
pub struct RecordInput {
    pub ident: Ident,
    pub generics: Generics,
    pub data: Data<Ignored, RecordField>,

    #[darling(default)]
    pub name: Option<String>,
}

///
/// RecordField
///

#[derive(FromField)]
#[darling(attributes(record))]
pub struct RecordField {
    pub ident: Option<Ident>,
    pub ty: Type,
    pub vis: syn::Visibility,

    #[darling(default)]
    pub nullable: bool,

    #[darling(default)]
    pub default: Option<DefaultExpr>,

    #[darling(default)]
    pub visibility: Option<VisibilityArg>,

    #[darling(default)]
    pub rename: Option<String>,
}

///
/// DefaultExpr
///
/// Taken verbatim; a string literal stays a string literal.
///

pub struct DefaultExpr(pub Expr);

impl FromMeta for DefaultExpr {
    fn from_expr(expr: &Expr) -> darling::Result<Self> {
        Ok(Self(expr.clone()))
    }
}

///
/// VisibilityArg
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VisibilityArg {
    Public,
    Private,
    Protected,
}

impl VisibilityArg {
    /// Public for `pub`, private for no modifier, protected for any
    /// restricted form such as `pub(crate)`.
    pub const fn from_syn(vis: &syn::Visibility) -> Self {
        match vis {
            syn::Visibility::Public(_) => Self::Public,
            syn::Visibility::Restricted(_) => Self::Protected,
            syn::Visibility::Inherited => Self::Private,
        }
    }
}

impl FromMeta for VisibilityArg {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            "protected" => Ok(Self::Protected),
            _ => Err(darling::Error::unknown_value(value)),
        }
    }
}

impl ToTokens for VisibilityArg {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(match self {
            Self::Public => quote!(::recordkit::types::Visibility::Public),
            Self::Private => quote!(::recordkit::types::Visibility::Private),
            Self::Protected => quote!(::recordkit::types::Visibility::Protected),
        });
    }
}
