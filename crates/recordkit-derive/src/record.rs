use crate::attr::{RecordField, RecordInput, VisibilityArg};
use darling::FromDeriveInput;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Error};

// derive_record
pub fn derive_record(input: TokenStream) -> TokenStream {
    match expand(input) {
        Ok(tokens) => tokens,
        Err(err) => err.write_errors(),
    }
}

fn expand(input: TokenStream) -> darling::Result<TokenStream> {
    let input: DeriveInput = syn::parse2(input)?;
    let record = RecordInput::from_derive_input(&input)?;

    if !record.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &record.generics,
            "Record cannot be derived for generic structs",
        )
        .into());
    }

    let ident = &record.ident;
    let record_name = record.name.clone().unwrap_or_else(|| ident.to_string());
    let fields = record
        .data
        .take_struct()
        .map(|fields| fields.fields)
        .unwrap_or_default();

    let mut errors = darling::Error::accumulator();
    let mut names: Vec<String> = Vec::with_capacity(fields.len());
    for field in &fields {
        let name = field_name(field);
        if name.is_empty() {
            errors.push(
                darling::Error::custom("record field name must not be empty")
                    .with_span(&field.ident),
            );
        } else if names.contains(&name) {
            errors.push(
                darling::Error::custom(format!("duplicate record field name '{name}'"))
                    .with_span(&field.ident),
            );
        }
        names.push(name);
    }
    errors.finish()?;

    let descriptors = fields.iter().zip(&names).map(|(field, name)| descriptor(field, name));
    let nullable_checks = fields.iter().filter(|f| f.nullable).map(nullable_check);

    let idents: Vec<_> = fields.iter().filter_map(|f| f.ident.as_ref()).collect();
    let types: Vec<_> = fields.iter().map(|f| &f.ty).collect();

    Ok(quote! {
        #(#nullable_checks)*

        impl ::recordkit::traits::RecordType for #ident {
            fn schema() -> &'static ::recordkit::schema::RecordSchema {
                static SCHEMA: ::std::sync::OnceLock<::recordkit::schema::RecordSchema> =
                    ::std::sync::OnceLock::new();

                ::recordkit::schema::cached(&SCHEMA, || {
                    ::recordkit::schema::RecordSchema::new_unchecked(
                        #record_name,
                        ::std::vec![#(#descriptors),*],
                    )
                })
            }

            fn from_values(
                values: ::std::vec::Vec<::recordkit::value::Value>,
            ) -> ::std::result::Result<Self, ::recordkit::validate::ValidationError> {
                let mut values = values.into_iter();

                ::std::result::Result::Ok(Self {
                    #(
                        #idents: <#types as ::recordkit::traits::FieldValue>::from_value(
                            #names,
                            values.next().unwrap_or_default(),
                        )?,
                    )*
                })
            }

            fn to_values(&self) -> ::std::vec::Vec<::recordkit::value::Value> {
                ::std::vec![
                    #(<#types as ::recordkit::traits::FieldValue>::to_value(&self.#idents)),*
                ]
            }
        }
    })
}

// External name: the rename if present, else the Rust identifier.
fn field_name(field: &RecordField) -> String {
    field.rename.clone().unwrap_or_else(|| {
        field
            .ident
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    })
}

fn descriptor(field: &RecordField, name: &str) -> TokenStream {
    let ty = &field.ty;
    let visibility = field
        .visibility
        .unwrap_or_else(|| VisibilityArg::from_syn(&field.vis));

    let nullable = field.nullable.then(|| quote!(.nullable()));
    let default = field.default.as_ref().map(|default| {
        let expr = &default.0;
        quote! {
            .default({
                let default: #ty = ::core::convert::Into::into(#expr);
                <#ty as ::recordkit::traits::FieldValue>::to_value(&default)
            })
        }
    });

    quote! {
        ::recordkit::schema::FieldDescriptor::new(#name, #visibility)
            .hint(<#ty as ::recordkit::traits::FieldValue>::type_hint())
            #nullable
            #default
    }
}

// The explicit marker only makes sense on a type that can hold null.
fn nullable_check(field: &RecordField) -> TokenStream {
    let ty = &field.ty;
    let label = field
        .ident
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    let message = format!("field `{label}` is marked nullable but its type cannot hold null");

    quote! {
        const _: () = ::core::assert!(
            <#ty as ::recordkit::traits::FieldValue>::NULLABLE,
            #message
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(input: TokenStream) -> String {
        derive_record(input).to_string()
    }

    #[test]
    fn named_struct_expands_to_record_type() {
        let out = expand_str(quote! {
            pub struct User {
                pub id: i64,
                #[record(nullable)]
                nickname: Option<String>,
                #[record(default = 10, rename = "limit")]
                pub(crate) max: i64,
            }
        });

        assert!(out.contains("RecordType for User"));
        assert!(out.contains("\"limit\""));
        assert!(out.contains("Visibility :: Protected"));
        assert!(out.contains("Visibility :: Private"));
        assert!(out.contains(". nullable ()"));
        assert!(out.contains("field `nickname` is marked nullable"));
    }

    #[test]
    fn string_defaults_stay_literals() {
        let out = expand_str(quote! {
            struct Greeting {
                #[record(default = "hello")]
                text: String,
            }
        });

        assert!(out.contains("\"hello\""));
    }

    #[test]
    fn tuple_structs_are_rejected() {
        let out = expand_str(quote! { struct Point(i64, i64); });
        assert!(out.contains("compile_error"));
    }

    #[test]
    fn enums_are_rejected() {
        let out = expand_str(quote! { enum Shape { Circle } });
        assert!(out.contains("compile_error"));
    }

    #[test]
    fn generic_structs_are_rejected() {
        let out = expand_str(quote! { struct Wrapper<T> { inner: T } });
        assert!(out.contains("compile_error"));
        assert!(out.contains("generic"));
    }

    #[test]
    fn duplicate_names_after_rename_are_rejected() {
        let out = expand_str(quote! {
            struct Clash {
                a: i64,
                #[record(rename = "a")]
                b: i64,
            }
        });

        assert!(out.contains("compile_error"));
        assert!(out.contains("duplicate record field name"));
    }

    #[test]
    fn empty_rename_is_rejected() {
        let out = expand_str(quote! {
            struct Empty {
                #[record(rename = "")]
                pub a: i64,
            }
        });

        assert!(out.contains("compile_error"));
        assert!(out.contains("must not be empty"));
        assert!(!out.contains("RecordType for Empty"));
    }

    #[test]
    fn unknown_visibility_is_rejected() {
        let out = expand_str(quote! {
            struct Bad {
                #[record(visibility = "internal")]
                a: i64,
            }
        });

        assert!(out.contains("compile_error"));
    }

    #[test]
    fn struct_name_can_be_overridden() {
        let out = expand_str(quote! {
            #[record(name = "people.Person")]
            struct Person {
                name: String,
            }
        });

        assert!(out.contains("\"people.Person\""));
    }
}
