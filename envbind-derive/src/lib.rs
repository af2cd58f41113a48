//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod attrs;
mod kind;

use kind::Kind;

/// `EnvBind` derive macro
///
/// Implements the `envbind::EnvBind` trait for a struct with named fields,
/// binding each field carrying an `#[env("...")]` annotation. Fields without
/// the annotation are skipped.
///
/// # Annotation
///
/// `#[env("<name>[,<default>][,<required>]")]` — see the `envbind` crate
/// documentation for the grammar and resolution rules.
#[proc_macro_derive(EnvBind, attributes(env))]
pub fn derive_env_bind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(
                    &input,
                    "EnvBind only supports structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(&input, "EnvBind only supports structs")
                .to_compile_error()
                .into();
        }
    };

    // One block per annotated field, in declaration order. The first error
    // aborts the bind; fields assigned before it keep their values.
    let field_binds = fields.iter().filter_map(|field| {
        let tag = match attrs::tag_of(field) {
            Ok(Some(tag)) => tag,
            Ok(None) => return None,
            Err(err) => return Some(err.to_compile_error()),
        };

        let field_ident = field.ident.as_ref().unwrap();
        let field_name = field_ident.to_string();

        // Rejections go through `Err(..)?` rather than `return` so code for
        // the fields behind them is not flagged unreachable.
        Some(match kind::classify(&field.ty) {
            Kind::Value { list } => quote! {
                {
                    let tag = ::envbind::tag::Tag::resolve(_config, #tag, #list)
                        .map_err(|e| ::envbind::Error::field(#field_name, e))?;
                    _config
                        .decoder()
                        .decode(&mut self.#field_ident, tag.value())
                        .map_err(|e| ::envbind::Error::field(#field_name, e))?;
                }
            },
            Kind::Borrowed => quote! {
                {
                    ::envbind::tag::Tag::resolve(_config, #tag, false)
                        .map_err(|e| ::envbind::Error::field(#field_name, e))?;
                    ::std::result::Result::<(), ::envbind::Error>::Err(::envbind::Error::field(
                        #field_name,
                        ::envbind::Error::NotSettable,
                    ))?;
                }
            },
            Kind::Unsupported => quote! {
                {
                    ::envbind::tag::Tag::resolve(_config, #tag, false)
                        .map_err(|e| ::envbind::Error::field(#field_name, e))?;
                    ::std::result::Result::<(), ::envbind::Error>::Err(::envbind::Error::field(
                        #field_name,
                        ::envbind::Error::InvalidType,
                    ))?;
                }
            },
        })
    });

    let expanded = quote! {
        impl #impl_generics ::envbind::EnvBind for #struct_name #ty_generics #where_clause {
            fn bind_fields(
                &mut self,
                _config: &::envbind::Config,
            ) -> ::std::result::Result<(), ::envbind::Error> {
                #(#field_binds)*
                ::std::result::Result::Ok(())
            }
        }
    };

    TokenStream::from(expanded)
}
