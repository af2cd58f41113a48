//! Attribute extraction for `#[env("...")]` annotations.
//!
//! The annotation payload is a single string literal carrying the
//! `name[,default[,required]]` grammar; its parts are resolved at runtime
//! against the active configuration, so extraction here only pulls the
//! literal out of the attribute.

use syn::{Field, LitStr};

/// Extract the raw annotation string from a struct field.
///
/// Returns `Ok(None)` for fields without an `#[env(...)]` attribute (such
/// fields are skipped by the binder) and an error for an attribute whose
/// payload is not a single string literal, so the derive can surface a
/// compile error on the offending span.
pub fn tag_of(field: &Field) -> Result<Option<String>, syn::Error> {
    for attr in &field.attrs {
        if !attr.path().is_ident("env") {
            continue;
        }

        let tag: LitStr = attr.parse_args()?;
        return Ok(Some(tag.value()));
    }

    Ok(None)
}
