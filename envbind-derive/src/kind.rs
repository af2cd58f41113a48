//! Structural classification of destination field types.
//!
//! The binder supports a closed set of destination types. Classification is
//! purely structural (the derive sees syntax, not resolved types): scalars
//! by name, `Vec`/`Option`/`Box` and fixed-size arrays by shape, recursing
//! into their element type. Type aliases are not resolved.

use syn::{GenericArgument, PathArguments, PathSegment, Type};

/// How the generated binder treats a field's destination type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A member of the supported coercion set. `list` reports whether the
    /// outermost type is a list, which drives the `;` rewrite in default
    /// values.
    Value { list: bool },
    /// A borrowed slot (`&T`) the binder cannot write.
    Borrowed,
    /// Outside the supported set (map, nested struct, tuple, ...).
    Unsupported,
}

/// Classify a field's declared type.
pub fn classify(ty: &Type) -> Kind {
    let ty = unwrap_group(ty);
    if let Type::Reference(_) = ty {
        return Kind::Borrowed;
    }

    if supported(ty) {
        Kind::Value { list: is_list(ty) }
    } else {
        Kind::Unsupported
    }
}

/// Whether the outermost type is a list. Indirection does not count:
/// `Option<Vec<T>>` is a pointer, not a list, so its defaults keep their
/// semicolons.
fn is_list(ty: &Type) -> bool {
    match ty {
        Type::Array(_) => true,
        Type::Path(path) => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Vec"),
        _ => false,
    }
}

const SCALARS: &[&str] = &[
    "bool", "String", "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize",
    "f32", "f64",
];

fn supported(ty: &Type) -> bool {
    match unwrap_group(ty) {
        Type::Array(array) => supported(&array.elem),
        Type::Path(path) if path.qself.is_none() => {
            let Some(segment) = path.path.segments.last() else {
                return false;
            };
            let ident = segment.ident.to_string();
            match ident.as_str() {
                "Vec" | "Option" | "Box" => inner_type(segment).is_some_and(supported),
                name => SCALARS.contains(&name) && segment.arguments.is_none(),
            }
        }
        _ => false,
    }
}

fn unwrap_group(ty: &Type) -> &Type {
    match ty {
        Type::Group(group) => unwrap_group(&group.elem),
        Type::Paren(paren) => unwrap_group(&paren.elem),
        _ => ty,
    }
}

fn inner_type(segment: &PathSegment) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
