//! Error types for environment variable binding

/// Errors that can occur while binding environment variables to a struct.
///
/// Three groups of failures share this enum:
/// - Annotation errors: a malformed or contradictory `#[env("...")]` tag
/// - Resolution errors: a required environment variable that is not set
/// - Coercion errors: a resolved value that cannot be converted into the
///   destination field's type, or a destination the binder cannot handle
///
/// Every error returned from a bind call is wrapped in [`Error::Field`] so
/// the caller can tell which field failed without inspecting internals.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The `#[env("...")]` annotation string is empty.
    #[error("empty tag")]
    EmptyTag,

    /// The annotation string has more than the three `name,default,required`
    /// parts.
    #[error("invalid tag value")]
    InvalidTagValue,

    /// The field is marked required but the annotation carries no variable
    /// name.
    #[error("missing name")]
    MissingName,

    /// The field is marked required and also carries a default value.
    /// The two are contradictory: a default would mask the missing variable.
    #[error("required not allowed with default value")]
    RequiredWithDefault,

    /// A required environment variable is not set.
    #[error("env {name} not found, but required")]
    NotFound {
        /// Resolved (prefixed, upper-cased) name of the missing variable
        name: String,
    },

    /// The resolved string could not be parsed into the field's type.
    #[error("cannot parse {value:?} as {type_name}: {message}")]
    Parse {
        /// The string value that failed to parse
        value: String,
        /// Destination type the parse was attempted for
        type_name: &'static str,
        /// Error message from the underlying parser
        message: String,
    },

    /// A fixed-size array destination received the wrong number of list
    /// elements.
    #[error("expected {expected} list elements, got {got}")]
    InvalidLength {
        /// Array length declared by the destination
        expected: usize,
        /// Number of delimited segments in the resolved value
        got: usize,
    },

    /// The destination field's type is outside the supported set
    /// (for example a map or a nested struct). Unsupported by design.
    #[error("has invalid type")]
    InvalidType,

    /// The destination field is a slot the binder cannot write, such as a
    /// borrowed `&T`.
    #[error("is not settable")]
    NotSettable,

    /// Any of the above, annotated with the declared name of the field that
    /// failed.
    #[error("field {field} {source}")]
    Field {
        /// Declared field name on the bound struct
        field: &'static str,
        /// Underlying cause
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a parse error for destination type `T` (used by the decoder)
    pub(crate) fn parse<T>(value: &str, message: impl std::fmt::Display) -> Self {
        Self::Parse {
            value: value.to_string(),
            type_name: std::any::type_name::<T>(),
            message: message.to_string(),
        }
    }

    /// Wrap an error with the declared field name (used by macro-generated code)
    #[doc(hidden)]
    pub fn field(field: &'static str, source: Error) -> Self {
        Self::Field {
            field,
            source: Box::new(source),
        }
    }
}
