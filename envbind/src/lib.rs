//! Bind environment variables to struct fields with per-field annotations
//!
//! `envbind` loads process configuration declaratively: annotate each field
//! of a struct with the environment variable it comes from, then bind the
//! whole struct in one call. Values are converted from their string form
//! into the field's native type, including lists.
//!
//! # Features
//!
//! - **Declarative**: one `#[env("...")]` annotation per field with
//!   `#[derive(EnvBind)]`
//! - **Typed**: booleans, strings, integers of every width (with `0x`/`0o`
//!   base prefixes), floats, `Option`/`Box` indirection and lists of any of
//!   these
//! - **Defaults and required variables**: declared inside the annotation,
//!   with the contradiction between the two rejected up front
//! - **Prefixes**: a [`Config`] applies a common prefix to every variable
//!   name
//! - **Custom list separator**: defaults to `,`, overridable per [`Config`]
//!
//! # Annotation format
//!
//! `#[env("<name>[,<default>][,<required>]")]` — one to three positional,
//! comma-separated parts:
//!
//! - `name`: environment variable name; upper-cased, and prefixed as
//!   `PREFIX_NAME` when binding through a prefixed [`Config`]
//! - `default`: literal used when the variable is unset or empty; for list
//!   fields, `;` in the default stands for the list separator
//! - `required`: the literal `true` makes the variable mandatory; required
//!   fields cannot carry a default
//!
//! Fields without an `#[env(...)]` annotation are left untouched.
//!
//! # Example
//!
//! ```rust
//! use envbind::EnvBind;
//!
//! #[derive(Debug, Default, EnvBind)]
//! struct Settings {
//!     #[env("database_url,,true")]
//!     database_url: String,
//!
//!     #[env("port,8080")]
//!     port: u16,
//!
//!     #[env("peers,alpha;beta")]
//!     peers: Vec<String>,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! # std::env::set_var("DATABASE_URL", "postgres://localhost/db");
//! # std::env::remove_var("PORT");
//! # std::env::remove_var("PEERS");
//! let mut settings = Settings::default();
//! envbind::bind(&mut settings)?;
//! # assert_eq!(settings.database_url, "postgres://localhost/db");
//! # assert_eq!(settings.port, 8080);
//! # assert_eq!(settings.peers, vec!["alpha", "beta"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Prefixes and separators
//!
//! ```rust
//! use envbind::{Config, EnvBind};
//!
//! #[derive(Debug, Default, EnvBind)]
//! struct Settings {
//!     #[env("string")]
//!     string: String,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! # std::env::set_var("APP_STRING", "test");
//! // Reads APP_STRING instead of STRING
//! let mut settings = Settings::default();
//! Config::new("app").bind(&mut settings)?;
//! # assert_eq!(settings.string, "test");
//! # Ok(())
//! # }
//! ```

pub mod de;

mod error;

#[doc(hidden)]
pub mod tag;

pub use de::{Decode, Decoder};
pub use envbind_derive::EnvBind;
pub use error::Error;

// Re-export for demos and doctests
#[doc(hidden)]
pub use anyhow;

/// List separator used by default-constructed configurations.
pub const DEFAULT_LIST_SEPARATOR: &str = ",";

/// Long-lived binding configuration: a variable-name prefix and a list
/// separator.
///
/// The zero value ([`Config::default`]) means no prefix and the default
/// separator `,`; [`bind`] uses it. Changing the separator affects every
/// subsequent bind through the same instance and nothing else.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) prefix: String,
    pub(crate) separator: String,
    decoder: Decoder,
}

impl Default for Config {
    fn default() -> Self {
        Self::new("")
    }
}

impl Config {
    /// Create a configuration with the given prefix.
    ///
    /// A non-empty prefix turns every annotation name into `PREFIX_NAME`
    /// (upper-cased).
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            separator: DEFAULT_LIST_SEPARATOR.to_string(),
            decoder: Decoder::new(DEFAULT_LIST_SEPARATOR),
        }
    }

    /// Change the list separator for subsequent binds through this
    /// configuration.
    pub fn set_list_separator(&mut self, separator: impl Into<String>) {
        let separator = separator.into();
        self.decoder.separator = separator.clone();
        self.separator = separator;
    }

    /// The prefix applied to annotation names.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The separator used to split list values.
    pub fn list_separator(&self) -> &str {
        &self.separator
    }

    /// Bind environment variables into `target`'s annotated fields.
    ///
    /// Fields are processed in declaration order; the first failure aborts
    /// and is returned wrapped with the field's name. Fields assigned before
    /// the failure keep their values.
    pub fn bind<T: EnvBind>(&self, target: &mut T) -> Result<(), Error> {
        target.bind_fields(self)
    }

    /// The coercion engine for this configuration (used by macro-generated
    /// code).
    #[doc(hidden)]
    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }
}

/// Bind environment variables into `target` using the default configuration
/// (no prefix, `,` list separator).
pub fn bind<T: EnvBind>(target: &mut T) -> Result<(), Error> {
    Config::default().bind(target)
}

/// Implemented by `#[derive(EnvBind)]` on structs with named fields.
///
/// The derived implementation walks the struct's annotated fields, resolves
/// each annotation against the active [`Config`] and decodes the resolved
/// value into the field.
pub trait EnvBind {
    #[doc(hidden)]
    fn bind_fields(&mut self, config: &Config) -> Result<(), Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_zero_value() {
        let config = Config::default();
        assert_eq!(config.prefix(), "");
        assert_eq!(config.list_separator(), DEFAULT_LIST_SEPARATOR);
    }

    #[test]
    fn test_separator_propagates_to_decoder() {
        let mut config = Config::new("app");
        config.set_list_separator(";");
        assert_eq!(config.list_separator(), ";");
        assert_eq!(config.decoder().separator(), ";");
    }

    #[test]
    fn test_separator_isolated_per_config() {
        let mut first = Config::default();
        let second = Config::default();
        first.set_list_separator("|");
        assert_eq!(first.list_separator(), "|");
        assert_eq!(second.list_separator(), ",");
        assert_eq!(second.decoder().separator(), ",");
    }
}
