//! Parsing and resolution of `#[env("...")]` annotation strings

use std::env;

use crate::error::Error;
use crate::Config;

/// A resolved field annotation: `"<name>[,<default>][,<required>]"`.
///
/// Built once per annotated field per bind call. `value` is the string the
/// decoder ultimately receives: the environment value when one is set and
/// non-empty, otherwise the annotation's default.
#[derive(Debug)]
pub struct Tag {
    name: String,
    value: String,
    defvalue: String,
    required: bool,
}

impl Tag {
    /// Parse `raw` against `config` and resolve the effective value from the
    /// process environment.
    ///
    /// `is_list` reports whether the destination field's outermost type is a
    /// list; it controls the `;` rewrite in default values so list defaults
    /// stay separator-agnostic.
    pub fn resolve(config: &Config, raw: &str, is_list: bool) -> Result<Self, Error> {
        if raw.is_empty() {
            return Err(Error::EmptyTag);
        }

        let parts: Vec<&str> = raw.split(',').collect();
        if parts.len() > 3 {
            return Err(Error::InvalidTagValue);
        }

        let mut tag = Tag {
            name: String::new(),
            value: String::new(),
            defvalue: String::new(),
            required: false,
        };
        tag.set_name(&config.prefix, parts[0]);
        if let Some(defvalue) = parts.get(1) {
            tag.set_defvalue(&config.separator, defvalue, is_list);
        }
        if let Some(required) = parts.get(2) {
            tag.required = *required == "true";
        }

        tag.validate()?;
        tag.fetch()?;
        if tag.value.is_empty() {
            tag.value = tag.defvalue.clone();
        }
        Ok(tag)
    }

    /// The string to decode into the destination field.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The resolved (prefixed, upper-cased) environment variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, prefix: &str, name: &str) {
        if prefix.is_empty() {
            self.name = name.to_uppercase();
        } else {
            self.name = format!("{}_{}", prefix, name).to_uppercase();
        }
    }

    fn set_defvalue(&mut self, separator: &str, value: &str, is_list: bool) {
        if value.is_empty() {
            return;
        }

        self.defvalue = value.to_string();
        if is_list {
            // Literal list defaults use ; so they survive separator changes
            self.defvalue = self.defvalue.replace(';', separator);
        }
    }

    fn validate(&self) -> Result<(), Error> {
        if self.required && self.name.is_empty() {
            return Err(Error::MissingName);
        }

        if self.required && !self.defvalue.is_empty() {
            return Err(Error::RequiredWithDefault);
        }
        Ok(())
    }

    fn fetch(&mut self) -> Result<(), Error> {
        // A variable holding non-unicode bytes reads as unset.
        match env::var(&self.name) {
            Ok(value) => self.value = value,
            Err(_) if self.required => {
                return Err(Error::NotFound {
                    name: self.name.clone(),
                });
            }
            Err(_) => {}
        }
        Ok(())
    }
}
