//! Convenience builder for form-encoded request parameters.
//!
//! The v1 API takes its inputs as `application/x-www-form-urlencoded`
//! key/value pairs (query-string pairs for GET). This module provides a
//! lightweight helper for assembling those pairs from optional values,
//! reducing boilerplate in client crates.

use std::fmt::Display;

/// Builder for assembling form parameter pairs.
#[derive(Debug, Default, Clone)]
pub struct FormParams {
    pairs: Vec<(&'static str, String)>,
}

impl FormParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a required key/value pair.
    pub fn push<T>(&mut self, key: &'static str, value: T)
    where
        T: Display,
    {
        self.pairs.push((key, value.to_string()));
    }

    /// Append a key/value pair when the value is present.
    pub fn push_opt<T>(&mut self, key: &'static str, value: Option<T>)
    where
        T: Display,
    {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
    }

    /// Append a key/value pair when the string value is present and non-empty.
    ///
    /// The provider treats a present-but-empty key differently from an
    /// absent one, so optional free-text fields must be dropped entirely
    /// when empty.
    pub fn push_nonempty(&mut self, key: &'static str, value: Option<&str>) {
        if let Some(value) = value {
            if !value.is_empty() {
                self.pairs.push((key, value.to_string()));
            }
        }
    }

    /// Return the collected key/value pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
