//! Values handed to a command handler.

use std::collections::BTreeMap;

use wayfinder_foundation::{Error, Result};

/// Named arguments for one handler invocation.
///
/// Each name is bound either to a word or to "no value" (a fixed argument
/// declared with [`Grammar::with_unset`](crate::Grammar::with_unset)).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Arguments {
    values: BTreeMap<String, Option<String>>,
}

impl Arguments {
    /// Creates an empty argument set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn bind(&mut self, name: impl Into<String>, value: Option<String>) {
        self.values.insert(name.into(), value);
    }

    /// Returns the word bound to `name`, or `None` if it is unbound or has no value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(Option::as_deref)
    }

    /// Returns true if `name` is bound, with or without a value.
    #[must_use]
    pub fn is_bound(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the word bound to `name`.
    ///
    /// # Errors
    ///
    /// Returns an internal error if `name` has no value.
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| Error::internal(format!("argument {name:?} has no value")))
    }

    /// Iterates over the bindings, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
