//! Direction vocabulary.
//!
//! Every direction is declared together with its reverse, so that an exit
//! can always be mirrored by a way back.

use std::collections::BTreeMap;

use log::debug;
use wayfinder_foundation::{Error, ErrorKind, Result};

/// The set of declared directions and their reverses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directions {
    /// Direction name -> reverse direction name (both ways are present).
    reverse: BTreeMap<String, String>,
}

impl Default for Directions {
    /// The compass directions `north`/`south` and `east`/`west`.
    fn default() -> Self {
        let mut dirs = Self::empty();
        dirs.insert("north", "south");
        dirs.insert("east", "west");
        dirs
    }
}

impl Directions {
    /// Creates a vocabulary with no directions at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            reverse: BTreeMap::new(),
        }
    }

    /// Declares `forward` and `reverse` as a pair of opposite directions.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDirection` if either name is not made of lowercase
    /// letters only, and `DuplicateDirection` if either is already declared
    /// (or both names are the same). Nothing is declared on failure.
    pub fn declare(&mut self, forward: &str, reverse: &str) -> Result<()> {
        for name in [forward, reverse] {
            if !is_direction_word(name) {
                return Err(Error::invalid_direction(name).with_frame(
                    "declaring a direction: directions must be lowercase letters only".to_string(),
                ));
            }
            if self.contains(name) {
                return Err(Error::new(ErrorKind::DuplicateDirection(name.to_string())));
            }
        }
        if forward == reverse {
            return Err(Error::new(ErrorKind::DuplicateDirection(forward.to_string())));
        }

        debug!("declared direction pair {forward}/{reverse}");
        self.insert(forward, reverse);
        Ok(())
    }

    fn insert(&mut self, forward: &str, reverse: &str) {
        self.reverse.insert(forward.to_string(), reverse.to_string());
        self.reverse.insert(reverse.to_string(), forward.to_string());
    }

    /// Returns the reverse of a declared direction.
    #[must_use]
    pub fn reverse_of(&self, name: &str) -> Option<&str> {
        self.reverse.get(name).map(String::as_str)
    }

    /// Returns true if `name` is a declared direction.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.reverse.contains_key(name)
    }

    /// Iterates over every declared direction name, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.reverse.keys().map(String::as_str)
    }

    /// Number of declared directions (each pair counts twice).
    #[must_use]
    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    /// Returns true if no direction is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }
}

/// Non-empty and made only of lowercase letters, so it can be a command word.
fn is_direction_word(name: &str) -> bool {
    !name.is_empty() && name.chars().all(char::is_lowercase)
}
