//! Items with identity and name aliases.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{AttributeValue, Attributes};

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique item identity.
///
/// Two items are the same entity exactly when their ids are equal,
/// regardless of their names.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    fn next() -> Self {
        Self(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw identity value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// An object that can be referred to by a number of names.
///
/// Cloning an `Item` yields another handle to the same entity.
#[derive(Clone, Debug)]
pub struct Item {
    id: ItemId,
    name: String,
    /// Lowercased aliases, primary name first, without duplicates.
    aliases: Vec<String>,
    attributes: Attributes,
}

impl Item {
    /// Creates a new item known only by its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_aliases(name, std::iter::empty::<&str>())
    }

    /// Creates a new item known by its name and the given aliases.
    #[must_use]
    pub fn with_aliases<I, S>(name: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        let mut all = vec![name.to_lowercase()];
        for alias in aliases {
            let alias = alias.as_ref().to_lowercase();
            if !all.contains(&alias) {
                all.push(alias);
            }
        }
        Self {
            id: ItemId::next(),
            name,
            aliases: all,
            attributes: Attributes::new(),
        }
    }

    /// Sets an extra attribute. Intended for use while building the item.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// This item's identity.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// The primary name, as declared.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All aliases, lowercased, primary name first.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Returns true if `word` is one of this item's aliases (case-insensitive).
    #[must_use]
    pub fn answers_to(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.aliases.iter().any(|alias| *alias == word)
    }

    /// Returns an extra attribute.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// All extra attributes.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
