//! A collection of items, such as an inventory or the contents of a room.
//!
//! A [`Bag`] behaves like a set of item identities, but membership can also
//! be asked by name and [`Bag::take`] removes an item by name.
//!
//! Bags are backed by a persistent map, so cloning is cheap and the clone
//! is fully independent of the original.

use im::OrdMap;

use crate::item::{Item, ItemId};

/// What to look for in a bag: a name alias or a specific item.
#[derive(Clone, Copy, Debug)]
pub enum Lookup<'a> {
    /// Any item answering to this name.
    Name(&'a str),
    /// Exactly this item.
    Item(&'a Item),
}

impl<'a> From<&'a str> for Lookup<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a String> for Lookup<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a Item> for Lookup<'a> {
    fn from(item: &'a Item) -> Self {
        Self::Item(item)
    }
}

/// A set of items with name-or-identity lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bag {
    items: OrdMap<ItemId, Item>,
}

impl Bag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the bag holds an item matching the query.
    ///
    /// A name matches any item answering to it; an item matches only itself.
    pub fn contains<'q>(&self, query: impl Into<Lookup<'q>>) -> bool {
        match query.into() {
            Lookup::Name(name) => self.find(name).is_some(),
            Lookup::Item(item) => self.items.contains_key(&item.id()),
        }
    }

    /// Finds the first item answering to `name`, in iteration order.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.values().find(|item| item.answers_to(name))
    }

    /// Removes and returns the first item answering to `name`.
    ///
    /// Returns `None`, leaving the bag untouched, if nothing matches.
    pub fn take(&mut self, name: &str) -> Option<Item> {
        let id = self.find(name)?.id();
        self.items.remove(&id)
    }

    /// Adds an item. Returns false if that item was already present.
    pub fn insert(&mut self, item: Item) -> bool {
        self.items.insert(item.id(), item).is_none()
    }

    /// Removes exactly this item, if present.
    pub fn remove(&mut self, item: &Item) -> Option<Item> {
        self.items.remove(&item.id())
    }

    /// Iterates over the items in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Number of items in the bag.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl FromIterator<Item> for Bag {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

impl Extend<Item> for Bag {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a> IntoIterator for &'a Bag {
    type Item = &'a Item;
    type IntoIter = im::ordmap::Values<'a, ItemId, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}
