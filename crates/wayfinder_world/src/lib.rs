//! Room graph, items, bags, and world data loading for Wayfinder.
//!
//! This crate provides:
//! - [`Directions`] - The direction vocabulary and its reverse pairs
//! - [`RoomGraph`] - Rooms connected by exits that always have a way back
//! - [`Item`] - Objects with a stable identity and name aliases
//! - [`Bag`] - A set of items searchable by name or by identity
//! - [`AdventureData`] - Rooms and items built from a TOML data file

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bag;
pub mod data;
pub mod direction;
pub mod item;
pub mod room;

use std::collections::BTreeMap;

pub use bag::{Bag, Lookup};
pub use data::AdventureData;
pub use direction::Directions;
pub use item::{Item, ItemId};
pub use room::{Room, RoomGraph, RoomId};

/// A value attached to a room or item beyond its fixed fields.
pub use toml::Value as AttributeValue;

/// Extra attributes of an entity, keyed by name.
pub type Attributes = BTreeMap<String, AttributeValue>;
