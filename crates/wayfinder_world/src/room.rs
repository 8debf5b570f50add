//! Rooms and the graph of exits between them.
//!
//! Exits are always reciprocal: assigning `a --north--> b` also assigns
//! `b --south--> a`, and any link that would be left pointing one way only
//! is detached in the same operation.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;
use wayfinder_foundation::{Error, ErrorKind, Result};

use crate::bag::Bag;
use crate::direction::Directions;
use crate::{AttributeValue, Attributes};

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

/// Handle to a room inside a [`RoomGraph`].
///
/// A handle is only valid for the graph that issued it (and clones of
/// that graph).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId {
    graph: u64,
    index: usize,
}

impl RoomId {
    /// Returns the index of this room within its graph.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

/// A location the player can be in.
///
/// Cloning a room yields an independent copy: its bag of items and its
/// attributes are not shared with the original. Exits live in the
/// [`RoomGraph`], so a clone starts out unconnected once added to a graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Room {
    description: String,
    label: Option<String>,
    /// Items lying in the room.
    pub items: Bag,
    attributes: Attributes,
}

impl Room {
    /// Keys that name built-in room fields and cannot be used as attributes.
    pub const RESERVED: &'static [&'static str] = &["description", "items", "exits", "exit"];

    /// Creates a room with the given description (surrounding whitespace is trimmed).
    #[must_use]
    pub fn new(description: &str) -> Self {
        Self {
            description: description.trim().to_string(),
            label: None,
            items: Bag::new(),
            attributes: Attributes::new(),
        }
    }

    /// Sets the display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Fills the room with items.
    #[must_use]
    pub fn with_items(mut self, items: Bag) -> Self {
        self.items = items;
        self
    }

    /// The room description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The display label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Replaces the display label.
    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    /// Returns a custom attribute.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Sets a custom attribute, returning the previous value.
    pub fn set_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        self.attributes.insert(key.into(), value.into())
    }

    /// All custom attributes.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// Rooms connected by named exits.
#[derive(Clone, Debug)]
pub struct RoomGraph {
    id: u64,
    rooms: Vec<Room>,
    /// Per room: direction -> neighbour.
    exits: Vec<BTreeMap<String, RoomId>>,
    directions: Directions,
}

impl Default for RoomGraph {
    fn default() -> Self {
        Self::with_directions(Directions::default())
    }
}

impl RoomGraph {
    /// Creates an empty graph using the compass directions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with the given direction vocabulary.
    #[must_use]
    pub fn with_directions(directions: Directions) -> Self {
        Self {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            rooms: Vec::new(),
            exits: Vec::new(),
            directions,
        }
    }

    /// The direction vocabulary of this graph.
    #[must_use]
    pub fn directions(&self) -> &Directions {
        &self.directions
    }

    /// Declares a new pair of opposite directions for every room.
    ///
    /// # Errors
    ///
    /// See [`Directions::declare`].
    pub fn declare_direction(&mut self, forward: &str, reverse: &str) -> Result<()> {
        self.directions.declare(forward, reverse)
    }

    /// Adds a room to the graph, with no exits.
    pub fn add_room(&mut self, room: Room) -> RoomId {
        let id = self.handle(self.rooms.len());
        self.rooms.push(room);
        self.exits.push(BTreeMap::new());
        id
    }

    /// Number of rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns true if the graph has no rooms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Iterates over every room with its handle.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, room)| (self.handle(i), room))
    }

    const fn handle(&self, index: usize) -> RoomId {
        RoomId {
            graph: self.id,
            index,
        }
    }

    fn owns(&self, id: RoomId) -> Result<usize> {
        if id.graph == self.id && id.index < self.rooms.len() {
            Ok(id.index)
        } else {
            Err(Error::new(ErrorKind::RoomNotFound(id.index)))
        }
    }

    /// Borrows a room.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if the handle is not from this graph.
    pub fn room(&self, id: RoomId) -> Result<&Room> {
        let index = self.owns(id)?;
        Ok(&self.rooms[index])
    }

    /// Mutably borrows a room.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if the handle is not from this graph.
    pub fn room_mut(&mut self, id: RoomId) -> Result<&mut Room> {
        let index = self.owns(id)?;
        Ok(&mut self.rooms[index])
    }

    fn check(&self, id: RoomId) -> Result<()> {
        self.owns(id).map(|_| ())
    }

    /// Connects `from` to `to` in `direction`, and `to` back to `from` in the
    /// reverse direction.
    ///
    /// Either both links are written or, on error, nothing changes. Links
    /// that the new pair would leave one-way are removed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDirection` for an undeclared direction and
    /// `RoomNotFound` for a handle from another graph.
    pub fn set_exit(&mut self, from: RoomId, direction: &str, to: RoomId) -> Result<()> {
        let reverse = self
            .directions
            .reverse_of(direction)
            .ok_or_else(|| Error::invalid_direction(direction))?
            .to_string();
        self.check(from)?;
        self.check(to)?;

        // from's old neighbour no longer leads back to from
        if let Some(old) = self.exits[from.index].get(direction).copied() {
            if self.exits[old.index].get(&reverse) == Some(&from) {
                self.exits[old.index].remove(&reverse);
            }
        }
        // whatever `to` used to lead back to no longer leads to `to`
        if let Some(prev) = self.exits[to.index].get(&reverse).copied() {
            if self.exits[prev.index].get(direction) == Some(&to) {
                self.exits[prev.index].remove(direction);
            }
        }

        self.exits[from.index].insert(direction.to_string(), to);
        self.exits[to.index].insert(reverse.clone(), from);
        debug!(
            "linked room #{} {direction} -> #{} ({reverse} back)",
            from.index, to.index
        );
        Ok(())
    }

    /// Removes the exit of `room` in `direction` together with its way back.
    ///
    /// Returns the former neighbour.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDirection` for an undeclared direction and
    /// `RoomNotFound` for a handle from another graph.
    pub fn clear_exit(&mut self, room: RoomId, direction: &str) -> Result<Option<RoomId>> {
        let reverse = self
            .directions
            .reverse_of(direction)
            .ok_or_else(|| Error::invalid_direction(direction))?
            .to_string();
        self.check(room)?;

        let old = self.exits[room.index].remove(direction);
        if let Some(old) = old {
            if self.exits[old.index].get(&reverse) == Some(&room) {
                self.exits[old.index].remove(&reverse);
            }
        }
        Ok(old)
    }

    /// Returns the neighbour of `room` in `direction`, if any.
    ///
    /// # Errors
    ///
    /// Returns `UnknownDirection` for an undeclared direction and
    /// `RoomNotFound` for a handle from another graph.
    pub fn exit(&self, room: RoomId, direction: &str) -> Result<Option<RoomId>> {
        if !self.directions.contains(direction) {
            return Err(Error::unknown_direction(direction));
        }
        self.check(room)?;
        Ok(self.exits[room.index].get(direction).copied())
    }

    /// Returns the directions in which `room` has an exit, sorted.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` for a handle from another graph.
    pub fn exits(&self, room: RoomId) -> Result<Vec<&str>> {
        self.check(room)?;
        Ok(self.exits[room.index].keys().map(String::as_str).collect())
    }
}
