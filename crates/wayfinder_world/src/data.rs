//! Building rooms and items from a TOML data file.
//!
//! The file has one table per entity kind, keyed by entity name:
//!
//! ```toml
//! [Room."Dark Room"]
//! description = "You are in a dark room."
//! label = "Dark Room"
//!
//! [Item."rusty mallet"]
//! aliases = ["mallet"]
//! weight = 3
//! ```
//!
//! Keys other than the fixed ones become attributes of the entity. Keys that
//! would shadow a built-in field or a direction are rejected.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;
use wayfinder_foundation::{Error, ErrorContext, ErrorKind, Result};

use crate::direction::Directions;
use crate::item::Item;
use crate::room::Room;
use crate::AttributeValue;

type Section = toml::Table;

/// Keys an item section may not use.
const ITEM_RESERVED: &[&str] = &["name", "id"];

#[derive(Debug, Default, Deserialize)]
struct RawData {
    #[serde(rename = "Room")]
    rooms: Option<BTreeMap<String, Section>>,
    #[serde(rename = "Item")]
    items: Option<BTreeMap<String, Section>>,
}

/// Entity definitions read from a data file.
///
/// The default value holds no data; building entities from it fails with
/// `NoDataLoaded`.
#[derive(Debug, Default)]
pub struct AdventureData {
    source: String,
    raw: RawData,
    loaded: bool,
}

impl AdventureData {
    /// Reads and parses a data file.
    ///
    /// # Errors
    ///
    /// Returns `DataFileNotFound` if the file does not exist and
    /// `MalformedData` if it is not valid TOML of the expected shape.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                Error::data_file_not_found(path)
            } else {
                Error::from(e).with_frame(format!("reading {}", path.display()))
            }
        })?;
        Self::parse(&text, &path.display().to_string())
    }

    /// Parses data from a string; `source` names it in error messages.
    ///
    /// # Errors
    ///
    /// Returns `MalformedData` if the text is not valid TOML of the expected shape.
    pub fn parse(text: &str, source: &str) -> Result<Self> {
        let raw: RawData = toml::from_str(text).map_err(|e| {
            Error::new(ErrorKind::MalformedData {
                source_name: source.to_string(),
                message: e.message().to_string(),
            })
        })?;
        info!(
            "loaded adventure data from {source}: {} rooms, {} items",
            raw.rooms.as_ref().map_or(0, BTreeMap::len),
            raw.items.as_ref().map_or(0, BTreeMap::len),
        );
        Ok(Self {
            source: source.to_string(),
            raw,
            loaded: true,
        })
    }

    /// Where this data came from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Names of all rooms defined in the data.
    pub fn room_names(&self) -> impl Iterator<Item = &str> {
        self.raw.rooms.iter().flat_map(|rooms| rooms.keys().map(String::as_str))
    }

    /// Names of all items defined in the data.
    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.raw.items.iter().flat_map(|items| items.keys().map(String::as_str))
    }

    /// Builds the room named `name`.
    ///
    /// `description` is mandatory and `label` is optional; any other key
    /// becomes an attribute unless it names a direction or a built-in field.
    ///
    /// # Errors
    ///
    /// Returns `NoDataLoaded`, `MissingSection`, `MissingEntity`, `MissingField`,
    /// `AttributeConflict`, or `MalformedData` for a value of the wrong type.
    pub fn room(&self, name: &str, directions: &Directions) -> Result<Room> {
        self.build_room(name, directions)
            .map_err(|e| self.locate(e, "Room", name))
    }

    fn build_room(&self, name: &str, directions: &Directions) -> Result<Room> {
        let section = self.section(self.raw.rooms.as_ref(), "Room", name)?;

        let description = match section.get("description") {
            Some(value) => self.expect_str(value, "Room", name, "description")?,
            None => {
                return Err(Error::new(ErrorKind::MissingField {
                    kind: "Room".to_string(),
                    name: name.to_string(),
                    field: "description".to_string(),
                }));
            }
        };
        let mut room = Room::new(description);

        for (key, value) in section {
            match key.as_str() {
                "description" => {}
                "label" => {
                    let label = self.expect_str(value, "Room", name, "label")?;
                    room.set_label(Some(label.to_string()));
                }
                k if Room::RESERVED.contains(&k) || directions.contains(k) => {
                    return Err(conflict("Room", name, key));
                }
                _ => {
                    room.set_attribute(key.clone(), value.clone());
                }
            }
        }

        debug!("built room {name:?} with {} attributes", room.attributes().len());
        Ok(room)
    }

    /// Builds the item named `name`.
    ///
    /// The optional `aliases` list is lowercased and merged after the name;
    /// any other key becomes an attribute.
    ///
    /// # Errors
    ///
    /// Returns `NoDataLoaded`, `MissingSection`, `MissingEntity`, `AttributeConflict`, or
    /// `MalformedData` for a value of the wrong type.
    pub fn item(&self, name: &str) -> Result<Item> {
        self.build_item(name).map_err(|e| self.locate(e, "Item", name))
    }

    fn build_item(&self, name: &str) -> Result<Item> {
        let section = self.section(self.raw.items.as_ref(), "Item", name)?;

        let aliases = match section.get("aliases") {
            None => Vec::new(),
            Some(AttributeValue::Array(values)) => values
                .iter()
                .map(|v| self.expect_str(v, "Item", name, "aliases").map(str::to_string))
                .collect::<Result<Vec<_>>>()?,
            Some(_) => return Err(self.malformed("Item", name, "aliases", "a list of strings")),
        };
        let mut item = Item::with_aliases(name, aliases);

        for (key, value) in section {
            match key.as_str() {
                "aliases" => {}
                k if ITEM_RESERVED.contains(&k) => return Err(conflict("Item", name, key)),
                _ => item = item.with_attribute(key.clone(), value.clone()),
            }
        }

        debug!("built item {name:?} answering to {:?}", item.aliases());
        Ok(item)
    }

    fn section<'a>(
        &self,
        table: Option<&'a BTreeMap<String, Section>>,
        kind: &str,
        name: &str,
    ) -> Result<&'a Section> {
        if !self.loaded {
            return Err(Error::new(ErrorKind::NoDataLoaded));
        }
        let table = table.ok_or_else(|| Error::new(ErrorKind::MissingSection(kind.to_string())))?;
        table.get(name).ok_or_else(|| {
            Error::new(ErrorKind::MissingEntity {
                kind: kind.to_string(),
                name: name.to_string(),
            })
        })
    }

    fn expect_str<'v>(
        &self,
        value: &'v AttributeValue,
        kind: &str,
        name: &str,
        field: &str,
    ) -> Result<&'v str> {
        value
            .as_str()
            .ok_or_else(|| self.malformed(kind, name, field, "a string"))
    }

    fn malformed(&self, kind: &str, name: &str, field: &str, expected: &str) -> Error {
        Error::new(ErrorKind::MalformedData {
            source_name: self.source.clone(),
            message: format!("{field:?} in [{kind}.\"{name}\"] must be {expected}"),
        })
    }

    fn locate(&self, err: Error, kind: &str, name: &str) -> Error {
        let context = err
            .context
            .clone()
            .unwrap_or_else(ErrorContext::new)
            .with_source(self.source.clone())
            .with_frame(format!("loading {kind} {name:?}"));
        err.with_context(context)
    }
}

fn conflict(kind: &str, name: &str, key: &str) -> Error {
    Error::new(ErrorKind::AttributeConflict {
        kind: kind.to_string(),
        name: name.to_string(),
        key: key.to_string(),
    })
}
