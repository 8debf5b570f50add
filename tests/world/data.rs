//! Building worlds from data files.

use std::fs;

use wayfinder_foundation::{ErrorKind, Phase};
use wayfinder_world::{AdventureData, RoomGraph};

const WORLD: &str = r#"
[Room."Dark Room"]
description = "You are in a dark room."
label = "Dark Room"

[Room."Valley"]
description = """
    You are in a valley.
"""
wind = "gusty"

[Item."rusty mallet"]
aliases = ["mallet"]
"#;

fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("wayfinder-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_rooms_and_items_from_file() {
    let path = temp_file("world.toml", WORLD);
    let data = AdventureData::load(&path).unwrap();

    let mut graph = RoomGraph::new();
    let dark = data.room("Dark Room", graph.directions()).unwrap();
    let dark = graph.add_room(dark);
    let valley = data.room("Valley", graph.directions()).unwrap();
    let valley = graph.add_room(valley);
    graph.set_exit(dark, "north", valley).unwrap();
    graph.room_mut(valley).unwrap().items.insert(data.item("rusty mallet").unwrap());

    let valley_room = graph.room(valley).unwrap();
    assert_eq!(valley_room.description(), "You are in a valley.");
    assert_eq!(valley_room.label(), None);
    assert_eq!(valley_room.attribute("wind").and_then(|v| v.as_str()), Some("gusty"));
    assert!(valley_room.items.contains("mallet"));
    assert_eq!(graph.exit(valley, "south").unwrap(), Some(dark));
}

#[test]
fn missing_file_and_bad_content_are_distinct() {
    let missing = AdventureData::load("/definitely/not/here/world.toml").unwrap_err();
    assert!(matches!(missing.kind, ErrorKind::DataFileNotFound(_)));

    let path = temp_file("broken.toml", "[Room.\"Dark Room\"\ndescription = 1");
    let broken = AdventureData::load(&path).unwrap_err();
    assert!(matches!(broken.kind, ErrorKind::MalformedData { .. }));
    assert_eq!(broken.phase(), Phase::Turn);
}

#[test]
fn missing_description_names_the_field() {
    let data = AdventureData::parse("[Room.Attic]\nlabel = \"Attic\"\n", "attic.toml").unwrap();
    let err = data.room("Attic", &RoomGraph::new().directions().clone()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingField { ref field, .. } if field == "description"));
    assert!(err.to_string().contains("description"));
}

#[test]
fn declared_direction_names_conflict() {
    let mut graph = RoomGraph::new();
    graph.declare_direction("up", "down").unwrap();
    let data = AdventureData::parse(
        "[Room.Stairs]\ndescription = \"Stairs.\"\nup = \"attic\"\n",
        "stairs.toml",
    )
    .unwrap();

    let err = data.room("Stairs", graph.directions()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::AttributeConflict { ref key, .. } if key == "up"));

    // The same key is fine where "up" is not a direction.
    assert!(data.room("Stairs", RoomGraph::new().directions()).is_ok());
}

#[test]
fn missing_section_and_entity() {
    let data = AdventureData::parse(WORLD, "world.toml").unwrap();
    let err = data.item("lamp").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingEntity { .. }));

    let rooms_only = AdventureData::parse("[Room.A]\ndescription = \"A.\"\n", "a.toml").unwrap();
    let err = rooms_only.item("lamp").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingSection(ref kind) if kind == "Item"));
}
