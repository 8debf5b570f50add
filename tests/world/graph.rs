//! Room graph tests.

use proptest::prelude::*;
use wayfinder_foundation::ErrorKind;
use wayfinder_world::{Directions, Item, Room, RoomGraph, RoomId};

fn graph_of(n: usize) -> (RoomGraph, Vec<RoomId>) {
    let mut graph = RoomGraph::new();
    let ids = (0..n)
        .map(|i| graph.add_room(Room::new(&format!("Room {i}"))))
        .collect();
    (graph, ids)
}

// =============================================================================
// Reciprocal Exits
// =============================================================================

#[test]
fn custom_direction_pairs_link_both_ways() {
    let (mut graph, ids) = graph_of(2);
    graph.declare_direction("up", "down").unwrap();
    graph.set_exit(ids[0], "down", ids[1]).unwrap();

    assert_eq!(graph.exit(ids[0], "down").unwrap(), Some(ids[1]));
    assert_eq!(graph.exit(ids[1], "up").unwrap(), Some(ids[0]));
    assert_eq!(graph.exits(ids[1]).unwrap(), vec!["up"]);
}

#[test]
fn relinking_leaves_no_one_way_exits() {
    let (mut graph, ids) = graph_of(3);
    graph.set_exit(ids[0], "north", ids[1]).unwrap();
    graph.set_exit(ids[0], "north", ids[2]).unwrap();

    assert_eq!(graph.exit(ids[0], "north").unwrap(), Some(ids[2]));
    assert_eq!(graph.exit(ids[2], "south").unwrap(), Some(ids[0]));
    assert_eq!(graph.exit(ids[1], "south").unwrap(), None);
}

#[test]
fn clearing_an_exit_clears_the_way_back() {
    let (mut graph, ids) = graph_of(2);
    graph.set_exit(ids[0], "east", ids[1]).unwrap();
    assert_eq!(graph.clear_exit(ids[1], "west").unwrap(), Some(ids[0]));
    assert_eq!(graph.exit(ids[0], "east").unwrap(), None);
}

// =============================================================================
// Direction Errors
// =============================================================================

#[test]
fn undeclared_direction_lookup_is_unknown() {
    let (graph, ids) = graph_of(1);
    let err = graph.exit(ids[0], "up").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownDirection(ref d) if d == "up"));
}

#[test]
fn undeclared_direction_assignment_changes_nothing() {
    let (mut graph, ids) = graph_of(2);
    graph.set_exit(ids[0], "north", ids[1]).unwrap();
    let before = graph.clone();

    let err = graph.set_exit(ids[0], "up", ids[1]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidDirection(_)));
    for id in &ids {
        assert_eq!(graph.exits(*id).unwrap(), before.exits(*id).unwrap());
    }
}

#[test]
fn foreign_room_handles_are_rejected() {
    let (mut small, small_ids) = graph_of(1);
    let (_, big_ids) = graph_of(5);
    let err = small.set_exit(small_ids[0], "north", big_ids[4]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RoomNotFound(4)));
    assert!(small.exits(small_ids[0]).unwrap().is_empty());
}

#[test]
fn foreign_handle_with_a_local_index_is_rejected() {
    let (mut small, small_ids) = graph_of(1);
    let (_, big_ids) = graph_of(5);
    let err = small.set_exit(small_ids[0], "north", big_ids[0]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RoomNotFound(0)));
    // no self-loop sneaks in through the matching index
    assert!(small.exits(small_ids[0]).unwrap().is_empty());
}

#[test]
fn direction_vocabularies_are_per_graph() {
    let mut one = RoomGraph::new();
    let two = RoomGraph::with_directions(Directions::default());
    one.declare_direction("up", "down").unwrap();
    assert!(one.directions().contains("up"));
    assert!(!two.directions().contains("up"));
}

#[test]
fn duplicate_direction_is_rejected() {
    let mut graph = RoomGraph::new();
    let err = graph.declare_direction("north", "up").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateDirection(_)));
    assert!(!graph.directions().contains("up"));
}

// =============================================================================
// Copies
// =============================================================================

#[test]
fn copied_rooms_have_independent_bags() {
    let template = Room::new("A plain cell.").with_items([Item::new("straw")].into_iter().collect());
    let mut graph = RoomGraph::new();
    let a = graph.add_room(template.clone());
    let b = graph.add_room(template);

    graph.room_mut(a).unwrap().items.insert(Item::new("key"));

    assert!(graph.room(a).unwrap().items.contains("key"));
    assert!(!graph.room(b).unwrap().items.contains("key"));
    assert!(graph.room(b).unwrap().items.contains("straw"));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn every_exit_has_a_way_back(
        links in prop::collection::vec((0usize..6, 0usize..4, 0usize..6), 0..40),
    ) {
        let (mut graph, ids) = graph_of(6);
        let dirs = ["north", "south", "east", "west"];
        for (from, dir, to) in links {
            graph.set_exit(ids[from], dirs[dir], ids[to]).unwrap();
        }

        for &room in &ids {
            for dir in graph.exits(room).unwrap() {
                let next = graph.exit(room, dir).unwrap().unwrap();
                let back = graph.directions().reverse_of(dir).unwrap();
                prop_assert_eq!(graph.exit(next, back).unwrap(), Some(room));
            }
        }
    }
}
