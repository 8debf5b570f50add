//! Bag tests.

use wayfinder_world::{Bag, Item, Lookup};

fn lamp() -> Item {
    Item::with_aliases("Brass Lamp", ["lamp", "lantern"])
}

#[test]
fn membership_by_any_alias_or_identity() {
    let lamp = lamp();
    let bag: Bag = [lamp.clone()].into_iter().collect();

    assert!(bag.contains("lamp"));
    assert!(bag.contains("LANTERN"));
    assert!(bag.contains("brass lamp"));
    assert!(bag.contains(&lamp));
    assert!(!bag.contains("torch"));
}

#[test]
fn equal_names_are_not_the_same_item() {
    let bag: Bag = [lamp()].into_iter().collect();
    let other = lamp();
    assert!(bag.contains(other.name()));
    assert!(!bag.contains(&other));
    assert!(!bag.contains(Lookup::Item(&other)));
}

#[test]
fn take_moves_items_between_bags() {
    let mut room: Bag = [lamp(), Item::new("rope")].into_iter().collect();
    let mut inventory = Bag::new();

    let taken = room.take("lantern").unwrap();
    assert!(inventory.insert(taken));

    assert!(!room.contains("lamp"));
    assert!(inventory.contains("lamp"));
    assert_eq!(room.len(), 1);
}

#[test]
fn take_missing_name_leaves_bag_alone() {
    let mut bag: Bag = [lamp()].into_iter().collect();
    let before = bag.clone();
    assert!(bag.take("sword").is_none());
    assert_eq!(bag, before);
}

#[test]
fn take_returns_first_matching_item() {
    let first = Item::with_aliases("red key", ["key"]);
    let second = Item::with_aliases("blue key", ["key"]);
    let mut bag: Bag = [first.clone(), second.clone()].into_iter().collect();

    assert_eq!(bag.take("key"), Some(first));
    assert_eq!(bag.take("key"), Some(second));
    assert!(bag.is_empty());
}

#[test]
fn iteration_follows_creation_order() {
    let items = [Item::new("a"), Item::new("b"), Item::new("c")];
    let bag: Bag = items.iter().rev().cloned().collect();
    let names: Vec<_> = bag.iter().map(Item::name).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn clones_are_independent() {
    let mut original: Bag = [lamp()].into_iter().collect();
    let copy = original.clone();
    original.insert(Item::new("rope"));
    assert_eq!(copy.len(), 1);
    assert_eq!(original.len(), 2);
}
