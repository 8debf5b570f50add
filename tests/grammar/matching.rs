//! Matching player input against registered commands.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use wayfinder_foundation::Result;
use wayfinder_grammar::{Arguments, CommandRegistry, Context, Dispatch, Grammar};

/// Handler calls recorded as (handler name, arguments).
#[derive(Default)]
struct Calls(Vec<(&'static str, Vec<(String, Option<String>)>)>);

impl Calls {
    fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(|(name, _)| *name).collect()
    }

    fn last_arg(&self, key: &str) -> Option<String> {
        let (_, args) = self.0.last()?;
        args.iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.clone())
    }
}

fn handler(name: &'static str) -> impl FnMut(&mut Calls, &Arguments) -> Result<()> {
    move |calls: &mut Calls, args: &Arguments| {
        let args = args
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect();
        calls.0.push((name, args));
        Ok(())
    }
}

fn run(registry: &mut CommandRegistry<Calls>, context: &Context, line: &str) -> (Dispatch, Calls) {
    let mut calls = Calls::default();
    let outcome = registry.dispatch(line, context, &mut calls).unwrap();
    (outcome, calls)
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn specific_pattern_registered_first_wins() {
    let mut registry = CommandRegistry::new();
    registry.when("take rusty mallet", &[], handler("mallet")).unwrap();
    registry.when("take ITEM", &["item"], handler("take")).unwrap();

    let (_, calls) = run(&mut registry, &Context::new(), "take rusty mallet");
    assert_eq!(calls.names(), vec!["mallet"]);

    let (_, calls) = run(&mut registry, &Context::new(), "take lamp");
    assert_eq!(calls.names(), vec!["take"]);
}

#[test]
fn placeholder_registered_first_wins_with_first_word() {
    let mut registry = CommandRegistry::new();
    registry.when("take ITEM", &["item"], handler("take")).unwrap();
    registry.when("take rusty mallet", &[], handler("mallet")).unwrap();

    let (_, calls) = run(&mut registry, &Context::new(), "take rusty mallet");
    assert_eq!(calls.names(), vec!["take"]);
    assert_eq!(calls.last_arg("item").as_deref(), Some("rusty"));
}

#[test]
fn help_shadows_later_commands_once_installed() {
    let mut registry = CommandRegistry::new();
    registry.when("help", &[], handler("custom help")).unwrap();

    let (outcome, calls) = run(&mut registry, &Context::new(), "help");
    assert_eq!(outcome, Dispatch::Handled);
    assert_eq!(calls.names(), vec!["custom help"]);

    registry.install_help();
    let (outcome, calls) = run(&mut registry, &Context::new(), "help");
    assert_eq!(outcome, Dispatch::Help);
    assert!(calls.names().is_empty());
}

// =============================================================================
// Alignment
// =============================================================================

#[test]
fn trailing_words_are_tolerated() {
    // Kept loose on purpose: a short pattern accepts longer input.
    let mut registry = CommandRegistry::new();
    registry.when("look", &[], handler("look")).unwrap();
    let (outcome, _) = run(&mut registry, &Context::new(), "look at the sky");
    assert_eq!(outcome, Dispatch::Handled);
}

#[test]
fn short_input_never_matches_longer_pattern() {
    let mut registry = CommandRegistry::new();
    registry.when("put ITEM in BOX", &["item", "box"], handler("put")).unwrap();
    let (outcome, _) = run(&mut registry, &Context::new(), "put lamp in");
    assert_eq!(outcome, Dispatch::Unmatched("put lamp in".to_string()));
}

#[test]
fn input_is_case_and_space_insensitive() {
    let mut registry = CommandRegistry::new();
    registry.when("put ITEM in BOX", &["item", "box"], handler("put")).unwrap();
    let (_, calls) = run(&mut registry, &Context::new(), "  PUT  Lamp\tIN chest ");
    assert_eq!(calls.last_arg("item").as_deref(), Some("lamp"));
    assert_eq!(calls.last_arg("box").as_deref(), Some("chest"));
}

#[test]
fn blank_input_is_empty_not_unmatched() {
    let mut registry = CommandRegistry::new();
    for line in ["", "   ", "\t\n"] {
        let (outcome, calls) = run(&mut registry, &Context::new(), line);
        assert_eq!(outcome, Dispatch::Empty);
        assert!(calls.names().is_empty());
    }
}

// =============================================================================
// Context
// =============================================================================

#[test]
fn context_switch_enables_commands() {
    let mut registry = CommandRegistry::new();
    registry
        .when(Grammar::new("cast MAGIC").in_context("magic_aura"), &["magic"], handler("cast"))
        .unwrap();
    registry
        .when(
            Grammar::new("cast").in_context("magic_aura").with_unset("magic"),
            &["magic"],
            handler("cast"),
        )
        .unwrap();

    let mut context = Context::new();
    let (outcome, _) = run(&mut registry, &context, "cast");
    assert_eq!(outcome, Dispatch::Unmatched("cast".to_string()));

    context.set("magic_aura");
    let (_, calls) = run(&mut registry, &context, "cast");
    assert_eq!(calls.last_arg("magic"), None);
    assert_eq!(calls.0[0].1, vec![("magic".to_string(), None)]);

    let (_, calls) = run(&mut registry, &context, "cast fireball");
    assert_eq!(calls.last_arg("magic").as_deref(), Some("fireball"));

    context.clear();
    let (outcome, _) = run(&mut registry, &context, "cast fireball");
    assert!(matches!(outcome, Dispatch::Unmatched(_)));
}

#[test]
fn other_contexts_do_not_match() {
    let mut registry = CommandRegistry::new();
    registry
        .when(Grammar::new("swim").in_context("underwater"), &[], handler("swim"))
        .unwrap();
    let mut context = Context::new();
    context.set("magic_aura");
    let (outcome, _) = run(&mut registry, &context, "swim");
    assert!(matches!(outcome, Dispatch::Unmatched(_)));
}

#[test]
fn handlers_may_share_state_outside_the_registry() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut registry = CommandRegistry::new();
    let log = Rc::clone(&seen);
    registry
        .when("say WORD", &["word"], move |_: &mut Calls, args: &Arguments| {
            log.borrow_mut().push(args.require("word")?.to_string());
            Ok(())
        })
        .unwrap();

    run(&mut registry, &Context::new(), "say hello");
    run(&mut registry, &Context::new(), "say goodbye");
    assert_eq!(*seen.borrow(), vec!["hello", "goodbye"]);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn first_of_two_overlapping_patterns_always_wins(item in "[a-z]{1,8}", specific_first: bool) {
        let mut registry = CommandRegistry::new();
        let specific = format!("take {item}");
        if specific_first {
            registry.when(specific.as_str(), &[], handler("specific")).unwrap();
            registry.when("take ITEM", &["item"], handler("general")).unwrap();
        } else {
            registry.when("take ITEM", &["item"], handler("general")).unwrap();
            registry.when(specific.as_str(), &[], handler("specific")).unwrap();
        }

        let (_, calls) = run(&mut registry, &Context::new(), &specific);
        let expected = if specific_first { "specific" } else { "general" };
        prop_assert_eq!(calls.names(), vec![expected]);
    }

    #[test]
    fn unmatched_input_is_echoed_trimmed(words in prop::collection::vec("[a-z]{1,6}", 1..4)) {
        let mut registry = CommandRegistry::<Calls>::new();
        let line = format!("  {}  ", words.join(" "));
        let (outcome, _) = run(&mut registry, &Context::new(), &line);
        if words[0] == "quit" {
            prop_assert_eq!(outcome, Dispatch::Quit);
        } else {
            prop_assert_eq!(outcome, Dispatch::Unmatched(words.join(" ")));
        }
    }
}
