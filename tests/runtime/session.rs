//! Loop behaviour independent of any particular game.

use wayfinder_foundation::Error;
use wayfinder_grammar::{Arguments, Grammar};
use wayfinder_runtime::{Console, Game, ReadResult, Repl, ReplConfig, SharedBuffer};

use crate::support::ScriptedEditor;

type Session = Repl<u32, ScriptedEditor>;

fn session(editor: ScriptedEditor, config: ReplConfig) -> (Session, SharedBuffer) {
    let (console, out) = Console::buffered(false);
    let mut repl = Repl::with_editor(editor, Game::new(0, console), config.with_color(false));
    repl.when("wait", &[], |game: &mut Game<u32>, _: &Arguments| {
        game.state += 1;
        game.console.say("Time passes.")
    })
    .unwrap();
    (repl, out)
}

#[test]
fn each_turn_ends_with_a_blank_line() {
    let (mut repl, out) = session(ScriptedEditor::new(&["wait", "wait"]), ReplConfig::default());
    repl.run().unwrap();
    assert_eq!(repl.game().state, 2);
    assert_eq!(out.contents(), "Time passes.\n\nTime passes.\n\n\n");
}

#[test]
fn custom_prompt_is_shown() {
    let config = ReplConfig::default().with_prompt("What now? ");
    let (mut repl, _) = session(ScriptedEditor::new(&["wait"]), config);
    repl.run().unwrap();
    assert_eq!(repl.editor().prompts, vec!["What now? ", "What now? "]);
}

#[test]
fn quit_ends_the_session_immediately() {
    let (mut repl, out) = session(ScriptedEditor::new(&["wait", "QUIT", "wait"]), ReplConfig::default());
    repl.run().unwrap();
    assert_eq!(repl.game().state, 1);
    assert_eq!(out.contents(), "Time passes.\n\n");
}

#[test]
fn end_of_input_prints_a_newline() {
    let (mut repl, out) = session(ScriptedEditor::new(&[]), ReplConfig::default());
    repl.run().unwrap();
    assert_eq!(out.contents(), "\n");
}

#[test]
fn interrupt_then_more_input() {
    let editor = ScriptedEditor::default()
        .then(ReadResult::Interrupted)
        .then(ReadResult::Line("wait".to_string()));
    let (mut repl, _) = session(editor, ReplConfig::default());
    repl.run().unwrap();
    assert_eq!(repl.game().state, 1);
}

#[test]
fn help_shows_header_and_commands() {
    let (mut repl, out) = session(ScriptedEditor::new(&["?"]), ReplConfig::default());
    repl.run().unwrap();
    assert_eq!(
        out.contents(),
        "Here is a list of the commands you can give:\n?\nhelp\nquit\nwait\n\n\n"
    );
}

#[test]
fn turn_errors_are_reported_and_play_continues() {
    let (mut repl, out) = session(ScriptedEditor::new(&["open door", "wait"]), ReplConfig::default());
    repl.when("open THING", &["thing"], |_: &mut Game<u32>, args: &Arguments| {
        Err(Error::internal(format!("the {} is stuck", args.require("thing")?)))
    })
    .unwrap();
    repl.run().unwrap();

    let text = out.contents();
    assert!(text.contains("the door is stuck"));
    assert!(text.contains("Time passes."));
    assert_eq!(repl.game().state, 1);
}

#[test]
fn handlers_switch_context() {
    let (mut repl, out) = session(
        ScriptedEditor::new(&["dive", "swim", "surface", "swim"]),
        ReplConfig::default(),
    );
    repl.when("dive", &[], |game: &mut Game<u32>, _: &Arguments| {
        game.context.set("underwater");
        Ok(())
    })
    .unwrap();
    repl.when("surface", &[], |game: &mut Game<u32>, _: &Arguments| {
        game.context.clear();
        Ok(())
    })
    .unwrap();
    repl.when(Grammar::new("swim").in_context("underwater"), &[], |game: &mut Game<u32>, _: &Arguments| {
        game.console.say("You swim.")
    })
    .unwrap();
    repl.run().unwrap();

    let text = out.contents();
    assert_eq!(text.matches("You swim.").count(), 1);
    assert!(text.contains("I don't understand 'swim'."));
}

#[test]
fn turn_can_be_driven_directly() {
    let (mut repl, out) = session(ScriptedEditor::default(), ReplConfig::default());
    assert!(repl.turn("wait").unwrap());
    assert!(repl.turn("").unwrap());
    assert!(!repl.turn("quit now").unwrap());
    assert_eq!(out.contents(), "Time passes.\n\n");
}
