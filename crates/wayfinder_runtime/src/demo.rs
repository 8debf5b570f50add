//! The built-in demo adventure.
//!
//! Three rooms in a line (Dark Room, Valley, Magic Forest), a rusty mallet
//! lying in the valley, and a little magic that only works in the forest.

use log::debug;
use wayfinder_foundation::Result;
use wayfinder_grammar::{Arguments, Grammar};
use wayfinder_world::{AdventureData, Bag, RoomGraph, RoomId};

use crate::editor::LineEditor;
use crate::protected::{Gate, GateConfig, protected};
use crate::repl::{Game, Repl};

/// The demo's world data.
pub const DEMO_DATA: &str = include_str!("../demos/demo_game.toml");

/// Name under which [`DEMO_DATA`] is reported in errors.
pub const DEMO_SOURCE: &str = "demo_game.toml";

/// Context active while the player is in the Magic Forest.
pub const MAGIC_AURA: &str = "magic_aura";

/// Password for `xyzzy`.
pub const SECRET_WORD: &str = "plugh";

/// State of the demo adventure.
#[derive(Clone, Debug)]
pub struct DemoWorld {
    /// The rooms and their exits.
    pub graph: RoomGraph,
    /// Where the player is.
    pub current: RoomId,
    /// The starting room.
    pub start: RoomId,
    /// The room with the magic aura.
    pub magic_forest: RoomId,
    /// What the player carries.
    pub inventory: Bag,
}

impl DemoWorld {
    /// Builds the world from `data`.
    ///
    /// # Errors
    ///
    /// Returns a data error if a room or item is missing or malformed.
    pub fn build(data: &AdventureData) -> Result<Self> {
        let mut graph = RoomGraph::new();

        let dark_room = data.room("Dark Room", graph.directions())?;
        let dark_room = graph.add_room(dark_room);
        let valley = data.room("Valley", graph.directions())?;
        let valley = graph.add_room(valley);
        let forest = data.room("Magic Forest", graph.directions())?;
        let forest = graph.add_room(forest);

        graph.set_exit(dark_room, "north", valley)?;
        graph.set_exit(valley, "north", forest)?;
        graph.room_mut(valley)?.items.insert(data.item("rusty mallet")?);

        debug!("demo world built with {} rooms", graph.len());
        Ok(Self {
            graph,
            current: dark_room,
            start: dark_room,
            magic_forest: forest,
            inventory: Bag::new(),
        })
    }

    /// Builds the world from the embedded data.
    ///
    /// # Errors
    ///
    /// Returns a data error if the embedded data is broken.
    pub fn embedded() -> Result<Self> {
        Self::build(&AdventureData::parse(DEMO_DATA, DEMO_SOURCE)?)
    }
}

/// Sets the markup substitutes the demo's texts use.
pub fn style(game: &mut Game<DemoWorld>) {
    game.console.substitute("STYLE_ROOM", "green");
    game.console.substitute("STYLE_ITEM", "yellow");
}

/// Registers every demo command on `repl`.
///
/// # Errors
///
/// Returns a declaration error if a command does not compile.
pub fn register<E: LineEditor>(repl: &mut Repl<DemoWorld, E>) -> Result<()> {
    register_with_gate(repl, Gate::new(gate_config()))
}

/// Like [`register`], with the password for `xyzzy` read through `gate`.
///
/// # Errors
///
/// Returns a declaration error if a command does not compile.
pub fn register_with_gate<E: LineEditor>(repl: &mut Repl<DemoWorld, E>, gate: Gate) -> Result<()> {
    for direction in ["north", "south", "east", "west"] {
        repl.when(
            Grammar::new(direction).with_arg("direction", direction),
            &["direction"],
            go,
        )?;
    }
    repl.when("take ITEM", &["item"], take_item)?;
    repl.when("drop THING", &["thing"], drop_item)?;
    repl.when("look", &[], |game: &mut Game<DemoWorld>, _: &Arguments| look(game))?;
    repl.when("inventory", &[], inventory)?;

    // `cast MAGIC` goes first: `cast` alone would also match "cast fireball".
    repl.when(Grammar::new("cast MAGIC").in_context(MAGIC_AURA), &["magic"], cast)?;
    repl.when(
        Grammar::new("cast").in_context(MAGIC_AURA).with_unset("magic"),
        &["magic"],
        cast,
    )?;

    repl.when("xyzzy", &[], protected(gate, xyzzy))?;
    Ok(())
}

/// Password settings for `xyzzy`.
#[must_use]
pub fn gate_config() -> GateConfig {
    GateConfig::default()
        .with_password(SECRET_WORD)
        .with_message("A hollow voice asks for the word: ")
        .with_success("The air ripples around you.")
        .with_failure(Some("Nothing happens.".to_string()))
}

/// Describes the current room and what lies in it.
///
/// # Errors
///
/// Returns an error if the room is missing or output fails.
pub fn look(game: &mut Game<DemoWorld>) -> Result<()> {
    let room = game.state.graph.room(game.state.current)?;
    if let Some(label) = room.label() {
        game.console.ruler(label)?;
    }
    game.console.say(room)?;
    for item in &room.items {
        game.console.say(format!("A [$STYLE_ITEM]{item}[/] is here."))?;
    }
    Ok(())
}

fn go(game: &mut Game<DemoWorld>, args: &Arguments) -> Result<()> {
    let direction = args.require("direction")?;
    let Some(next) = game.state.graph.exit(game.state.current, direction)? else {
        return game.console.say(format!("You cannot go {direction} from here."));
    };

    game.state.current = next;
    game.console.say(format!("You go {direction}."))?;
    look(game)?;

    if next == game.state.magic_forest {
        game.context.set(MAGIC_AURA);
    } else {
        game.context.clear();
    }
    Ok(())
}

fn take_item(game: &mut Game<DemoWorld>, args: &Arguments) -> Result<()> {
    let name = args.require("item")?;
    let world = &mut game.state;
    let room = world.graph.room_mut(world.current)?;

    match room.items.take(name) {
        Some(item) => {
            game.console.say(format!("You pick up the [$STYLE_ITEM]{item}[/]."))?;
            world.inventory.insert(item);
        }
        None => game.console.say(format!("There is no [$STYLE_ITEM]{name}[/] here."))?,
    }
    Ok(())
}

fn drop_item(game: &mut Game<DemoWorld>, args: &Arguments) -> Result<()> {
    let name = args.require("thing")?;
    let world = &mut game.state;

    match world.inventory.take(name) {
        Some(item) => {
            game.console.say(format!("You drop the [$STYLE_ITEM]{item}[/]."))?;
            world.graph.room_mut(world.current)?.items.insert(item);
        }
        None => game.console.say(format!("You do not have a [$STYLE_ITEM]{name}[/]."))?,
    }
    Ok(())
}

fn inventory(game: &mut Game<DemoWorld>, _: &Arguments) -> Result<()> {
    game.console.say("You have:")?;
    for item in &game.state.inventory {
        game.console.say(item)?;
    }
    Ok(())
}

fn cast(game: &mut Game<DemoWorld>, args: &Arguments) -> Result<()> {
    match args.get("magic") {
        None => game.console.say("Which magic you would like to spell?"),
        Some("fireball") => game.console.say("A flaming [red]Fireball[/] shoots from your hands!"),
        Some(other) => game.console.say(format!("You do not know how to cast {other}.")),
    }
}

fn xyzzy(game: &mut Game<DemoWorld>, _: &Arguments) -> Result<()> {
    game.state.current = game.state.start;
    game.context.clear();
    game.console.say("You are back where you started.")?;
    look(game)
}
