//! The interaction loop.

use log::{Level, info, log};
use wayfinder_foundation::{Error, Phase, Result};
use wayfinder_grammar::{Arguments, CommandRegistry, Context, Dispatch, Grammar};

use crate::config::ReplConfig;
use crate::console::Console;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// Header printed above the command list by `help`.
pub const HELP_HEADER: &str = "Here is a list of the commands you can give:";

/// Everything a command handler may change during a turn.
#[derive(Debug)]
pub struct Game<S> {
    /// Game-defined state.
    pub state: S,
    /// The current narrative mode.
    pub context: Context,
    /// Where game text goes.
    pub console: Console,
}

impl<S> Game<S> {
    /// Creates a game in the default context.
    pub fn new(state: S, console: Console) -> Self {
        Self {
            state,
            context: Context::new(),
            console,
        }
    }
}

/// The interactive prompt/read/dispatch loop.
pub struct Repl<S, E: LineEditor = RustylineEditor> {
    registry: CommandRegistry<Game<S>>,
    game: Game<S>,
    editor: E,
    config: ReplConfig,
}

impl<S> Repl<S, RustylineEditor> {
    /// Creates a loop reading from the terminal and writing to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(state: S, config: ReplConfig) -> Result<Self> {
        let editor = RustylineEditor::new(config.color)?;
        let console = Console::stdout(config.color);
        Ok(Self::with_editor(editor, Game::new(state, console), config))
    }
}

impl<S, E: LineEditor> Repl<S, E> {
    /// Creates a loop over an existing game and editor.
    pub fn with_editor(editor: E, game: Game<S>, config: ReplConfig) -> Self {
        Self {
            registry: CommandRegistry::new(),
            game,
            editor,
            config,
        }
    }

    /// Registers a command. See [`CommandRegistry::when`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidGrammar` or `SignatureMismatch` if the declaration
    /// does not fit `params`.
    pub fn when<F>(&mut self, grammar: impl Into<Grammar>, params: &[&str], handler: F) -> Result<()>
    where
        F: FnMut(&mut Game<S>, &Arguments) -> Result<()> + 'static,
    {
        self.registry.when(grammar, params, handler)
    }

    /// The command table.
    #[must_use]
    pub const fn registry(&self) -> &CommandRegistry<Game<S>> {
        &self.registry
    }

    /// The game.
    #[must_use]
    pub const fn game(&self) -> &Game<S> {
        &self.game
    }

    /// The game, mutably.
    pub fn game_mut(&mut self) -> &mut Game<S> {
        &mut self.game
    }

    /// The editor.
    #[must_use]
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Runs until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails. Handler
    /// errors are printed and do not end the loop.
    pub fn run(&mut self) -> Result<()> {
        if self.config.help {
            self.registry.install_help();
        }
        if let Some(banner) = &self.config.banner {
            self.game.console.say(banner)?;
        }
        info!("session started with {} commands", self.registry.len());

        loop {
            let words = self.registry.completion_words(&self.game.context);
            self.editor.set_completions(words);

            let line = match self.editor.read_line(&self.config.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => {
                    self.game.console.blank_line()?;
                    break;
                }
            };

            if !line.trim().is_empty() {
                self.editor.add_history(&line);
            }
            if !self.turn(&line)? {
                break;
            }
        }

        info!("session ended");
        Ok(())
    }

    /// Dispatches one line of input and prints the outcome.
    ///
    /// Returns `false` once the player quits.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn turn(&mut self, line: &str) -> Result<bool> {
        let context = self.game.context.clone();
        match self.registry.dispatch(line, &context, &mut self.game) {
            Ok(Dispatch::Empty) => return Ok(true),
            Ok(Dispatch::Quit) => return Ok(false),
            Ok(Dispatch::Handled) => {}
            Ok(Dispatch::Unmatched(line)) => {
                self.game.console.line(&format!("I don't understand '{line}'."))?;
            }
            Ok(Dispatch::Help) => self.print_help()?,
            Err(e) => {
                log!(failure_level(&e), "command {line:?} failed: {e}");
                self.game.console.line(&e.to_string())?;
            }
        }
        self.game.console.blank_line()?;
        Ok(true)
    }

    fn print_help(&mut self) -> Result<()> {
        self.game.console.line(HELP_HEADER)?;
        for line in self.registry.help_lines() {
            self.game.console.line(&line)?;
        }
        Ok(())
    }
}

/// Log level for a handler failure.
///
/// Data and I/O failures are part of play. A declaration-phase error raised
/// mid-turn (an undeclared direction, a room from another graph) is a bug
/// in the game's own handlers.
fn failure_level(error: &Error) -> Level {
    match error.phase() {
        Phase::Declaration => Level::Error,
        Phase::Turn => Level::Warn,
    }
}
