//! The ordered command table.

use std::fmt;

use log::debug;
use wayfinder_foundation::Result;

use crate::arguments::Arguments;
use crate::context::Context;
use crate::pattern::{CommandPattern, Grammar};

/// A command handler operating on game state `S`.
pub type Handler<S> = Box<dyn FnMut(&mut S, &Arguments) -> Result<()>>;

/// What a registered command does when it matches.
pub enum Action<S> {
    /// Run a game-defined handler.
    Handler(Handler<S>),
    /// End the session.
    Quit,
    /// List the registered commands.
    Help,
}

impl<S> fmt::Debug for Action<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handler(_) => f.write_str("Handler(..)"),
            Self::Quit => f.write_str("Quit"),
            Self::Help => f.write_str("Help"),
        }
    }
}

/// A compiled pattern and what to do when it matches.
#[derive(Debug)]
pub struct RegisteredCommand<S> {
    /// The pattern to match.
    pub pattern: CommandPattern,
    /// The action to take.
    pub action: Action<S>,
}

/// Commands in registration order. The first matching command wins.
///
/// A new registry already contains `quit`.
#[derive(Debug)]
pub struct CommandRegistry<S> {
    pub(crate) commands: Vec<RegisteredCommand<S>>,
    help_installed: bool,
}

impl<S> Default for CommandRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> CommandRegistry<S> {
    /// Creates a registry holding only the built-in `quit` command.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: vec![RegisteredCommand {
                pattern: CommandPattern::builtin("quit"),
                action: Action::Quit,
            }],
            help_installed: false,
        }
    }

    /// Compiles `grammar` against `params` and appends it with `handler`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGrammar` or `SignatureMismatch` from compilation;
    /// the registry is unchanged on error.
    pub fn when<F>(&mut self, grammar: impl Into<Grammar>, params: &[&str], handler: F) -> Result<()>
    where
        F: FnMut(&mut S, &Arguments) -> Result<()> + 'static,
    {
        let pattern = CommandPattern::compile(grammar.into(), params)?;
        debug!("registered command #{}: {pattern}", self.commands.len());
        self.commands.push(RegisteredCommand {
            pattern,
            action: Action::Handler(Box::new(handler)),
        });
        Ok(())
    }

    /// Puts `help` and `?` ahead of every other command.
    ///
    /// Only the first call has an effect.
    pub fn install_help(&mut self) {
        if self.help_installed {
            return;
        }
        self.help_installed = true;
        for word in ["help", "?"] {
            self.commands.insert(
                0,
                RegisteredCommand {
                    pattern: CommandPattern::builtin(word),
                    action: Action::Help,
                },
            );
        }
    }

    /// Returns true once [`install_help`](Self::install_help) has run.
    #[must_use]
    pub fn has_help(&self) -> bool {
        self.help_installed
    }

    /// Number of registered commands, built-ins included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Always false: `quit` is always registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every pattern, in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = &CommandPattern> {
        self.commands.iter().map(|c| &c.pattern)
    }

    /// Patterns eligible in `context`, in registration order.
    pub fn available<'a>(&'a self, context: &'a Context) -> impl Iterator<Item = &'a CommandPattern> {
        self.patterns().filter(|p| context.allows(p.context()))
    }

    /// Every pattern rendered for display, sorted.
    #[must_use]
    pub fn help_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.patterns().map(ToString::to_string).collect();
        lines.sort();
        lines
    }

    /// First words of the patterns eligible in `context`, for completion.
    #[must_use]
    pub fn completion_words(&self, context: &Context) -> Vec<String> {
        let mut words: Vec<String> = self
            .available(context)
            .filter_map(|p| p.prefix().first().map(|w| (*w).to_string()))
            .collect();
        words.sort();
        words.dedup();
        words
    }
}
