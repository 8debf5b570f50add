//! Matching input lines against the registry.
//!
//! Input is lowercased and split on whitespace. Each registered pattern is
//! then aligned with the input word by word, in registration order:
//!
//! - a literal must equal the input word in that position;
//! - a placeholder captures the input word in that position;
//! - a pattern longer than the input never matches;
//! - input words beyond the end of the pattern are ignored, so `"look"`
//!   also matches `look around`.
//!
//! The first pattern that aligns wins.

use log::{debug, trace};
use wayfinder_foundation::Result;

use crate::arguments::Arguments;
use crate::context::Context;
use crate::pattern::CommandPattern;
use crate::registry::{Action, CommandRegistry};
use crate::token::Token;

/// Outcome of dispatching one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// The line was blank; nothing was matched.
    Empty,
    /// A handler ran to completion.
    Handled,
    /// No command matched. Carries the trimmed input line.
    Unmatched(String),
    /// The built-in `quit` matched.
    Quit,
    /// The built-in `help` (or `?`) matched.
    Help,
}

/// Lowercases `line` and splits it into words.
#[must_use]
pub fn normalize(line: &str) -> Vec<String> {
    line.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

impl CommandPattern {
    /// Aligns this pattern with normalized input words.
    ///
    /// Returns the fixed arguments plus placeholder captures on success.
    #[must_use]
    pub fn align(&self, words: &[String]) -> Option<Arguments> {
        if self.tokens().len() > words.len() {
            return None;
        }
        let mut args = self.fixed_arguments();
        for (token, word) in self.tokens().iter().zip(words) {
            match token {
                Token::Literal(literal) if literal == word => {}
                Token::Literal(_) => return None,
                Token::Placeholder(name) => args.bind(name.clone(), Some(word.clone())),
            }
        }
        Some(args)
    }
}

impl<S> CommandRegistry<S> {
    /// Dispatches one line of input.
    ///
    /// Only commands whose context filter `context` allows are considered.
    ///
    /// # Errors
    ///
    /// Propagates the error of a handler that failed.
    pub fn dispatch(&mut self, line: &str, context: &Context, state: &mut S) -> Result<Dispatch> {
        let words = normalize(line);
        if words.is_empty() {
            return Ok(Dispatch::Empty);
        }

        for command in &mut self.commands {
            if !context.allows(command.pattern.context()) {
                trace!("skipping {} outside its context", command.pattern);
                continue;
            }
            let Some(args) = command.pattern.align(&words) else {
                continue;
            };

            debug!("{line:?} matched {}", command.pattern);
            return match &mut command.action {
                Action::Handler(handler) => {
                    handler(state, &args)?;
                    Ok(Dispatch::Handled)
                }
                Action::Quit => Ok(Dispatch::Quit),
                Action::Help => Ok(Dispatch::Help),
            };
        }

        debug!("no command matched {line:?}");
        Ok(Dispatch::Unmatched(line.trim().to_string()))
    }
}
