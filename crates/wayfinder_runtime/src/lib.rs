//! Interaction loop, console, line editing, and CLI for Wayfinder.
//!
//! This crate provides:
//! - [`Repl`] - The prompt/read/dispatch loop over a [`Game`]
//! - [`Console`] - Styled output with variable substitution
//! - [`LineEditor`] - Line editing with history and command completion
//! - [`protected`] - Password-gated command handlers
//! - [`ReplConfig`] - Loop configuration
//! - [`demo`] - The built-in demo adventure

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod console;
pub mod demo;
pub mod editor;
pub mod protected;
pub mod repl;

pub use config::ReplConfig;
pub use console::{Console, SharedBuffer};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use protected::{Gate, GateConfig, protected};
pub use repl::{Game, Repl};
