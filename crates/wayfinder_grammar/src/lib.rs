//! Command grammar compiler, registry, and dispatcher for text adventures.
//!
//! Player input is matched word by word against declared command shapes
//! such as `"take ITEM"`: lowercase words must appear literally, uppercase
//! words capture whatever the player typed in that position.
//!
//! # Architecture
//!
//! ```text
//! "cast MAGIC" + params ["magic"]
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ GRAMMAR         │  → [Literal("cast"), Placeholder("magic")]
//! │ COMPILER        │    (checked against the handler's parameters)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND         │  → ordered list, first match wins
//! │ REGISTRY        │
//! └─────────────────┘
//!          ▲
//!          │  "Cast fireball"
//! ┌─────────────────┐
//! │ DISPATCHER      │  → ["cast", "fireball"] → handler(magic = "fireball")
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`token`] - Classification of declaration words
//! - [`pattern`] - Declarations and the compiled patterns they produce
//! - [`arguments`] - Values handed to a handler
//! - [`context`] - The narrative mode gating context-specific commands
//! - [`registry`] - Ordered command table with built-in `quit`/`help`
//! - [`dispatch`] - Input normalization and first-match dispatch

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arguments;
pub mod context;
pub mod dispatch;
pub mod pattern;
pub mod registry;
pub mod token;

pub use arguments::Arguments;
pub use context::Context;
pub use dispatch::{Dispatch, normalize};
pub use pattern::{CommandPattern, Grammar};
pub use registry::{Action, CommandRegistry, Handler, RegisteredCommand};
pub use token::Token;
