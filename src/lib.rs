//! Wayfinder - command grammar interpreter and world graph for text adventures
//!
//! This crate re-exports all layers of the Wayfinder system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: wayfinder_runtime    — Interaction loop, console, line editing, CLI
//! Layer 2: wayfinder_grammar    — Grammar compiler, command registry, dispatch
//! Layer 1: wayfinder_world      — Rooms, exits, items, bags, world data files
//! Layer 0: wayfinder_foundation — Error types
//! ```

pub use wayfinder_foundation as foundation;
pub use wayfinder_grammar as grammar;
pub use wayfinder_runtime as runtime;
pub use wayfinder_world as world;
