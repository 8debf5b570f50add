//! Core error types for Wayfinder.
//!
//! This crate provides:
//! - [`Error`] - Error type carrying an [`ErrorKind`] and optional [`ErrorContext`]
//! - [`Phase`] - Whether an error belongs to declaration time or to a live turn
//! - [`Result`] - Convenience alias used across every layer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;

pub use error::{Error, ErrorContext, ErrorKind, Phase};

/// Result type alias using Wayfinder's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
