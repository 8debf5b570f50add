//! Integration tests for command declaration and dispatch
//!
//! Tests grammar compilation errors, registration order, and the matching
//! rules applied to player input.

mod matching;
