//! Integration tests for the world model
//!
//! Tests room graphs, bags of items, and building both from data files.

mod bags;
mod data;
mod graph;
