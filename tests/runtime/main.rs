//! Integration tests for the interaction loop
//!
//! Drives whole sessions through a scripted line editor and checks what
//! the player would see.

mod session;
