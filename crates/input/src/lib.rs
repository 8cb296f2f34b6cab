//! Terminal input boundary.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Keys with
//! no mapping are dropped here and never reach the engine.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
