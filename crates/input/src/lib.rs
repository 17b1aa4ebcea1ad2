//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Reading the
//! events stays with the caller so this crate has no I/O of its own.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
