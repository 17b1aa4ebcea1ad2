//! Terminal rendering for the 2048 grid.
//!
//! Rendering is split in two:
//!
//! - [`grid_view`] turns a [`core::GameSnapshot`] into plain text lines (pure, no I/O)
//! - [`renderer`] writes those lines to the terminal and redraws them in place
//!   after every accepted move
//!
//! The grid is printed top row first: row `size - 1` is the first line, so
//! "up" on the keyboard is up on screen.

pub mod grid_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use grid_view::{GridView, MIN_CELL_WIDTH};
pub use renderer::{encode_lines_into, TerminalRenderer};
