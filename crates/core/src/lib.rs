//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management and turn processing.
//! It has **no dependencies** on the terminal, making it:
//!
//! - **Deterministic**: the same seed produces identical games
//! - **Testable**: every rule is exercised by unit and integration tests
//! - **Portable**: can run in any environment (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`board`]: N x N grid of optional tiles with cell queries
//! - [`moves`]: directional slide/merge engine with a side-effect-free probe mode
//! - [`spawn`]: random tile placement (and lucky mode)
//! - [`game_state`]: turn processing, win/loss detection, scoring
//! - [`finish`]: one-shot "game finished" signal
//! - [`config`]: configuration validation
//! - [`snapshot`]: owned copy of the state for rendering
//!
//! # Game Rules
//!
//! - A move slides every tile toward one edge and merges equal neighbours;
//!   a tile merges at most once per move.
//! - Every accepted move spawns a "2" (90%) or a "4" (10%) on a random empty cell.
//! - Creating the goal tile wins. Having no legal move in any direction loses;
//!   this is checked only when the chosen move is rejected.
//! - Each merge scores the value of one of the two merged tiles.
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameConfig, GameState};
//! use tui_2048_core::types::{Direction, GameStatus};
//!
//! let rules = GameConfig::default().validate().unwrap();
//! let mut game = GameState::new(rules, 12345);
//! assert_eq!(game.board().empty_count(), 14);
//!
//! for dir in [Direction::Left, Direction::Down, Direction::Right, Direction::Up] {
//!     game.play(dir);
//! }
//! assert_eq!(game.status(), GameStatus::Playing);
//! ```

pub mod board;
pub mod config;
pub mod finish;
pub mod game_state;
pub mod moves;
pub mod snapshot;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Tile};
pub use config::{ConfigError, GameConfig, Goal, Rules};
pub use finish::FinishSignal;
pub use game_state::GameState;
pub use moves::{traversal, EvalMode, MoveReport, Span};
pub use snapshot::GameSnapshot;
pub use spawn::SpawnRule;
