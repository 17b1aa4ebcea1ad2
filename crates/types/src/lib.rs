//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! Cells are addressed by [`Index`] `(x, y)`:
//!
//! - **x**: column, `0` is the left-most column
//! - **y**: row, `0` is the bottom-most row
//!
//! Increasing `y` is "up". The move engine, the spawn rules and the renderer all
//! use this one convention.
//!
//! # Tile values
//!
//! Tiles store an exponent `e`; the displayed number is `2^(e+1)`:
//!
//! | Exponent | Displayed |
//! |----------|-----------|
//! | 0 | 2 |
//! | 1 | 4 |
//! | 10 | 2048 |
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRID_SIZE` | 4 | Width/height of the grid |
//! | `MAX_GRID_SIZE` | 64 | Largest accepted width/height |
//! | `DEFAULT_GOAL` | 2048 | Displayed value that wins the game |
//! | `DEFAULT_STARTING_TILES` | 2 | Tiles spawned before the first move |
//! | `FOUR_TILE_PERCENT` | 10 | Chance (in percent) that a spawn is a "4" |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{exponent_value, Direction, GameAction, Index};
//!
//! let dir = Direction::from_str("up").unwrap();
//! assert_eq!(dir, Direction::Up);
//! assert_eq!(Index::new(1, 1).step(dir), Index::new(1, 2));
//!
//! assert_eq!(exponent_value(0), 2);
//! assert_eq!(exponent_value(10), 2048);
//!
//! assert_eq!(GameAction::from(Direction::Left), GameAction::Move(Direction::Left));
//! ```

/// Default width/height of the grid.
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Smallest allowed grid size.
pub const MIN_GRID_SIZE: usize = 2;

/// Largest allowed grid size. Keeps every coordinate well inside `i32`.
pub const MAX_GRID_SIZE: usize = 64;

/// Default winning tile (displayed value).
pub const DEFAULT_GOAL: u64 = 2048;

/// Smallest allowed winning tile (displayed value).
pub const MIN_GOAL: u64 = 4;

/// Default number of tiles placed before the first move.
pub const DEFAULT_STARTING_TILES: usize = 2;

/// Chance in percent that a spawned tile is a "4" instead of a "2".
pub const FOUR_TILE_PERCENT: u8 = 10;

/// Exponent of a freshly spawned "2".
pub const TWO_EXPONENT: u8 = 0;

/// Exponent of a freshly spawned "4".
pub const FOUR_EXPONENT: u8 = 1;

/// Displayed value of a tile exponent (`2^(e+1)`).
///
/// Saturates at `u64::MAX` for exponents that cannot be represented.
#[inline]
pub fn exponent_value(exponent: u8) -> u64 {
    1u64.checked_shl(u32::from(exponent) + 1).unwrap_or(u64::MAX)
}

/// The four move directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit step `(dx, dy)` for this direction (y grows upward).
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
        }
    }

    /// The three directions other than `self`.
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// let others = Direction::Up.others();
    /// assert_eq!(others, [Direction::Left, Direction::Right, Direction::Down]);
    /// ```
    pub fn others(self) -> [Direction; 3] {
        let mut out = [self; 3];
        let mut i = 0;
        for dir in Self::ALL {
            if dir != self {
                out[i] = dir;
                i += 1;
            }
        }
        out
    }

    /// Parse a direction from string (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("down"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grid coordinate. Signed so that stepping off an edge is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Index {
    pub x: i32,
    pub y: i32,
}

impl Index {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring index one step in `dir` (may be out of bounds).
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl std::fmt::Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Player intents produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    Move(Direction),
    Quit,
}

impl From<Direction> for GameAction {
    fn from(dir: Direction) -> Self {
        GameAction::Move(dir)
    }
}

/// Turn state machine. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Why a session ended, as delivered by the finished signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Won,
    Lost,
    /// The player asked to stop before the game was decided.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants() {
        assert_eq!(DEFAULT_GRID_SIZE, 4);
        assert_eq!(DEFAULT_GOAL, 2048);
        assert_eq!(DEFAULT_STARTING_TILES, 2);
        assert_eq!(FOUR_TILE_PERCENT, 10);
        assert_eq!(exponent_value(FOUR_EXPONENT), 4);
    }

    #[test]
    fn exponent_value_saturates() {
        assert_eq!(exponent_value(62), 1u64 << 63);
        assert_eq!(exponent_value(63), u64::MAX);
        assert_eq!(exponent_value(200), u64::MAX);
    }

    #[test]
    fn delta_is_y_up() {
        assert_eq!(Index::new(0, 0).step(Direction::Up), Index::new(0, 1));
        assert_eq!(Index::new(0, 0).step(Direction::Down), Index::new(0, -1));
        assert_eq!(Index::new(0, 0).step(Direction::Left), Index::new(-1, 0));
        assert_eq!(Index::new(0, 0).step(Direction::Right), Index::new(1, 0));
    }

    #[test]
    fn others_excludes_self() {
        for dir in Direction::ALL {
            let others = dir.others();
            assert!(!others.contains(&dir));
            assert_eq!(others.len(), 3);
        }
    }

    #[test]
    fn status_terminal() {
        assert!(!GameStatus::Playing.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(GameStatus::Lost.is_terminal());
    }
}
