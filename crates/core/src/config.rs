//! Game configuration and startup validation.
//!
//! [`GameConfig`] is the raw, user-supplied configuration. [`GameConfig::validate`]
//! turns it into [`Rules`], which is the only way to construct a
//! [`GameState`](crate::GameState). Invalid input never reaches the engine.

use thiserror::Error;

use crate::spawn::SpawnRule;
use crate::types::{
    exponent_value, DEFAULT_GOAL, DEFAULT_GRID_SIZE, DEFAULT_STARTING_TILES, FOUR_TILE_PERCENT,
    MAX_GRID_SIZE, MIN_GOAL, MIN_GRID_SIZE,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("size must be at least 2 (got {0})")]
    GridTooSmall(usize),
    #[error("size must be at most 64 (got {0})")]
    GridTooLarge(usize),
    #[error("goal must be at least 4 (got {0})")]
    GoalTooSmall(u64),
    #[error("goal must be a power of 2 (got {0})")]
    GoalNotPowerOfTwo(u64),
    #[error("starting tiles must be between 1 and {max} (got {got})")]
    StartingTiles { got: usize, max: usize },
    #[error("four-tile chance must be a percentage between 0 and 100 (got {0})")]
    FourPercent(u8),
}

/// Winning tile, stored as an exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Goal {
    exponent: u8,
}

impl Goal {
    /// Goal from a displayed tile value (e.g. 2048 -> exponent 10).
    ///
    /// ```
    /// use tui_2048_core::Goal;
    ///
    /// assert_eq!(Goal::from_value(2048).unwrap().exponent(), 10);
    /// assert_eq!(Goal::from_value(4).unwrap().exponent(), 1);
    /// assert!(Goal::from_value(2).is_err());
    /// assert!(Goal::from_value(1000).is_err());
    /// ```
    pub fn from_value(value: u64) -> Result<Self, ConfigError> {
        if value < MIN_GOAL {
            return Err(ConfigError::GoalTooSmall(value));
        }
        if !value.is_power_of_two() {
            return Err(ConfigError::GoalNotPowerOfTwo(value));
        }
        Ok(Self {
            exponent: (value.trailing_zeros() - 1) as u8,
        })
    }

    pub const fn from_exponent(exponent: u8) -> Self {
        Self { exponent }
    }

    pub fn exponent(&self) -> u8 {
        self.exponent
    }

    pub fn value(&self) -> u64 {
        exponent_value(self.exponent)
    }
}

/// User-facing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    /// Displayed value of the winning tile.
    pub goal: u64,
    pub starting_tiles: usize,
    pub four_percent: u8,
    pub lucky: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            goal: DEFAULT_GOAL,
            starting_tiles: DEFAULT_STARTING_TILES,
            four_percent: FOUR_TILE_PERCENT,
            lucky: false,
        }
    }
}

impl GameConfig {
    /// Check every field and produce the rules a game runs with.
    ///
    /// Lucky mode always starts with a single tile.
    pub fn validate(&self) -> Result<Rules, ConfigError> {
        if self.size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall(self.size));
        }
        if self.size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge(self.size));
        }
        let goal = Goal::from_value(self.goal)?;

        let max = self
            .size
            .checked_mul(self.size)
            .ok_or(ConfigError::GridTooLarge(self.size))?;
        let starting_tiles = if self.lucky { 1 } else { self.starting_tiles };
        if starting_tiles == 0 || starting_tiles > max {
            return Err(ConfigError::StartingTiles {
                got: starting_tiles,
                max,
            });
        }
        if self.four_percent > 100 {
            return Err(ConfigError::FourPercent(self.four_percent));
        }

        Ok(Rules {
            size: self.size,
            goal,
            starting_tiles,
            spawn: SpawnRule {
                four_percent: self.four_percent,
                lucky: self.lucky,
            },
        })
    }
}

/// Validated game rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub size: usize,
    pub goal: Goal,
    pub starting_tiles: usize,
    pub spawn: SpawnRule,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            goal: Goal::from_exponent(10),
            starting_tiles: DEFAULT_STARTING_TILES,
            spawn: SpawnRule::default(),
        }
    }
}
