//! Spawn module - random tile placement after every accepted move
//!
//! A spawn picks a uniformly random empty cell and places a "2" there, or a "4"
//! with probability `four_percent`%. A full board skips the spawn.
//!
//! Lucky mode replaces the random pick: every spawn is a "4" on the top-left
//! corner, and is skipped while that corner is occupied.

use rand::Rng;

use crate::board::{Board, Tile};
use crate::types::{Index, FOUR_EXPONENT, FOUR_TILE_PERCENT, TWO_EXPONENT};

/// Where and what to spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnRule {
    /// Chance in percent (0..=100) that a spawned tile is a "4".
    pub four_percent: u8,
    pub lucky: bool,
}

impl Default for SpawnRule {
    fn default() -> Self {
        Self {
            four_percent: FOUR_TILE_PERCENT,
            lucky: false,
        }
    }
}

impl SpawnRule {
    /// Draw the exponent of the next tile.
    pub fn roll_exponent<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        if self.lucky || rng.gen_range(0..100u8) < self.four_percent {
            FOUR_EXPONENT
        } else {
            TWO_EXPONENT
        }
    }

    /// Choose the cell for the next tile, or None if nothing may be placed.
    pub fn pick_cell<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<Index> {
        if self.lucky {
            let corner = Index::new(0, board.size() as i32 - 1);
            return board.is_empty_at(corner).then_some(corner);
        }
        board.random_empty_cell(rng)
    }

    /// Place one new tile. Returns where it went, or None when skipped.
    pub fn spawn<R: Rng + ?Sized>(&self, board: &mut Board, rng: &mut R) -> Option<(Index, Tile)> {
        let idx = self.pick_cell(board, rng)?;
        let tile = Tile::new(self.roll_exponent(rng));
        board.set(idx, Some(tile));
        Some((idx, tile))
    }
}
