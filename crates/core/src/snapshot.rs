use crate::board::Board;
use crate::types::{exponent_value, GameStatus, Index};

/// Owned, render-ready copy of a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub size: usize,
    /// Exponents, row-major from the bottom row (`y * size + x`).
    pub cells: Vec<Option<u8>>,
    pub score: u64,
    pub max: u8,
    pub status: GameStatus,
}

impl GameSnapshot {
    pub fn write_board(&mut self, board: &Board) {
        self.size = board.size();
        self.cells.clear();
        self.cells
            .extend(board.cells().iter().map(|cell| cell.map(|t| t.exponent)));
    }

    pub fn exponent_at(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells[y * self.size + x]
    }

    /// Displayed value at `(x, y)`.
    pub fn value_at(&self, x: usize, y: usize) -> Option<u64> {
        self.exponent_at(x, y).map(exponent_value)
    }

    /// Largest displayed value on the board.
    pub fn max_value(&self) -> Option<u64> {
        self.cells.iter().flatten().max().copied().map(exponent_value)
    }

    pub fn at(&self, idx: Index) -> Option<u64> {
        if idx.x < 0 || idx.y < 0 {
            return None;
        }
        self.value_at(idx.x as usize, idx.y as usize)
    }
}
