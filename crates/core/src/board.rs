//! Board module - manages the game grid
//!
//! The board is an N x N grid where each cell can be empty or hold a [`Tile`].
//! Uses a flat vector in row-major order (`y * size + x`).
//! Coordinates: (x, y) where x grows to the right and y grows upward, so row 0
//! is the bottom edge.

use rand::Rng;

use crate::types::{exponent_value, Index, MAX_GRID_SIZE, MIN_GRID_SIZE};

/// A numbered tile.
///
/// `exponent` encodes the displayed value `2^(exponent+1)`. `merged` is only
/// meaningful while a move is being evaluated. Merging two `u8::MAX` tiles
/// keeps the exponent at `u8::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub exponent: u8,
    pub merged: bool,
}

impl Tile {
    pub const fn new(exponent: u8) -> Self {
        Self {
            exponent,
            merged: false,
        }
    }

    /// Displayed number.
    pub fn value(&self) -> u64 {
        exponent_value(self.exponent)
    }
}

/// A single grid cell.
pub type Cell = Option<Tile>;

/// The game board - `size` columns x `size` rows using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is outside `MIN_GRID_SIZE..=MAX_GRID_SIZE`. Sizes are
    /// validated by [`crate::GameConfig::validate`] before a board is ever built.
    pub fn new(size: usize) -> Self {
        assert!(
            size >= MIN_GRID_SIZE,
            "board size {size} is below the minimum of {MIN_GRID_SIZE}"
        );
        assert!(
            size <= MAX_GRID_SIZE,
            "board size {size} is above the maximum of {MAX_GRID_SIZE}"
        );
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a board from exponent rows listed top row first, the way the grid
    /// is printed. `None` is an empty cell.
    ///
    /// ```
    /// use tui_2048_core::Board;
    /// use tui_2048_core::types::Index;
    ///
    /// let board = Board::from_rows(&[
    ///     [None, Some(1)],
    ///     [Some(0), None],
    /// ]);
    /// assert_eq!(board.tile(Index::new(1, 1)).map(|t| t.value()), Some(4));
    /// assert_eq!(board.tile(Index::new(0, 0)).map(|t| t.value()), Some(2));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the rows are not square or smaller than [`MIN_GRID_SIZE`].
    pub fn from_rows<R: AsRef<[Option<u8>]>>(rows: &[R]) -> Self {
        let size = rows.len();
        let mut board = Self::new(size);
        for (row_idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(row.len(), size, "row {row_idx} has the wrong width");
            let y = (size - 1 - row_idx) as i32;
            for (x, exponent) in row.iter().enumerate() {
                board.set(Index::new(x as i32, y), exponent.map(Tile::new));
            }
        }
        board
    }

    /// Calculate flat index from coordinates
    #[inline(always)]
    fn offset(&self, idx: Index) -> Option<usize> {
        if !self.in_bounds(idx) {
            return None;
        }
        Some(idx.y as usize * self.size + idx.x as usize)
    }

    /// Width (and height) of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// True iff both coordinates lie in `[0, size)`.
    #[inline]
    pub fn in_bounds(&self, idx: Index) -> bool {
        let n = self.size as i32;
        (0..n).contains(&idx.x) && (0..n).contains(&idx.y)
    }

    /// Get cell at `idx`. Returns None if out of bounds.
    pub fn get(&self, idx: Index) -> Option<Cell> {
        self.offset(idx).map(|i| self.cells[i])
    }

    /// Tile at `idx`, or None if the cell is empty or out of bounds.
    pub fn tile(&self, idx: Index) -> Option<Tile> {
        self.get(idx).flatten()
    }

    pub(crate) fn tile_mut(&mut self, idx: Index) -> Option<&mut Tile> {
        let i = self.offset(idx)?;
        self.cells[i].as_mut()
    }

    /// Set cell at `idx`. Returns false if out of bounds.
    pub fn set(&mut self, idx: Index, cell: Cell) -> bool {
        match self.offset(idx) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Remove and return the tile at `idx`.
    pub fn take(&mut self, idx: Index) -> Cell {
        self.offset(idx).and_then(|i| self.cells[i].take())
    }

    /// Check if position is within bounds and empty.
    pub fn is_empty_at(&self, idx: Index) -> bool {
        matches!(self.get(idx), Some(None))
    }

    /// Every empty position, row-major (y ascending, then x ascending).
    pub fn empty_cells(&self) -> Vec<Index> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| self.index_of(i))
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Uniformly pick one empty cell, or None if the board is full.
    pub fn random_empty_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Index> {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return None;
        }
        Some(empty[rng.gen_range(0..empty.len())])
    }

    /// Largest exponent on the board.
    pub fn max_exponent(&self) -> Option<u8> {
        self.cells.iter().flatten().map(|t| t.exponent).max()
    }

    /// Flat cells, row-major from the bottom row.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn clear_merged(&mut self) {
        for tile in self.cells.iter_mut().flatten() {
            tile.merged = false;
        }
    }

    fn index_of(&self, offset: usize) -> Index {
        Index::new((offset % self.size) as i32, (offset / self.size) as i32)
    }
}
