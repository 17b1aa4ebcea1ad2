//! GridView: maps a `core::GameSnapshot` into text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! ```text
//! Score: 4
//!  ---- ---- ---- ----
//! |    |    |    |    |
//!  ---- ---- ---- ----
//! |    |    | 2  |    |
//!  ---- ---- ---- ----
//! |    |    |    |    |
//!  ---- ---- ---- ----
//! | 4  |    |    |    |
//!  ---- ---- ---- ----
//! ```

use crate::core::GameSnapshot;

/// Narrowest cell, in terminal columns.
pub const MIN_CELL_WIDTH: usize = 4;

/// Text renderer for the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridView {
    min_cell_width: usize,
}

impl Default for GridView {
    fn default() -> Self {
        Self {
            min_cell_width: MIN_CELL_WIDTH,
        }
    }
}

impl GridView {
    /// Cell width for `snap`: wide enough for the largest tile on the board.
    pub fn cell_width(&self, snap: &GameSnapshot) -> usize {
        let widest = snap
            .max_value()
            .map(|v| v.to_string().len())
            .unwrap_or(0);
        self.min_cell_width.max(widest)
    }

    /// Number of lines produced for a grid of `size`.
    pub fn line_count(size: usize) -> usize {
        1 + 2 * size + 1
    }

    /// Render score line and grid into `out`, replacing its contents.
    pub fn render_into(&self, snap: &GameSnapshot, out: &mut Vec<String>) {
        out.clear();
        out.push(format!("Score: {}", snap.score));

        let width = self.cell_width(snap);
        let border = format!(" {}", format!("{} ", "-".repeat(width)).repeat(snap.size))
            .trim_end()
            .to_string();

        for y in (0..snap.size).rev() {
            out.push(border.clone());
            let mut row = String::with_capacity(snap.size * (width + 1) + 1);
            for x in 0..snap.size {
                row.push('|');
                let label = snap
                    .value_at(x, y)
                    .map(|v| v.to_string())
                    .unwrap_or_default();
                row.push_str(&center(&label, width));
            }
            row.push('|');
            out.push(row);
        }
        out.push(border);
    }

    pub fn render(&self, snap: &GameSnapshot) -> Vec<String> {
        let mut out = Vec::with_capacity(Self::line_count(snap.size));
        self.render_into(snap, &mut out);
        out
    }
}

/// Pad `label` to `width`; odd padding goes to the right.
fn center(label: &str, width: usize) -> String {
    let space = width.saturating_sub(label.len());
    let left = space / 2;
    let right = space - left;
    format!("{}{}{}", " ".repeat(left), label, " ".repeat(right))
}
