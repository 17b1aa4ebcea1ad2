//! Move engine - directional compaction and merging
//!
//! A move processes tiles nearest-edge-first: tiles closest to the wall they
//! slide toward settle before the ones behind them, so a single pass is enough
//! for both compaction and merging. The traversal order is derived from the
//! [`Direction`] as one [`Span`] per axis.
//!
//! The same traversal serves two modes:
//!
//! - [`EvalMode::Probe`] answers "would this move change anything?" and returns
//!   at the first slide or merge without touching the board.
//! - [`EvalMode::Commit`] performs the move and reports what happened.

use crate::board::Board;
use crate::types::{exponent_value, Direction, Index};

/// How a move is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalMode {
    /// Legality check only. The board is left untouched.
    Probe,
    /// Apply slides and merges.
    Commit,
}

/// Result of evaluating a move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveReport {
    pub changed: bool,
    /// Sum of the pre-merge values of every merged tile.
    pub score_gained: u64,
    /// Exponents produced by merges, in traversal order.
    pub merged_exponents: Vec<u8>,
}

impl MoveReport {
    fn probe(changed: bool) -> Self {
        Self {
            changed,
            ..Self::default()
        }
    }

    /// Highest exponent created by a merge during this move.
    pub fn max_merged(&self) -> Option<u8> {
        self.merged_exponents.iter().copied().max()
    }

    /// True if some merge created exactly `exponent`.
    pub fn created(&self, exponent: u8) -> bool {
        self.merged_exponents.contains(&exponent)
    }
}

/// Half-open `(start, end, step)` walk over one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: i32,
    pub end: i32,
    pub step: i32,
}

impl Span {
    fn forward(size: usize) -> Self {
        Self {
            start: 0,
            end: size as i32,
            step: 1,
        }
    }

    fn backward(size: usize) -> Self {
        Self {
            start: size as i32 - 1,
            end: -1,
            step: -1,
        }
    }
}

impl IntoIterator for Span {
    type Item = i32;
    type IntoIter = SpanIter;

    fn into_iter(self) -> SpanIter {
        SpanIter {
            next: self.start,
            span: self,
        }
    }
}

pub struct SpanIter {
    next: i32,
    span: Span,
}

impl Iterator for SpanIter {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.next == self.span.end {
            return None;
        }
        let cur = self.next;
        self.next += self.span.step;
        Some(cur)
    }
}

/// Column and row spans for `dir`: the edge the tiles slide toward comes first.
pub fn traversal(dir: Direction, size: usize) -> (Span, Span) {
    match dir {
        Direction::Left => (Span::forward(size), Span::forward(size)),
        Direction::Right => (Span::backward(size), Span::forward(size)),
        Direction::Up => (Span::forward(size), Span::backward(size)),
        Direction::Down => (Span::forward(size), Span::forward(size)),
    }
}

impl Board {
    /// Slide and merge every tile toward `dir`.
    ///
    /// In [`EvalMode::Probe`] the returned report only carries `changed`, and the
    /// board is not written to. Both modes agree on `changed` for the same board.
    pub fn evaluate(&mut self, dir: Direction, mode: EvalMode) -> MoveReport {
        let commit = mode == EvalMode::Commit;
        if commit {
            self.clear_merged();
        }

        let mut report = MoveReport::default();
        let (xs, ys) = traversal(dir, self.size());

        for x in xs {
            for y in ys {
                let origin = Index::new(x, y);
                let Some(tile) = self.tile(origin) else {
                    continue;
                };

                // Slide as far as the empty run allows.
                let mut rest = origin;
                while self.is_empty_at(rest.step(dir)) {
                    rest = rest.step(dir);
                }
                if rest != origin {
                    if !commit {
                        return MoveReport::probe(true);
                    }
                    report.changed = true;
                }

                // Merge into the blocking tile if it matches.
                let ahead = rest.step(dir);
                let mergeable = self
                    .tile(ahead)
                    .is_some_and(|t| t.exponent == tile.exponent && !(commit && t.merged));
                if mergeable {
                    if !commit {
                        return MoveReport::probe(true);
                    }
                    self.take(origin);
                    if let Some(target) = self.tile_mut(ahead) {
                        target.exponent = target.exponent.saturating_add(1);
                        target.merged = true;
                        report.merged_exponents.push(target.exponent);
                    }
                    report.score_gained += exponent_value(tile.exponent);
                    report.changed = true;
                    continue;
                }

                if commit && rest != origin {
                    let moved = self.take(origin);
                    self.set(rest, moved);
                }
            }
        }

        if commit {
            self.clear_merged();
        }
        report
    }

    /// True if moving toward `dir` would change the board.
    pub fn can_move(&mut self, dir: Direction) -> bool {
        self.evaluate(dir, EvalMode::Probe).changed
    }

    /// True if at least one direction would change the board.
    pub fn has_moves(&mut self) -> bool {
        Direction::ALL.into_iter().any(|dir| self.can_move(dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Tile;

    fn exps(board: &Board, y: i32) -> Vec<Option<u8>> {
        (0..board.size() as i32)
            .map(|x| board.tile(Index::new(x, y)).map(|t| t.exponent))
            .collect()
    }

    #[test]
    fn span_walks_both_ways() {
        let fwd: Vec<i32> = Span::forward(3).into_iter().collect();
        let back: Vec<i32> = Span::backward(3).into_iter().collect();
        assert_eq!(fwd, vec![0, 1, 2]);
        assert_eq!(back, vec![2, 1, 0]);
    }

    #[test]
    fn traversal_starts_at_destination_edge() {
        let first = |dir| {
            let (xs, ys) = traversal(dir, 4);
            (xs.start, ys.start)
        };
        assert_eq!(first(Direction::Left).0, 0);
        assert_eq!(first(Direction::Right).0, 3);
        assert_eq!(first(Direction::Up).1, 3);
        assert_eq!(first(Direction::Down).1, 0);
    }

    #[test]
    fn merge_at_the_largest_exponent_saturates() {
        let mut board = Board::new(2);
        board.set(Index::new(0, 0), Some(Tile::new(u8::MAX)));
        board.set(Index::new(1, 0), Some(Tile::new(u8::MAX)));

        let report = board.evaluate(Direction::Left, EvalMode::Commit);
        assert!(report.changed);
        assert_eq!(report.merged_exponents, vec![u8::MAX]);
        assert_eq!(exps(&board, 0), vec![Some(u8::MAX), None]);
        assert_eq!(report.score_gained, u64::MAX);
    }

    #[test]
    fn three_equal_tiles_merge_once() {
        let mut board = Board::from_rows(&[
            [None, None, None, None],
            [None, None, None, None],
            [None, None, None, None],
            [Some(0), Some(0), Some(0), None],
        ]);
        let report = board.evaluate(Direction::Left, EvalMode::Commit);
        assert!(report.changed);
        assert_eq!(report.merged_exponents, vec![1]);
        assert_eq!(exps(&board, 0), vec![Some(1), Some(0), None, None]);
    }

    #[test]
    fn slide_then_merge() {
        let mut board = Board::from_rows(&[
            [None, None, None, None],
            [None, None, None, None],
            [None, None, None, None],
            [Some(2), None, None, Some(2)],
        ]);
        let report = board.evaluate(Direction::Left, EvalMode::Commit);
        assert!(report.changed);
        assert_eq!(report.score_gained, 8);
        assert_eq!(exps(&board, 0), vec![Some(3), None, None, None]);
    }

    #[test]
    fn merged_tile_does_not_absorb_a_second_one() {
        // 2 2 4 moving left: the new 4 must not swallow the old 4.
        let mut board = Board::from_rows(&[
            [None, None, None],
            [None, None, None],
            [Some(0), Some(0), Some(1)],
        ]);
        board.evaluate(Direction::Left, EvalMode::Commit);
        assert_eq!(exps(&board, 0), vec![Some(1), Some(1), None]);
    }

    #[test]
    fn merged_flags_are_cleared_after_commit() {
        let mut board = Board::from_rows(&[[Some(0), Some(0)], [None, None]]);
        board.evaluate(Direction::Left, EvalMode::Commit);
        assert!(board.cells().iter().flatten().all(|t| !t.merged));
    }

    #[test]
    fn probe_does_not_mutate() {
        let mut board = Board::from_rows(&[[Some(0), None], [Some(0), Some(1)]]);
        let before = board.clone();
        for dir in Direction::ALL {
            let _ = board.evaluate(dir, EvalMode::Probe);
            assert_eq!(board, before);
        }
    }

    #[test]
    fn stale_merge_marker_is_reset() {
        let mut board = Board::new(2);
        let mut stale = Tile::new(0);
        stale.merged = true;
        board.set(Index::new(0, 0), Some(stale));
        board.set(Index::new(1, 0), Some(Tile::new(0)));
        let report = board.evaluate(Direction::Left, EvalMode::Commit);
        assert_eq!(report.merged_exponents, vec![1]);
    }
}
