//! Game state module - turn processing and game lifecycle
//!
//! Ties together the board, the move engine, the spawn rule and the finished
//! signal. Each call to [`GameState::play`] is one player turn:
//!
//! 1. Commit the move. If anything changed, spawn a tile and accept the turn.
//! 2. Otherwise probe the other three directions. If none of them would change
//!    the board either, the game is lost.
//!
//! Winning happens inside step 1, the first time a merge creates the goal tile.
//! Once won or lost, the state is frozen and every further turn is rejected.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::board::Board;
use crate::config::Rules;
use crate::finish::FinishSignal;
use crate::moves::EvalMode;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameOutcome, GameStatus, Index};

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    rules: Rules,
    board: Board,
    rng: StdRng,
    seed: u64,
    score: u64,
    /// Highest exponent seen on the board.
    max: u8,
    status: GameStatus,
    /// Number of accepted turns.
    moves: u32,
    finished: Arc<FinishSignal>,
}

impl GameState {
    /// Start a new game: an empty board plus the configured starting tiles.
    pub fn new(rules: Rules, seed: u64) -> Self {
        let mut state = Self::with_board(rules, Board::new(rules.size), seed);
        for _ in 0..rules.starting_tiles {
            state.add_random_tile();
        }
        state
    }

    /// Resume from an existing board. No starting tiles are added.
    ///
    /// The board's size takes precedence over `rules.size`.
    pub fn with_board(mut rules: Rules, board: Board, seed: u64) -> Self {
        rules.size = board.size();
        let max = board.max_exponent().unwrap_or(0);
        Self {
            rules,
            board,
            rng: StdRng::seed_from_u64(seed),
            seed,
            score: 0,
            max,
            status: GameStatus::Playing,
            moves: 0,
            finished: Arc::new(FinishSignal::new()),
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn lost(&self) -> bool {
        self.status == GameStatus::Lost
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Handle to the one-shot finished signal, for the flow that waits on it.
    pub fn finished(&self) -> Arc<FinishSignal> {
        Arc::clone(&self.finished)
    }

    /// Play one turn toward `dir`. Returns true if the move was accepted.
    pub fn play(&mut self, dir: Direction) -> bool {
        if self.is_finished() {
            debug!(%dir, status = ?self.status, "move ignored, game is over");
            return false;
        }

        if self.evaluate(dir, EvalMode::Commit) {
            self.moves += 1;
            let spawned = self.add_random_tile();
            debug!(%dir, score = self.score, ?spawned, "move accepted");
            return true;
        }

        let stuck = dir
            .others()
            .into_iter()
            .all(|other| !self.evaluate(other, EvalMode::Probe));
        if stuck {
            self.finish(GameStatus::Lost);
        } else {
            debug!(%dir, "move rejected");
        }
        false
    }

    /// Run the move engine toward `dir`. Returns whether the board changed (or
    /// would change, for [`EvalMode::Probe`]).
    ///
    /// Committed merges add to the score, raise `max` and may win the game.
    pub fn evaluate(&mut self, dir: Direction, mode: EvalMode) -> bool {
        let report = self.board.evaluate(dir, mode);
        if mode == EvalMode::Probe {
            return report.changed;
        }

        self.score += report.score_gained;
        if let Some(top) = report.max_merged() {
            self.max = self.max.max(top);
        }
        if report.created(self.rules.goal.exponent()) {
            self.finish(GameStatus::Won);
        }
        report.changed
    }

    /// Place one tile according to the spawn rule. None if it was skipped.
    pub fn add_random_tile(&mut self) -> Option<Index> {
        let (idx, tile) = self.rules.spawn.spawn(&mut self.board, &mut self.rng)?;
        self.max = self.max.max(tile.exponent);
        Some(idx)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.write_board(&self.board);
        out.score = self.score;
        out.max = self.max;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Enter a terminal state. Only the first transition counts.
    fn finish(&mut self, status: GameStatus) {
        if self.is_finished() {
            return;
        }
        self.status = status;
        let outcome = match status {
            GameStatus::Won => GameOutcome::Won,
            GameStatus::Lost => GameOutcome::Lost,
            GameStatus::Playing => unreachable!("finish called with a non-terminal status"),
        };
        info!(?outcome, score = self.score, moves = self.moves, "game finished");
        self.finished.fire(outcome);
    }
}
