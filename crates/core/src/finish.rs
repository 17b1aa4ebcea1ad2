//! One-shot "game finished" signal.
//!
//! Exactly one outcome is ever recorded: the first [`FinishSignal::fire`] wins,
//! wakes every waiter, and later fires are ignored. Shared between the flow that
//! plays turns and the flow that waits for the game to end.

use std::sync::{Condvar, Mutex, MutexGuard};

use crate::types::GameOutcome;

#[derive(Debug, Default)]
pub struct FinishSignal {
    outcome: Mutex<Option<GameOutcome>>,
    cond: Condvar,
}

impl FinishSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `outcome` if nothing was recorded yet.
    ///
    /// Returns true only for the call that actually finished the game.
    pub fn fire(&self, outcome: GameOutcome) -> bool {
        let mut slot = self.lock();
        if slot.is_some() {
            return false;
        }
        *slot = Some(outcome);
        self.cond.notify_all();
        true
    }

    /// The recorded outcome, without blocking.
    pub fn outcome(&self) -> Option<GameOutcome> {
        *self.lock()
    }

    pub fn is_fired(&self) -> bool {
        self.outcome().is_some()
    }

    /// Block until the signal fires and return the outcome.
    pub fn wait(&self) -> GameOutcome {
        let mut slot = self.lock();
        loop {
            if let Some(outcome) = *slot {
                return outcome;
            }
            slot = self
                .cond
                .wait(slot)
                .unwrap_or_else(|poisoned| poisoned.into_inner());
        }
    }

    // A panicking holder cannot leave the slot half-written, so poison is ignored.
    fn lock(&self) -> MutexGuard<'_, Option<GameOutcome>> {
        self.outcome
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
