//! Round score with a hard floor and a session best
//!
//! The running total never goes below zero no matter how many penalties
//! land, and the session best only moves at round end, never mid-round.
//! Score changes are observable so the shell can mirror the number on
//! screen without polling.

use crate::sim::observer::Listeners;

/// Emitted after every effective score change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreEvent {
    /// Total after the change.
    pub total: u32,
    /// Applied delta after flooring. A -100 against a total of 12 reports -12.
    pub delta: i32,
}

/// Tracks the running score for one round plus the best across rounds.
///
/// Fields stay private so the zero floor and the finalize-only best update
/// cannot be bypassed.
#[derive(Debug, Default)]
pub struct ScoreTracker {
    value: u32,
    best: u32,
    listeners: Listeners<ScoreEvent>,
}

impl ScoreTracker {
    pub fn new(best: u32) -> Self {
        Self {
            value: 0,
            best,
            listeners: Listeners::new(),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Apply a signed delta, clamping the total at zero. Listeners only hear
    /// about effective changes, so a penalty on an empty score is silent.
    pub fn apply(&mut self, delta: i32) {
        let next = self.value.saturating_add_signed(delta);
        if next == self.value {
            return;
        }
        let effective = (next as i64 - self.value as i64) as i32;
        self.value = next;
        self.listeners.emit(&ScoreEvent {
            total: next,
            delta: effective,
        });
    }

    /// Zero the running total for a fresh round. The best is untouched.
    pub fn reset(&mut self) {
        if self.value == 0 {
            return;
        }
        let drop = -(self.value as i64) as i32;
        self.value = 0;
        self.listeners.emit(&ScoreEvent {
            total: 0,
            delta: drop,
        });
    }

    /// Fold the finished round into the session best. Returns whether the
    /// best improved. Ties keep the old best.
    pub fn finalize_round(&mut self) -> bool {
        if self.value > self.best {
            self.best = self.value;
            true
        } else {
            false
        }
    }

    pub fn on_change(&mut self, callback: impl FnMut(&ScoreEvent) + 'static) {
        self.listeners.subscribe(callback);
    }
}
