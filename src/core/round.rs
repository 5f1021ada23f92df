//! Round state - cumulative score, counters, and completion detection.
//!
//! This is pure accounting: the idempotence guard against duplicate or late
//! events lives in `GameState::resolve`, which only calls [`RoundState::apply`]
//! after an item has been confirmed and removed from its lane.

use crate::core::catalog::Food;
use crate::types::{Outcome, ResolveSource, COMPLETE_SETTLE_MS};

#[derive(Debug, Clone)]
pub struct RoundState {
    total: u32,
    score: i32,
    correct: u32,
    resolved: u32,
    /// Delay between the final resolution and the terminal signal, so the
    /// last bit of feedback gets a moment on screen. Counted state is
    /// already final when this starts.
    settle_ms: Option<u32>,
    complete_emitted: bool,
}

impl RoundState {
    pub fn new(total: u32) -> Self {
        Self {
            total,
            score: 0,
            correct: 0,
            resolved: 0,
            settle_ms: None,
            complete_emitted: false,
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// May go negative; there is no floor.
    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Items resolved by any means. Never decremented.
    pub fn resolved(&self) -> u32 {
        self.resolved
    }

    /// Every item has been resolved. One-way transition.
    pub fn is_complete(&self) -> bool {
        self.resolved == self.total
    }

    /// The terminal signal has been emitted; the round is fully over.
    pub fn is_finished(&self) -> bool {
        self.complete_emitted
    }

    /// Record the terminal outcome for one confirmed item.
    pub fn apply(&mut self, item: &Food, source: ResolveSource) -> Outcome {
        debug_assert!(!self.is_complete(), "apply after round completion");

        let outcome = match source {
            ResolveSource::Drop(basket) => {
                if basket == item.basket {
                    Outcome::Correct
                } else {
                    Outcome::Incorrect
                }
            }
            ResolveSource::Expire => Outcome::Expired,
        };

        self.score += outcome.points();
        if outcome.is_correct() {
            self.correct += 1;
        }
        self.resolved += 1;

        if self.is_complete() {
            self.settle_ms = Some(COMPLETE_SETTLE_MS);
        }

        outcome
    }

    /// Advance the settle delay. Returns `(score, correct)` exactly once,
    /// when the terminal signal should fire.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<(i32, u32)> {
        let remaining = self.settle_ms?;
        let remaining = remaining.saturating_sub(elapsed_ms);

        if remaining > 0 {
            self.settle_ms = Some(remaining);
            return None;
        }

        self.settle_ms = None;
        if self.complete_emitted {
            return None;
        }
        self.complete_emitted = true;
        Some((self.score, self.correct))
    }
}
