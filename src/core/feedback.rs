//! Feedback emitter - transient UI signals derived from resolutions.
//!
//! Purely a projection over round-state transitions: it never owns score or
//! counters. Score popups and basket glows are self-expiring; a new signal
//! of the same kind restarts its timer instead of stacking.

use serde::{Deserialize, Serialize};

use crate::types::{Basket, GlowKind, GLOW_MS, SCORE_POP_MS};

/// Output events the presentation layer subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Signal {
    /// `token` is unique per event so identical deltas still replay the
    /// pop-in animation.
    ScoreChanged { delta: i32, token: u32 },
    Glow { basket: Basket, kind: GlowKind },
    Progress { resolved: u32, total: u32 },
    /// Fires exactly once per round.
    RoundComplete { score: i32, correct: u32 },
}

#[derive(Debug, Clone, Copy)]
struct ScorePop {
    delta: i32,
    token: u32,
    remaining_ms: u32,
}

#[derive(Debug, Clone, Copy)]
struct GlowSlot {
    kind: GlowKind,
    remaining_ms: u32,
}

#[derive(Debug, Clone)]
pub struct FeedbackEmitter {
    next_token: u32,
    score_pop: Option<ScorePop>,
    glows: [Option<GlowSlot>; 2],
}

impl FeedbackEmitter {
    pub fn new() -> Self {
        Self {
            next_token: 1,
            score_pop: None,
            glows: [None, None],
        }
    }

    /// Register a score delta and return the signal to publish.
    pub fn score_changed(&mut self, delta: i32) -> Signal {
        let token = self.next_token;
        self.next_token += 1;
        self.score_pop = Some(ScorePop {
            delta,
            token,
            remaining_ms: SCORE_POP_MS,
        });
        Signal::ScoreChanged { delta, token }
    }

    /// Register a basket glow and return the signal to publish.
    pub fn glow(&mut self, basket: Basket, kind: GlowKind) -> Signal {
        self.glows[basket.index()] = Some(GlowSlot {
            kind,
            remaining_ms: GLOW_MS,
        });
        Signal::Glow { basket, kind }
    }

    /// Expire popups and glows whose display time has elapsed.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if let Some(pop) = &mut self.score_pop {
            pop.remaining_ms = pop.remaining_ms.saturating_sub(elapsed_ms);
            if pop.remaining_ms == 0 {
                self.score_pop = None;
            }
        }
        for slot in &mut self.glows {
            if let Some(glow) = slot {
                glow.remaining_ms = glow.remaining_ms.saturating_sub(elapsed_ms);
                if glow.remaining_ms == 0 {
                    *slot = None;
                }
            }
        }
    }

    /// Currently visible score popup, if any.
    pub fn score_pop(&self) -> Option<(i32, u32)> {
        self.score_pop.map(|p| (p.delta, p.token))
    }

    /// Currently visible glow for a basket, if any.
    pub fn basket_glow(&self, basket: Basket) -> Option<GlowKind> {
        self.glows[basket.index()].map(|g| g.kind)
    }
}

impl Default for FeedbackEmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_strictly_increasing() {
        let mut fb = FeedbackEmitter::new();
        let Signal::ScoreChanged { token: a, .. } = fb.score_changed(10) else {
            panic!("expected score signal");
        };
        let Signal::ScoreChanged { token: b, .. } = fb.score_changed(10) else {
            panic!("expected score signal");
        };
        // Same delta, distinct token.
        assert!(b > a);
    }

    #[test]
    fn test_score_pop_expires() {
        let mut fb = FeedbackEmitter::new();
        fb.score_changed(-5);
        assert_eq!(fb.score_pop().map(|(d, _)| d), Some(-5));

        fb.tick(SCORE_POP_MS - 1);
        assert!(fb.score_pop().is_some());
        fb.tick(1);
        assert!(fb.score_pop().is_none());
    }

    #[test]
    fn test_glow_restarts_instead_of_stacking() {
        let mut fb = FeedbackEmitter::new();
        fb.glow(Basket::LowEnergy, GlowKind::Correct);
        fb.tick(GLOW_MS - 100);

        // New glow on the same basket restarts the timer and replaces the kind.
        fb.glow(Basket::LowEnergy, GlowKind::Wrong);
        fb.tick(GLOW_MS - 100);
        assert_eq!(fb.basket_glow(Basket::LowEnergy), Some(GlowKind::Wrong));

        fb.tick(100);
        assert_eq!(fb.basket_glow(Basket::LowEnergy), None);
    }

    #[test]
    fn test_glows_are_scoped_per_basket() {
        let mut fb = FeedbackEmitter::new();
        fb.glow(Basket::HighEnergy, GlowKind::Correct);
        assert_eq!(fb.basket_glow(Basket::LowEnergy), None);
        assert_eq!(fb.basket_glow(Basket::HighEnergy), Some(GlowKind::Correct));
    }

    #[test]
    fn test_signal_serializes_with_type_tag() {
        let json = serde_json::to_string(&Signal::ScoreChanged { delta: 10, token: 3 }).unwrap();
        assert!(json.contains("\"type\":\"score_changed\""));

        let back: Signal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Signal::ScoreChanged { delta: 10, token: 3 });
    }
}
