//! Core types and tuning constants shared across the application.

use serde::{Deserialize, Serialize};

/// Round sizing defaults.
pub const TOTAL_FOODS: usize = 25;
pub const LANE_COUNT: usize = 3;

/// Upper bound on concurrently visible lanes (sizes per-tick event buffers).
pub const MAX_LANES: usize = 8;

/// Game timing constants (in milliseconds).
pub const TICK_MS: u32 = 50;
pub const NORMAL_FALL_MS: u32 = 10_000;
pub const FAST_FALL_MS: u32 = 5_000;
pub const GLOW_MS: u32 = 400;
pub const SCORE_POP_MS: u32 = 600;
pub const COMPLETE_SETTLE_MS: u32 = 500;

/// Score deltas.
pub const CORRECT_POINTS: i32 = 10;
pub const WRONG_POINTS: i32 = -5;

/// The two baskets foods are sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Basket {
    LowEnergy,
    HighEnergy,
}

impl Basket {
    /// Stable index for per-basket state (glow slots).
    pub fn index(self) -> usize {
        match self {
            Basket::LowEnergy => 0,
            Basket::HighEnergy => 1,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Basket::LowEnergy => Basket::HighEnergy,
            Basket::HighEnergy => Basket::LowEnergy,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Basket::LowEnergy => "Low Energy",
            Basket::HighEnergy => "High Energy",
        }
    }
}

/// Visual feedback flavor for a basket glow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlowKind {
    Correct,
    Wrong,
}

/// Terminal outcome of a single item, assigned exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
    Expired,
}

impl Outcome {
    pub fn is_correct(self) -> bool {
        matches!(self, Outcome::Correct)
    }

    /// Score delta applied for this outcome.
    pub fn points(self) -> i32 {
        match self {
            Outcome::Correct => CORRECT_POINTS,
            Outcome::Incorrect | Outcome::Expired => WRONG_POINTS,
        }
    }
}

/// Where a resolution request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveSource {
    /// Player dropped the item onto a basket.
    Drop(Basket),
    /// The item's countdown reached zero.
    Expire,
}

/// Player-facing actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    /// Pick up the item in the given lane (freezes its countdown).
    Grab(usize),
    DropLow,
    DropHigh,
    CancelGrab,
    ToggleFast,
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_points() {
        assert_eq!(Outcome::Correct.points(), 10);
        assert_eq!(Outcome::Incorrect.points(), -5);
        assert_eq!(Outcome::Expired.points(), -5);
    }

    #[test]
    fn test_basket_other_is_involution() {
        for basket in [Basket::LowEnergy, Basket::HighEnergy] {
            assert_ne!(basket.other(), basket);
            assert_eq!(basket.other().other(), basket);
        }
    }

    #[test]
    fn test_basket_indices_are_distinct() {
        assert_ne!(Basket::LowEnergy.index(), Basket::HighEnergy.index());
    }
}
