//! Game state module - ties the round together.
//!
//! Owns the draw sequence, lane scheduler, round accounting, and feedback
//! emitter, and funnels every terminal event (player drop or countdown
//! expiry) through a single `resolve` path. Timer and input events race in
//! the real world; because both arrive on one sequential timeline and
//! `resolve` rejects events whose item no longer occupies its lane, each
//! item is resolved exactly once.

use arrayvec::ArrayVec;

use crate::core::catalog::{draw_items, Food};
use crate::core::feedback::{FeedbackEmitter, Signal};
use crate::core::lanes::{Lane, LaneScheduler};
use crate::core::rng::SimpleRng;
use crate::core::round::RoundState;
use crate::types::{
    Basket, GlowKind, ResolveSource, FAST_FALL_MS, LANE_COUNT, NORMAL_FALL_MS, TOTAL_FOODS,
};

/// Signals produced by one event or tick. Bounded: a resolution emits at
/// most three signals and at most [`crate::types::MAX_LANES`] expiries can
/// land in a single tick.
pub type Signals = ArrayVec<Signal, 32>;

/// Complete state of one play session.
#[derive(Debug, Clone)]
pub struct GameState {
    scheduler: LaneScheduler,
    round: RoundState,
    feedback: FeedbackEmitter,
    /// Lane whose item the player is currently holding, if any.
    grabbed: Option<usize>,
    fast_mode: bool,
    started: bool,
    seed: u32,
    requested_total: usize,
    /// Monotonic id, increments on restart.
    round_id: u32,
}

impl GameState {
    pub fn new(seed: u32) -> Self {
        Self::with_config(seed, TOTAL_FOODS, LANE_COUNT)
    }

    pub fn with_config(seed: u32, total: usize, lane_count: usize) -> Self {
        let mut rng = SimpleRng::new(seed);
        let sequence = draw_items(total, &mut rng);
        let drawn = sequence.len() as u32;

        Self {
            scheduler: LaneScheduler::new(sequence, lane_count, NORMAL_FALL_MS),
            round: RoundState::new(drawn),
            feedback: FeedbackEmitter::new(),
            grabbed: None,
            fast_mode: false,
            started: false,
            seed,
            requested_total: total,
            round_id: 0,
        }
    }

    /// Start the round and fill the lanes with the first foods.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.scheduler.start();
    }

    /// Tear the round down and start a fresh one. Only the round id and the
    /// speed preference carry over; items still in flight get no outcome.
    pub fn restart(&mut self) {
        let next_round = self.round_id.wrapping_add(1);
        let lane_count = self.scheduler.lane_count();
        let fast = self.fast_mode;
        *self = Self::with_config(self.seed.wrapping_add(1), self.requested_total, lane_count);
        self.round_id = next_round;
        if fast {
            self.toggle_fast();
        }
        self.start();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Every item resolved; the terminal signal may still be settling.
    pub fn is_complete(&self) -> bool {
        self.round.is_complete()
    }

    /// The terminal signal has fired; time for the results screen.
    pub fn is_finished(&self) -> bool {
        self.round.is_finished()
    }

    pub fn score(&self) -> i32 {
        self.round.score()
    }

    pub fn correct_count(&self) -> u32 {
        self.round.correct()
    }

    pub fn resolved_count(&self) -> u32 {
        self.round.resolved()
    }

    pub fn total_count(&self) -> u32 {
        self.round.total()
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn fast_mode(&self) -> bool {
        self.fast_mode
    }

    pub fn grabbed(&self) -> Option<usize> {
        self.grabbed
    }

    pub fn lanes(&self) -> &[Lane] {
        self.scheduler.lanes()
    }

    pub fn lane(&self, index: usize) -> &Lane {
        self.scheduler.lane(index)
    }

    pub fn lane_count(&self) -> usize {
        self.scheduler.lane_count()
    }

    pub fn sequence(&self) -> &[Food] {
        self.scheduler.sequence()
    }

    pub fn cursor(&self) -> usize {
        self.scheduler.cursor()
    }

    pub fn score_pop(&self) -> Option<(i32, u32)> {
        self.feedback.score_pop()
    }

    pub fn basket_glow(&self, basket: Basket) -> Option<GlowKind> {
        self.feedback.basket_glow(basket)
    }

    /// Change the fall duration for newly spawned foods.
    pub fn set_fall_duration(&mut self, fall_ms: u32) {
        self.scheduler.set_fall_duration(fall_ms);
    }

    /// Speed toggle: switches between the normal and fast fall durations.
    pub fn toggle_fast(&mut self) {
        self.fast_mode = !self.fast_mode;
        self.scheduler.set_fall_duration(if self.fast_mode {
            FAST_FALL_MS
        } else {
            NORMAL_FALL_MS
        });
    }

    /// Pick up the item in `lane`, freezing its countdown so a slow drag
    /// cannot lose to the clock. Only one item can be held at a time.
    pub fn grab(&mut self, lane: usize) -> bool {
        if !self.started || self.round.is_complete() || self.grabbed.is_some() {
            return false;
        }
        if lane >= self.scheduler.lane_count() || self.scheduler.lane(lane).is_empty() {
            return false;
        }
        self.scheduler.suspend(lane);
        self.grabbed = Some(lane);
        true
    }

    /// Put a held item back without resolving it; its countdown resumes.
    pub fn cancel_grab(&mut self) {
        if let Some(lane) = self.grabbed.take() {
            self.scheduler.resume(lane);
        }
    }

    /// Drop the held item onto a basket.
    pub fn drop_grabbed(&mut self, basket: Basket) -> Signals {
        let Some(lane) = self.grabbed else {
            return Signals::new();
        };
        let Some(item_id) = self.scheduler.occupant_id(lane) else {
            self.grabbed = None;
            return Signals::new();
        };
        self.on_drop(item_id, lane, basket)
    }

    /// A drop event from the input layer.
    pub fn on_drop(&mut self, item_id: u32, lane: usize, basket: Basket) -> Signals {
        self.resolve(item_id, lane, ResolveSource::Drop(basket))
    }

    /// An expiry event for a lane's occupant.
    pub fn on_expire(&mut self, item_id: u32, lane: usize) -> Signals {
        self.resolve(item_id, lane, ResolveSource::Expire)
    }

    /// Single entry point for all terminal events.
    ///
    /// If `item_id` no longer occupies `lane`, the event is stale (lost a
    /// drop/expire race, or was delivered twice) and is silently dropped.
    /// The occupant is removed before any accounting so a re-entrant event
    /// for the same item cannot be accepted either.
    fn resolve(&mut self, item_id: u32, lane: usize, source: ResolveSource) -> Signals {
        assert!(
            lane < self.scheduler.lane_count(),
            "lane {} out of range",
            lane
        );

        let mut signals = Signals::new();
        if !self.started || self.round.is_complete() {
            return signals;
        }
        if self.scheduler.occupant_id(lane) != Some(item_id) {
            return signals;
        }
        let Some(item) = self.scheduler.take(lane) else {
            return signals;
        };
        if self.grabbed == Some(lane) {
            self.grabbed = None;
        }

        let outcome = self.round.apply(&item, source);
        signals.push(self.feedback.score_changed(outcome.points()));
        if let ResolveSource::Drop(basket) = source {
            let kind = if outcome.is_correct() {
                GlowKind::Correct
            } else {
                GlowKind::Wrong
            };
            signals.push(self.feedback.glow(basket, kind));
        }
        signals.push(Signal::Progress {
            resolved: self.round.resolved(),
            total: self.round.total(),
        });

        if !self.round.is_complete() {
            self.scheduler.pull_next(lane);
        }

        signals
    }

    /// Advance all timers by `elapsed_ms`: lane countdowns (expired items
    /// resolve here), feedback display timers, and the completion settle
    /// delay that releases the terminal signal.
    pub fn tick(&mut self, elapsed_ms: u32) -> Signals {
        let mut signals = Signals::new();
        if !self.started {
            return signals;
        }

        self.feedback.tick(elapsed_ms);

        for expiry in self.scheduler.tick(elapsed_ms) {
            for signal in self.on_expire(expiry.item_id, expiry.lane) {
                signals.push(signal);
            }
        }

        if let Some((score, correct)) = self.round.tick(elapsed_ms) {
            signals.push(Signal::RoundComplete { score, correct });
        }

        signals
    }
}
