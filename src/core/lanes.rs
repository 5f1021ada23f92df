//! Lane scheduler - owns the draw sequence cursor and per-lane countdowns.
//!
//! Each lane holds at most one in-flight food. When a lane is vacated the
//! scheduler pulls the next unseen food from the draw sequence, or leaves
//! the lane empty once the sequence is exhausted. Countdowns are frozen
//! while a lane is suspended (its item is being held by the player).

use arrayvec::ArrayVec;

use crate::core::catalog::Food;
use crate::types::MAX_LANES;

/// A slot that can hold at most one falling food at a time.
#[derive(Debug, Clone)]
pub struct Lane {
    occupant: Option<Food>,
    /// Milliseconds until the occupant expires.
    remaining_ms: u32,
    /// Fall duration the occupant spawned with (denominator for progress).
    fall_ms: u32,
    suspended: bool,
}

impl Lane {
    fn empty() -> Self {
        Self {
            occupant: None,
            remaining_ms: 0,
            fall_ms: 0,
            suspended: false,
        }
    }

    pub fn occupant(&self) -> Option<&Food> {
        self.occupant.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }

    pub fn fall_ms(&self) -> u32 {
        self.fall_ms
    }

    pub fn suspended(&self) -> bool {
        self.suspended
    }

    /// Fraction of the fall completed, in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.occupant.is_none() || self.fall_ms == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_ms as f32 / self.fall_ms as f32)
    }
}

/// An expiry emitted by [`LaneScheduler::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    pub item_id: u32,
    pub lane: usize,
}

/// Assigns foods from the draw sequence to a fixed set of lanes.
#[derive(Debug, Clone)]
pub struct LaneScheduler {
    lanes: Vec<Lane>,
    sequence: Vec<Food>,
    /// Index of the next unseen food; monotone, bounded by `sequence.len()`.
    cursor: usize,
    /// Fall duration applied to newly spawned foods.
    fall_ms: u32,
}

impl LaneScheduler {
    pub fn new(sequence: Vec<Food>, lane_count: usize, fall_ms: u32) -> Self {
        assert!(lane_count > 0 && lane_count <= MAX_LANES);
        Self {
            lanes: vec![Lane::empty(); lane_count],
            sequence,
            cursor: 0,
            fall_ms,
        }
    }

    /// Fill every lane with the first unseen foods. Called once at round start.
    pub fn start(&mut self) {
        for lane in 0..self.lanes.len() {
            if self.lanes[lane].is_empty() {
                self.pull_next(lane);
            }
        }
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn lane(&self, index: usize) -> &Lane {
        &self.lanes[index]
    }

    pub fn sequence(&self) -> &[Food] {
        &self.sequence
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn exhausted(&self) -> bool {
        self.cursor >= self.sequence.len()
    }

    pub fn fall_ms(&self) -> u32 {
        self.fall_ms
    }

    /// Change the countdown duration for newly spawned foods only.
    /// Foods already in flight keep the duration they spawned with.
    pub fn set_fall_duration(&mut self, fall_ms: u32) {
        self.fall_ms = fall_ms;
    }

    pub fn occupant_id(&self, lane: usize) -> Option<u32> {
        self.lanes[lane].occupant.map(|f| f.id)
    }

    /// Remove and return the lane's occupant, resetting its countdown.
    pub fn take(&mut self, lane: usize) -> Option<Food> {
        let slot = &mut self.lanes[lane];
        let food = slot.occupant.take();
        slot.remaining_ms = 0;
        slot.fall_ms = 0;
        slot.suspended = false;
        food
    }

    /// Fill a vacant lane with the next unseen food and restart its
    /// countdown, or leave it empty if the sequence is exhausted.
    ///
    /// Calling this on an occupied lane is a caller error.
    pub fn pull_next(&mut self, lane: usize) {
        debug_assert!(
            self.lanes[lane].is_empty(),
            "pull_next on occupied lane {}",
            lane
        );

        if self.cursor < self.sequence.len() {
            let food = self.sequence[self.cursor];
            self.cursor += 1;
            self.lanes[lane] = Lane {
                occupant: Some(food),
                remaining_ms: self.fall_ms,
                fall_ms: self.fall_ms,
                suspended: false,
            };
        } else {
            self.lanes[lane] = Lane::empty();
        }
    }

    /// Freeze a lane's countdown (item picked up by the player).
    pub fn suspend(&mut self, lane: usize) {
        self.lanes[lane].suspended = true;
    }

    /// Unfreeze a lane's countdown (pickup cancelled).
    pub fn resume(&mut self, lane: usize) {
        self.lanes[lane].suspended = false;
    }

    /// Advance all occupied, non-suspended countdowns by `elapsed_ms`.
    ///
    /// Each occupant whose countdown reaches zero is reported exactly once;
    /// the lane itself is cleared by the caller when it resolves the expiry.
    pub fn tick(&mut self, elapsed_ms: u32) -> ArrayVec<Expiry, MAX_LANES> {
        let mut expired = ArrayVec::new();

        for (index, lane) in self.lanes.iter_mut().enumerate() {
            let Some(food) = lane.occupant else {
                continue;
            };
            if lane.suspended || lane.remaining_ms == 0 {
                continue;
            }

            lane.remaining_ms = lane.remaining_ms.saturating_sub(elapsed_ms);
            if lane.remaining_ms == 0 {
                expired.push(Expiry {
                    item_id: food.id,
                    lane: index,
                });
            }
        }

        expired
    }
}
