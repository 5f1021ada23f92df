//! Core module - pure game logic with no I/O dependencies.
//!
//! Contains the food catalog, the lane scheduler, the round state machine,
//! and the feedback emitter, tied together by `GameState`.

pub mod catalog;
pub mod feedback;
pub mod game_state;
pub mod lanes;
pub mod rng;
pub mod round;

// Re-export commonly used types
pub use catalog::{draw_items, Food};
pub use feedback::{FeedbackEmitter, Signal};
pub use game_state::{GameState, Signals};
pub use lanes::{Lane, LaneScheduler};
pub use rng::SimpleRng;
pub use round::RoundState;
