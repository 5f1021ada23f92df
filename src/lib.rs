//! TUI food sorting game.
//!
//! Foods fall down a handful of lanes; the player drops each one into the
//! low-energy or high-energy basket before its countdown runs out. The
//! `core` module holds all game rules; `term` renders to a terminal via
//! crossterm; `input` maps keys to game actions; `record` optionally logs
//! the emitted signal stream as JSON lines.

pub mod core;
pub mod input;
pub mod record;
pub mod term;
pub mod types;
