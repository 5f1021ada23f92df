//! Integration tests for the main game loop

use tui_foodsort::core::{GameState, Signal};
use tui_foodsort::input::map_key;
use tui_foodsort::types::{Basket, GameAction, GlowKind, FAST_FALL_MS, NORMAL_FALL_MS, TICK_MS};

use crossterm::event::KeyCode;

fn first_occupied_lane(state: &GameState) -> usize {
    (0..state.lane_count())
        .find(|&i| !state.lane(i).is_empty())
        .expect("some lane occupied")
}

fn apply(state: &mut GameState, action: GameAction) {
    match action {
        GameAction::Start => state.start(),
        GameAction::Grab(lane) => {
            state.grab(lane);
        }
        GameAction::DropLow => {
            state.drop_grabbed(Basket::LowEnergy);
        }
        GameAction::DropHigh => {
            state.drop_grabbed(Basket::HighEnergy);
        }
        GameAction::CancelGrab => state.cancel_grab(),
        GameAction::ToggleFast => state.toggle_fast(),
        GameAction::Restart => state.restart(),
    }
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert!(!state.started());

    state.start();
    assert!(state.started());
    assert_eq!(state.resolved_count(), 0);
    assert!(state.lanes().iter().all(|lane| !lane.is_empty()));
    assert!(!state.is_complete());
}

#[test]
fn test_keyboard_grab_and_drop() {
    let mut state = GameState::new(12345);
    apply(&mut state, map_key(KeyCode::Enter).unwrap());

    // Grab lane 1 via its key, then drop it into its correct basket.
    let food = *state.lane(0).occupant().unwrap();
    apply(&mut state, map_key(KeyCode::Char('1')).unwrap());
    assert_eq!(state.grabbed(), Some(0));

    let drop = match food.basket {
        Basket::LowEnergy => KeyCode::Left,
        Basket::HighEnergy => KeyCode::Right,
    };
    apply(&mut state, map_key(drop).unwrap());

    assert_eq!(state.grabbed(), None);
    assert_eq!(state.score(), 10);
    assert_eq!(state.resolved_count(), 1);
}

#[test]
fn test_cancel_returns_item_unresolved() {
    let mut state = GameState::new(12345);
    state.start();
    let food = *state.lane(2).occupant().unwrap();

    apply(&mut state, map_key(KeyCode::Char('3')).unwrap());
    apply(&mut state, map_key(KeyCode::Esc).unwrap());

    assert_eq!(state.grabbed(), None);
    assert_eq!(state.resolved_count(), 0);
    assert_eq!(state.lane(2).occupant().map(|f| f.id), Some(food.id));
}

#[test]
fn test_drop_without_grab_is_inert() {
    let mut state = GameState::new(12345);
    state.start();

    apply(&mut state, GameAction::DropLow);
    apply(&mut state, GameAction::DropHigh);
    assert_eq!(state.resolved_count(), 0);
    assert_eq!(state.score(), 0);
}

#[test]
fn test_tick_driven_expiries_finish_the_round() {
    let mut state = GameState::new(7);
    state.start();
    state.toggle_fast();

    // Never touch the keyboard; every food expires eventually.
    let mut completions = 0;
    let mut guard = 0;
    while !state.is_finished() {
        for signal in state.tick(TICK_MS) {
            if matches!(signal, Signal::RoundComplete { .. }) {
                completions += 1;
            }
        }
        guard += 1;
        assert!(guard < 100_000, "round never finished");
    }

    assert_eq!(completions, 1);
    assert_eq!(state.resolved_count(), state.total_count());
    assert_eq!(state.correct_count(), 0);
    assert_eq!(state.score(), -5 * state.total_count() as i32);
}

#[test]
fn test_signal_stream_is_consistent() {
    let mut state = GameState::new(99);
    state.start();

    let mut signals = Vec::new();
    let mut last_resolved = 0;
    while !state.is_finished() {
        let lane = if state.is_complete() {
            0
        } else {
            first_occupied_lane(&state)
        };
        if let Some(food) = state.lane(lane).occupant().copied() {
            signals.extend(state.on_drop(food.id, lane, food.basket));
        }
        signals.extend(state.tick(TICK_MS));
    }

    // Progress counts never go backwards and end at the total.
    for signal in &signals {
        if let Signal::Progress { resolved, total } = signal {
            assert!(*resolved > last_resolved);
            assert_eq!(*total, state.total_count());
            last_resolved = *resolved;
        }
    }
    assert_eq!(last_resolved, state.total_count());

    // All-correct play glows green only.
    assert!(signals
        .iter()
        .filter_map(|s| match s {
            Signal::Glow { kind, .. } => Some(*kind),
            _ => None,
        })
        .all(|kind| kind == GlowKind::Correct));
}

#[test]
fn test_fast_toggle_applies_to_new_spawns() {
    let mut state = GameState::new(12345);
    state.start();
    apply(&mut state, map_key(KeyCode::Char('f')).unwrap());

    assert_eq!(state.lane(0).fall_ms(), NORMAL_FALL_MS);
    let food = *state.lane(0).occupant().unwrap();
    state.on_drop(food.id, 0, food.basket);
    assert_eq!(state.lane(0).fall_ms(), FAST_FALL_MS);
}

#[test]
fn test_restart_mid_round() {
    let mut state = GameState::new(12345);
    state.start();
    let food = *state.lane(0).occupant().unwrap();
    state.on_drop(food.id, 0, food.basket.other());
    assert_eq!(state.score(), -5);

    apply(&mut state, map_key(KeyCode::Char('r')).unwrap());
    assert!(state.started());
    assert_eq!(state.score(), 0);
    assert_eq!(state.resolved_count(), 0);
    assert_eq!(state.round_id(), 1);
}

#[test]
fn test_same_seed_same_sequence() {
    let a = GameState::new(4242);
    let b = GameState::new(4242);
    let ids = |state: &GameState| state.sequence().iter().map(|f| f.id).collect::<Vec<_>>();
    assert_eq!(ids(&a), ids(&b));
}
