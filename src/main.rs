//! Terminal food sorting game (default binary).
//!
//! Crossterm raw-mode input, a pure view over the game state, and a fixed
//! tick driving all countdowns.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_foodsort::core::{GameState, Signal, Signals};
use tui_foodsort::input::{map_key, should_quit};
use tui_foodsort::record::{parse_args, Options, SignalRecorder};
use tui_foodsort::term::{GameView, TerminalRenderer, Viewport};
use tui_foodsort::types::{Basket, GameAction, TICK_MS};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args)?;

    let mut recorder = match &options.record {
        Some(path) => Some(SignalRecorder::create(path)?),
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &options, &mut recorder);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Some(recorder) = &mut recorder {
        recorder.flush()?;
    }
    result
}

fn run(
    term: &mut TerminalRenderer,
    options: &Options,
    recorder: &mut Option<SignalRecorder>,
) -> Result<()> {
    let seed = options.seed.unwrap_or_else(seed_from_time);
    let mut game = GameState::new(seed);
    if options.fast {
        game.toggle_fast();
    }

    let view = GameView::new();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let frame = view.render(&game, Viewport::new(w, h));
        term.draw(&frame)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = map_key(key.code) {
                        let signals = apply_action(&mut game, action);
                        record_signals(recorder, &signals)?;
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let signals = game.tick(TICK_MS);
            record_signals(recorder, &signals)?;
        }
    }
}

fn apply_action(game: &mut GameState, action: GameAction) -> Signals {
    match action {
        GameAction::Start => {
            game.start();
            Signals::new()
        }
        GameAction::Grab(lane) => {
            game.grab(lane);
            Signals::new()
        }
        GameAction::DropLow => game.drop_grabbed(Basket::LowEnergy),
        GameAction::DropHigh => game.drop_grabbed(Basket::HighEnergy),
        GameAction::CancelGrab => {
            game.cancel_grab();
            Signals::new()
        }
        GameAction::ToggleFast => {
            game.toggle_fast();
            Signals::new()
        }
        GameAction::Restart => {
            game.restart();
            Signals::new()
        }
    }
}

fn record_signals(recorder: &mut Option<SignalRecorder>, signals: &[Signal]) -> Result<()> {
    if let Some(recorder) = recorder {
        for signal in signals {
            recorder.write(signal)?;
        }
    }
    Ok(())
}

/// Clock-derived seed for unseeded runs.
fn seed_from_time() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
