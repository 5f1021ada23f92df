//! GameView: maps `core::GameState` into styled terminal lines.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Frames are lines of styled spans rather than a per-cell grid because the
//! food glyphs are double-width emoji; cell-grid diffing would drift a column
//! after every glyph. The renderer redraws whole lines instead.

use crossterm::style::Color;

use crate::core::GameState;
use crate::types::{Basket, GlowKind};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A run of text drawn in one style.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub fg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: None,
            bold: false,
            dim: false,
        }
    }

    pub fn colored(text: impl Into<String>, fg: Color) -> Self {
        Self {
            fg: Some(fg),
            ..Self::plain(text)
        }
    }

    pub fn bold(text: impl Into<String>, fg: Color) -> Self {
        Self {
            bold: true,
            ..Self::colored(text, fg)
        }
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self {
            dim: true,
            ..Self::plain(text)
        }
    }
}

/// One row of the frame.
pub type Line = Vec<Span>;

/// Width of one lane column, in terminal cells.
const LANE_COL_W: usize = 18;

/// A lightweight terminal view for the food sorting game.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render the current game state into a frame of styled lines.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> Vec<Line> {
        let mut frame = if !state.started() {
            self.intro_screen(viewport)
        } else if state.is_finished() {
            self.results_screen(state, viewport)
        } else {
            self.play_screen(state, viewport)
        };
        frame.truncate(viewport.height as usize);
        frame
    }

    fn intro_screen(&self, viewport: Viewport) -> Vec<Line> {
        let mut frame = Vec::new();
        let top = (viewport.height as usize).saturating_sub(10) / 2;
        frame.resize(top, Line::new());

        frame.push(centered(
            viewport,
            Span::bold("HIGH ENERGY OR LOW ENERGY?", Color::Yellow),
        ));
        frame.push(Line::new());
        frame.push(centered(
            viewport,
            Span::plain("Foods fall down the lanes. Sort each one into the"),
        ));
        frame.push(centered(
            viewport,
            Span::plain("right basket before its time runs out."),
        ));
        frame.push(Line::new());
        frame.push(centered(
            viewport,
            Span::plain("+10 for the right basket, -5 for a wrong or missed food."),
        ));
        frame.push(Line::new());
        frame.push(centered(
            viewport,
            Span::dim("1-3 grab a food   <- low energy   high energy ->   Esc put back"),
        ));
        frame.push(Line::new());
        frame.push(centered(
            viewport,
            Span::bold("Press Enter to start", Color::Green),
        ));
        frame.push(centered(viewport, Span::dim("q quits")));
        frame
    }

    fn results_screen(&self, state: &GameState, viewport: Viewport) -> Vec<Line> {
        let total = state.total_count().max(1);
        let correct = state.correct_count();
        let accuracy = (correct * 100 + total / 2) / total;
        let verdict = match accuracy {
            90..=100 => "Amazing! You're an energy expert!",
            70..=89 => "Great job! You know your foods!",
            50..=69 => "Good effort! Keep learning!",
            _ => "Keep practicing! You'll get there!",
        };

        let mut frame = Vec::new();
        let top = (viewport.height as usize).saturating_sub(9) / 2;
        frame.resize(top, Line::new());

        frame.push(centered(viewport, Span::bold("ROUND COMPLETE", Color::Yellow)));
        frame.push(Line::new());
        frame.push(centered(
            viewport,
            Span::bold(format!("FINAL SCORE {}", state.score()), Color::Cyan),
        ));
        frame.push(centered(
            viewport,
            Span::plain(format!(
                "{} of {} sorted correctly ({}%)",
                correct,
                state.total_count(),
                accuracy
            )),
        ));
        frame.push(Line::new());
        frame.push(centered(viewport, Span::colored(verdict, Color::Green)));
        frame.push(Line::new());
        frame.push(centered(viewport, Span::dim("r play again   q quit")));
        frame
    }

    fn play_screen(&self, state: &GameState, viewport: Viewport) -> Vec<Line> {
        let mut frame = Vec::new();

        frame.push(self.header_line(state));
        frame.push(self.progress_line(state));
        frame.push(Line::new());
        frame.push(self.lane_header_line(state));

        // Rows left for the falling area after the fixed chrome.
        let rows = (viewport.height as usize).saturating_sub(8).clamp(4, 16);
        let mut grid: Vec<Line> = vec![Line::new(); rows];
        for (index, lane) in state.lanes().iter().enumerate() {
            let Some(food) = lane.occupant() else {
                continue;
            };
            let row = (lane.progress() * (rows - 1) as f32).round() as usize;
            let row = row.min(rows - 1);

            let label = format!("{} {}", food.emoji, food.name);
            let span = if state.grabbed() == Some(index) {
                Span::bold(label, Color::Yellow)
            } else if lane.progress() > 0.75 {
                Span::colored(label, Color::Red)
            } else {
                Span::plain(label)
            };
            put_in_column(&mut grid[row], index, span);
        }
        frame.extend(grid);

        frame.push(self.basket_line(state));
        frame.push(self.hint_line(state));
        frame
    }

    fn header_line(&self, state: &GameState) -> Line {
        let mut line = vec![Span::bold(format!("SCORE {}", state.score()), Color::Cyan)];
        if let Some((delta, _token)) = state.score_pop() {
            let (text, color) = if delta >= 0 {
                (format!("  +{}", delta), Color::Green)
            } else {
                (format!("  {}", delta), Color::Red)
            };
            line.push(Span::bold(text, color));
        }
        if state.fast_mode() {
            line.push(Span::plain("   "));
            line.push(Span::bold("FAST", Color::Magenta));
        }
        line
    }

    fn progress_line(&self, state: &GameState) -> Line {
        let total = state.total_count().max(1);
        let filled = (state.resolved_count() * 20 / total) as usize;
        let bar: String = "#".repeat(filled) + &"-".repeat(20 - filled);
        vec![
            Span::plain(format!(
                "PROGRESS {:>2}/{} ",
                state.resolved_count(),
                state.total_count()
            )),
            Span::colored(format!("[{}]", bar), Color::Cyan),
        ]
    }

    fn lane_header_line(&self, state: &GameState) -> Line {
        let mut line = Line::new();
        for (index, lane) in state.lanes().iter().enumerate() {
            let header = match lane.occupant() {
                Some(_) if state.grabbed() == Some(index) => format!("[{}] held", index + 1),
                Some(_) => {
                    let secs = lane.remaining_ms() as f32 / 1_000.0;
                    format!("[{}] {:.1}s", index + 1, secs)
                }
                None => format!("[{}]", index + 1),
            };
            let span = if state.grabbed() == Some(index) {
                Span::bold(header, Color::Yellow)
            } else {
                Span::dim(header)
            };
            put_in_column(&mut line, index, span);
        }
        line
    }

    fn basket_line(&self, state: &GameState) -> Line {
        let mut line = vec![Span::dim("<- ")];
        line.push(basket_span(state, Basket::LowEnergy));
        line.push(Span::plain("      "));
        line.push(basket_span(state, Basket::HighEnergy));
        line.push(Span::dim(" ->"));
        line
    }

    fn hint_line(&self, state: &GameState) -> Line {
        let hint = if state.grabbed().is_some() {
            "<- or a: low energy   -> or d: high energy   Esc: put back"
        } else {
            "1-3 grab   f fast   r restart   q quit"
        };
        vec![Span::dim(hint)]
    }
}

/// Pad `line` with spaces so `span` starts at its lane column.
fn put_in_column(line: &mut Line, lane: usize, span: Span) {
    let used: usize = line.iter().map(|s| s.text.chars().count()).sum();
    let target = lane * LANE_COL_W;
    if target > used {
        line.push(Span::plain(" ".repeat(target - used)));
    }
    line.push(span);
}

fn centered(viewport: Viewport, span: Span) -> Line {
    let width = viewport.width as usize;
    let text_w = span.text.chars().count();
    let pad = width.saturating_sub(text_w) / 2;
    if pad == 0 {
        return vec![span];
    }
    vec![Span::plain(" ".repeat(pad)), span]
}

fn basket_span(state: &GameState, basket: Basket) -> Span {
    let label = format!("[ {} ]", basket.label());
    match state.basket_glow(basket) {
        Some(GlowKind::Correct) => Span::bold(label, Color::Green),
        Some(GlowKind::Wrong) => Span::bold(label, Color::Red),
        None => Span::plain(label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TOTAL_FOODS;

    fn text_of(frame: &[Line]) -> String {
        frame
            .iter()
            .map(|line| {
                line.iter()
                    .map(|span| span.text.as_str())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn viewport() -> Viewport {
        Viewport::new(80, 24)
    }

    #[test]
    fn test_intro_screen_before_start() {
        let state = GameState::new(42);
        let frame = GameView::new().render(&state, viewport());
        let text = text_of(&frame);
        assert!(text.contains("Press Enter to start"));
        assert!(!text.contains("SCORE"));
    }

    #[test]
    fn test_play_screen_shows_score_progress_and_lanes() {
        let mut state = GameState::new(42);
        state.start();

        let frame = GameView::new().render(&state, viewport());
        let text = text_of(&frame);
        assert!(text.contains("SCORE 0"));
        assert!(text.contains("PROGRESS  0/25"));
        assert!(text.contains("Low Energy"));
        assert!(text.contains("High Energy"));

        // Every lane occupant appears somewhere in the frame.
        for lane in state.lanes() {
            let food = lane.occupant().unwrap();
            assert!(text.contains(food.name), "missing {}", food.name);
        }
    }

    #[test]
    fn test_held_item_is_marked() {
        let mut state = GameState::new(42);
        state.start();
        assert!(state.grab(1));

        let frame = GameView::new().render(&state, viewport());
        let text = text_of(&frame);
        assert!(text.contains("[2] held"));
        assert!(text.contains("Esc: put back"));
    }

    #[test]
    fn test_score_pop_appears_in_header() {
        let mut state = GameState::new(42);
        state.start();
        let food = *state.lane(0).occupant().unwrap();
        state.on_drop(food.id, 0, food.basket);

        let frame = GameView::new().render(&state, viewport());
        let text = text_of(&frame);
        assert!(text.contains("SCORE 10"));
        assert!(text.contains("+10"));
    }

    #[test]
    fn test_results_screen_rank_messages() {
        let cases: [(fn(&crate::core::Food) -> Basket, &str); 2] = [
            (|food| food.basket, "Amazing! You're an energy expert!"),
            (|food| food.basket.other(), "Keep practicing! You'll get there!"),
        ];

        for (pick, expected) in cases {
            let mut state = GameState::new(42);
            state.start();
            while !state.is_complete() {
                let lane = (0..state.lane_count())
                    .find(|&i| !state.lane(i).is_empty())
                    .unwrap();
                let food = *state.lane(lane).occupant().unwrap();
                state.on_drop(food.id, lane, pick(&food));
            }
            state.tick(1_000);
            assert!(state.is_finished());

            let frame = GameView::new().render(&state, viewport());
            let text = text_of(&frame);
            assert!(text.contains("ROUND COMPLETE"));
            assert!(text.contains(expected), "expected {:?}", expected);
        }
    }

    #[test]
    fn test_frame_fits_viewport_height() {
        let mut state = GameState::new(42);
        state.start();
        for viewport in [Viewport::new(80, 24), Viewport::new(40, 10), Viewport::new(20, 5)] {
            let frame = GameView::new().render(&state, viewport);
            assert!(frame.len() <= viewport.height as usize);
        }
    }

    #[test]
    fn test_progress_bar_fills_with_resolutions() {
        let mut state = GameState::new(42);
        state.start();
        for _ in 0..TOTAL_FOODS / 2 {
            let lane = (0..state.lane_count())
                .find(|&i| !state.lane(i).is_empty())
                .unwrap();
            let food = *state.lane(lane).occupant().unwrap();
            state.on_drop(food.id, lane, food.basket);
        }

        let frame = GameView::new().render(&state, viewport());
        let text = text_of(&frame);
        assert!(text.contains("PROGRESS 12/25"));
        assert!(text.contains("#"));
    }
}
