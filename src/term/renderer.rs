//! TerminalRenderer: flushes view frames to a real terminal.
//!
//! Frames are redrawn line by line. The food glyphs are double-width emoji,
//! so each changed row is cleared and reprinted whole rather than diffed per
//! cell.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::game_view::{Line, Span};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Vec<Line>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: Vec::new(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint every line.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last.clear();
    }

    /// Draw a frame, repainting only the lines that changed.
    pub fn draw(&mut self, frame: &[Line]) -> Result<()> {
        let rows = frame.len().max(self.last.len());
        for y in 0..rows {
            let next = frame.get(y);
            if next == self.last.get(y) {
                continue;
            }

            self.stdout.queue(cursor::MoveTo(0, y as u16))?;
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
            if let Some(line) = next {
                for span in line {
                    self.print_span(span)?;
                }
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        self.last = frame.to_vec();
        Ok(())
    }

    fn print_span(&mut self, span: &Span) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        if let Some(fg) = span.fg {
            self.stdout.queue(SetForegroundColor(fg))?;
        }
        if span.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if span.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        self.stdout.queue(Print(span.text.as_str()))?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
