//! Terminal module - rendering and raw-mode session management.

pub mod game_view;
pub mod renderer;

pub use game_view::{GameView, Line, Span, Viewport};
pub use renderer::TerminalRenderer;
