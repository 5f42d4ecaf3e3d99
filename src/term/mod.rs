//! Terminal rendering module.
//!
//! Renders into a plain framebuffer of styled character cells which is then
//! flushed to the terminal. The view itself is pure (no I/O) so it can be
//! unit-tested; only [`renderer::TerminalRenderer`] touches the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, UiState, Viewport};
pub use renderer::TerminalRenderer;
