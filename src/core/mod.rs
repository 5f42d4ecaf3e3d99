//! Core module - pure game logic with no external dependencies
//!
//! This module contains the grid engine and the game session.
//! It has zero dependencies on UI, terminal I/O, or timers: cosmetic delays
//! are millisecond countdowns advanced by the caller.

pub mod grid;
pub mod layout;
pub mod selection;
pub mod session;

// Re-export commonly used types
pub use grid::Grid;
pub use layout::GridLayout;
pub use selection::line_cells;
pub use session::{GameSession, Puzzle};
