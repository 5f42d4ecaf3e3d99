//! Terminal word-search puzzle.
//!
//! A fixed letter grid hides a set of theme words. The player drags across
//! cells in a straight line (horizontal or vertical) to select a word, and
//! clicks a cell to rotate the fixed 2x2 block containing it clockwise,
//! reshuffling the letters. Finding every theme word completes the session.
//!
//! Module layout:
//!
//! - [`types`]: shared pure data types (coordinates, selections, events)
//! - [`core`]: grid engine and game session; pure, deterministic, no I/O
//! - [`input`]: pointer drag lifecycle fed from crossterm mouse events
//! - [`term`]: framebuffer, terminal renderer, and the game view

pub mod core;
pub mod input;
pub mod term;
pub mod types;
