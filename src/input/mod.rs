//! Input module - pointer drag lifecycle for terminal mouse input
//!
//! Translates raw crossterm mouse events into logical game input. The
//! handler is a small state machine (idle -> dragging -> idle) and tolerates
//! out-of-order delivery: a drag or release without a preceding press is a
//! no-op.

pub mod handler;

pub use handler::{should_quit, InputEvent, PointerHandler};
