//! Pointer handler: maps mouse events onto the drag lifecycle.
//!
//! Mirrors the gesture rules of the game: press begins a selection, drag
//! extends it while the pointer stays aligned with the start cell, release
//! finalizes it. A release on the start cell without intermediate movement
//! is also a click, which rotates the block under the cell.

use arrayvec::ArrayVec;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::core::layout::GridLayout;
use crate::types::{Coord, Selection};

/// Logical input derived from raw pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The in-progress drag highlight changed.
    SelectionChanged(Selection),
    /// A drag ended on a grid cell. The selection may be non-aligned or a
    /// single cell; the session decides what it means.
    SelectionFinished(Selection),
    /// A drag ended outside the grid; discard the highlight.
    SelectionCancelled,
    /// Press and release on the same cell with no movement in between.
    Clicked(Coord),
    /// Pointer hover position changed while not dragging.
    HoverMoved(Option<Coord>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragState {
    Idle,
    Dragging {
        start: Coord,
        /// Last aligned cell the pointer visited; the highlight endpoint.
        end: Coord,
        moved: bool,
    },
}

/// Drag lifecycle state machine.
#[derive(Debug, Clone)]
pub struct PointerHandler {
    state: DragState,
}

impl PointerHandler {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Feed one mouse event; returns the logical events it produced.
    ///
    /// At most two events come out of a single mouse event (a click is both
    /// a degenerate selection and a rotation request, as in the original
    /// game where mouse-up and click both fire).
    pub fn handle_mouse_event(
        &mut self,
        event: MouseEvent,
        layout: &GridLayout,
    ) -> ArrayVec<InputEvent, 2> {
        let mut out = ArrayVec::new();
        let cell = layout.cell_at(event.column, event.row);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(start) = cell {
                    self.state = DragState::Dragging {
                        start,
                        end: start,
                        moved: false,
                    };
                    let _ = out.try_push(InputEvent::SelectionChanged(Selection::new(
                        start, start,
                    )));
                }
                // Press outside the grid starts nothing.
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                // Drag without a preceding press is a no-op.
                if let DragState::Dragging { start, end, moved } = &mut self.state {
                    if let Some(cell) = cell {
                        if cell != *start {
                            *moved = true;
                        }
                        // Only an aligned cell may become the new endpoint;
                        // a diagonal excursion leaves the highlight where
                        // it was.
                        let aligned =
                            cell.row == start.row || cell.col == start.col;
                        if aligned && cell != *end {
                            *end = cell;
                            let _ = out.try_push(InputEvent::SelectionChanged(
                                Selection::new(*start, cell),
                            ));
                        }
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                // Release without a preceding press is a no-op.
                if let DragState::Dragging { start, moved, .. } = self.state {
                    self.state = DragState::Idle;
                    match cell {
                        Some(cell) => {
                            let _ = out.try_push(InputEvent::SelectionFinished(
                                Selection::new(start, cell),
                            ));
                            if !moved && cell == start {
                                let _ = out.try_push(InputEvent::Clicked(cell));
                            }
                        }
                        None => {
                            let _ = out.try_push(InputEvent::SelectionCancelled);
                        }
                    }
                }
            }
            MouseEventKind::Moved => {
                if !self.is_dragging() {
                    let _ = out.try_push(InputEvent::HoverMoved(cell));
                }
            }
            _ => {}
        }

        out
    }

    /// Abandon any in-progress drag (e.g. on focus loss).
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }
}

impl Default for PointerHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Global quit keys: `q`, `Esc`, `Ctrl-C`.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => {
            key.modifiers.contains(KeyModifiers::CONTROL)
        }
        _ => false,
    }
}
