//! Terminal word-search runner (default binary).
//!
//! Uses crossterm for mouse/keyboard input and a framebuffer-based renderer.
//! All game logic lives in the library; this file only wires events to the
//! session and drives the fixed tick for flash timers.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseEventKind};

use tui_wordsearch::core::{GameSession, Puzzle};
use tui_wordsearch::input::{should_quit, InputEvent, PointerHandler};
use tui_wordsearch::term::{GameView, TerminalRenderer, UiState, Viewport};
use tui_wordsearch::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = GameSession::new(sample_puzzle());
    let view = GameView::default();
    let mut pointer = PointerHandler::new();
    let mut ui = UiState::new();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let fb = view.render(&session, &ui, viewport);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if ui.show_tutorial {
                        ui.show_tutorial = false;
                    }
                }
                Event::Mouse(mouse) => {
                    if ui.show_tutorial {
                        // Any click dismisses the tutorial; swallow the event
                        // so it does not start a selection.
                        if matches!(mouse.kind, MouseEventKind::Down(_)) {
                            ui.show_tutorial = false;
                            pointer.reset();
                        }
                        continue;
                    }

                    let layout = view.layout(session.grid(), viewport);
                    for input in pointer.handle_mouse_event(mouse, &layout) {
                        match input {
                            InputEvent::SelectionChanged(selection) => {
                                ui.selection = Some(selection);
                            }
                            InputEvent::SelectionFinished(selection) => {
                                ui.selection = None;
                                let _found = session.on_selection_completed(selection);
                            }
                            InputEvent::SelectionCancelled => {
                                ui.selection = None;
                            }
                            InputEvent::Clicked(coord) => {
                                let _rotated = session.rotate_at(coord);
                            }
                            InputEvent::HoverMoved(cell) => {
                                ui.hovered = cell;
                            }
                        }
                    }
                }
                Event::Resize(..) => {
                    // Next frame re-renders against the new size.
                }
                _ => {}
            }
        }

        // Tick cosmetic timers.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }
    }
}

/// Built-in sample puzzle. Some words are hidden straight; others only line
/// up after the right block rotations.
fn sample_puzzle() -> Puzzle {
    Puzzle::new(
        "ANIMALS",
        &[
            "CAT", "DOG", "BIRD", "FISH", "BEAR", "LION", "TIGER", "WOLF", "FROG", "SNAKE",
        ],
        &[
            "CATDOGWF",
            "BIRDFIOR",
            "SHBEARLO",
            "LIONTIFG",
            "PENGUINS",
            "SNAKEGER",
            "TIGERATL",
            "MOUSELKY",
        ],
    )
}
