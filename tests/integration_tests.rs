//! Integration tests - pointer events through the session to completion

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use tui_wordsearch::core::{GameSession, Puzzle};
use tui_wordsearch::input::{InputEvent, PointerHandler};
use tui_wordsearch::term::{GameView, UiState, Viewport};
use tui_wordsearch::types::Coord;

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

/// Drive a full drag across screen positions and apply the results the way
/// the main loop does.
fn drag_cells(
    session: &mut GameSession,
    handler: &mut PointerHandler,
    view: &GameView,
    viewport: Viewport,
    from: Coord,
    to: Coord,
) {
    let layout = view.layout(session.grid(), viewport);
    let (fx, fy) = layout.cell_origin(from);
    let (tx, ty) = layout.cell_origin(to);

    let sequence = [
        mouse(MouseEventKind::Down(MouseButton::Left), fx, fy),
        mouse(MouseEventKind::Drag(MouseButton::Left), tx, ty),
        mouse(MouseEventKind::Up(MouseButton::Left), tx, ty),
    ];

    for event in sequence {
        for input in handler.handle_mouse_event(event, &layout) {
            match input {
                InputEvent::SelectionFinished(selection) => {
                    session.on_selection_completed(selection);
                }
                InputEvent::Clicked(coord) => {
                    session.rotate_at(coord);
                }
                _ => {}
            }
        }
    }
}

fn click_cell(
    session: &mut GameSession,
    handler: &mut PointerHandler,
    view: &GameView,
    viewport: Viewport,
    cell: Coord,
) {
    drag_cells(session, handler, view, viewport, cell, cell);
}

#[test]
fn test_playthrough_to_completion() {
    let mut session = GameSession::new(Puzzle::new(
        "PETS",
        &["CAT", "DOG", "WOLF"],
        &[
            "CATXW", //
            "DOGXO", //
            "XXXXL", //
            "XXXXF", //
            "XXXXX",
        ],
    ));
    let mut handler = PointerHandler::new();
    let view = GameView::default();
    let viewport = Viewport::new(100, 30);

    drag_cells(
        &mut session,
        &mut handler,
        &view,
        viewport,
        Coord::new(0, 0),
        Coord::new(0, 2),
    );
    assert_eq!(session.found_count(), 1);

    // Reversed drag.
    drag_cells(
        &mut session,
        &mut handler,
        &view,
        viewport,
        Coord::new(1, 2),
        Coord::new(1, 0),
    );
    assert_eq!(session.found_count(), 2);
    assert!(!session.is_complete());

    // Vertical word.
    drag_cells(
        &mut session,
        &mut handler,
        &view,
        viewport,
        Coord::new(0, 4),
        Coord::new(3, 4),
    );
    assert_eq!(session.found_count(), 3);
    assert!(session.is_complete());
}

#[test]
fn test_click_rotates_and_enables_a_find() {
    // Row 0 spells ABTX until the first block is rotated clockwise.
    let mut session = GameSession::new(Puzzle::new("TEST", &["CAT"], &["ABTX", "CDXX"]));
    let mut handler = PointerHandler::new();
    let view = GameView::default();
    let viewport = Viewport::new(100, 30);

    drag_cells(
        &mut session,
        &mut handler,
        &view,
        viewport,
        Coord::new(0, 0),
        Coord::new(0, 2),
    );
    assert_eq!(session.found_count(), 0);

    click_cell(&mut session, &mut handler, &view, viewport, Coord::new(0, 0));
    assert_eq!(session.grid().get(Coord::new(0, 0)), Some('C'));
    assert_eq!(session.grid().get(Coord::new(0, 1)), Some('A'));

    drag_cells(
        &mut session,
        &mut handler,
        &view,
        viewport,
        Coord::new(0, 0),
        Coord::new(0, 2),
    );
    assert!(session.is_complete());
}

#[test]
fn test_diagonal_drag_finds_nothing() {
    let mut session = GameSession::new(Puzzle::new("TEST", &["CAT"], &["CAXX", "XATX", "XXTX"]));
    let mut handler = PointerHandler::new();
    let view = GameView::default();
    let viewport = Viewport::new(100, 30);

    drag_cells(
        &mut session,
        &mut handler,
        &view,
        viewport,
        Coord::new(0, 0),
        Coord::new(2, 2),
    );
    assert_eq!(session.found_count(), 0);
}

#[test]
fn test_render_reflects_progress() {
    let mut session = GameSession::new(Puzzle::new("TEST", &["CAT"], &["CAT", "XXX", "XXX"]));
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let ui = UiState {
        hovered: None,
        selection: None,
        show_tutorial: false,
    };

    let text = screen_text(&view.render(&session, &ui, viewport));
    assert!(text.contains("THEME: TEST"));
    assert!(text.contains("0/1"));
    assert!(text.contains("???"));
    assert!(!text.contains("ALL WORDS FOUND!"));

    session.record_found("CAT");
    let text = screen_text(&view.render(&session, &ui, viewport));
    assert!(text.contains("1/1"));
    assert!(text.contains("CAT"));
    assert!(text.contains("ALL WORDS FOUND!"));
}

fn screen_text(fb: &tui_wordsearch::term::FrameBuffer) -> String {
    let mut out = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            out.push(fb.get(x, y).map_or(' ', |cell| cell.ch));
        }
        out.push('\n');
    }
    out
}
