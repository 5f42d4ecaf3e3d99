//! GameView: maps a `GameSession` onto a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. The same
//! [`GridLayout`] the view draws with is handed to the pointer layer for
//! hit-testing, so the two can never disagree about where a cell is.

use crate::core::layout::GridLayout;
use crate::core::session::GameSession;
use crate::core::Grid;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Coord, Selection};

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

/// Presentation-only state the session does not own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    /// Cell under the pointer, for the rotation preview.
    pub hovered: Option<Coord>,
    /// In-progress drag highlight.
    pub selection: Option<Selection>,
    /// One-time instructional overlay, shown at session start.
    pub show_tutorial: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            hovered: None,
            selection: None,
            show_tutorial: true,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the word-search playfield, side panel, and overlays.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Wide cells compensate for terminal glyph aspect ratio and give the
        // mouse a comfortable target.
        Self {
            cell_w: 5,
            cell_h: 2,
        }
    }
}

const PANEL_MIN_W: u16 = 14;

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Screen placement of the grid for this viewport. Shared between
    /// rendering and pointer hit-testing.
    pub fn layout(&self, grid: &Grid, viewport: Viewport) -> GridLayout {
        let grid_w = grid.cols() as u16 * self.cell_w;
        let grid_h = grid.rows() as u16 * self.cell_h;
        // Frame border plus right-hand panel.
        let total_w = grid_w + 2 + PANEL_MIN_W;
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(grid_h + 2) / 2;

        GridLayout::new(
            start_x + 1,
            start_y + 1,
            self.cell_w,
            self.cell_h,
            grid.rows(),
            grid.cols(),
        )
    }

    /// Render the current session into a framebuffer.
    pub fn render(&self, session: &GameSession, ui: &UiState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let layout = self.layout(session.grid(), viewport);
        let (grid_w, grid_h) = layout.size();
        let frame_x = layout.origin_x - 1;
        let frame_y = layout.origin_y - 1;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let title = CellStyle::new(Rgb::new(240, 220, 120), Rgb::new(0, 0, 0)).bold();
        let hint = CellStyle::new(Rgb::new(140, 140, 140), Rgb::new(0, 0, 0)).dim();

        fb.put_str(
            frame_x,
            frame_y.saturating_sub(1),
            &format!("THEME: {}", session.theme()),
            title,
        );
        self.draw_border(&mut fb, frame_x, frame_y, grid_w + 2, grid_h + 2, border);

        for row in 0..session.grid().rows() {
            for col in 0..session.grid().cols() {
                let coord = Coord::new(row, col);
                self.draw_grid_cell(&mut fb, session, ui, &layout, coord);
            }
        }

        self.draw_panel(&mut fb, session, frame_x + grid_w + 4, frame_y);

        fb.put_str(
            frame_x,
            frame_y + grid_h + 2,
            "drag: select word   click: rotate block   q: quit",
            hint,
        );

        if session.is_complete() {
            self.draw_complete_banner(&mut fb, frame_x, frame_y, grid_w + 2, grid_h + 2);
        }

        if ui.show_tutorial {
            self.draw_tutorial(&mut fb, session, viewport);
        }

        fb
    }

    fn draw_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        session: &GameSession,
        ui: &UiState,
        layout: &GridLayout,
        coord: Coord,
    ) {
        let base = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(30, 30, 40));
        let selected = CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(220, 190, 70)).bold();
        let found = CellStyle::new(Rgb::new(10, 30, 10), Rgb::new(90, 200, 120)).bold();
        let rotated = CellStyle::new(Rgb::new(230, 230, 255), Rgb::new(100, 100, 200)).bold();
        let preview = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(60, 60, 95));

        let in_drag = ui
            .selection
            .map_or(false, |selection| selection.contains(coord));
        let in_found_flash = session
            .word_flashes()
            .iter()
            .any(|flash| flash.span.contains(coord));
        let in_rotate_flash = session
            .block_flash()
            .map_or(false, |flash| block_contains(flash.origin, coord));
        let in_preview = ui.selection.is_none()
            && ui.hovered.map_or(false, |hovered| {
                session.grid().can_rotate_block(hovered)
                    && block_contains(Grid::block_origin(hovered), coord)
            });

        let style = if in_drag {
            selected
        } else if in_found_flash {
            found
        } else if in_rotate_flash {
            rotated
        } else if in_preview {
            preview
        } else {
            base
        };

        let (x, y) = layout.cell_origin(coord);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);

        let letter = session.grid().get(coord).unwrap_or(' ');
        fb.put_char(x + self.cell_w / 2, y + (self.cell_h - 1) / 2, letter, style);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, session: &GameSession, x: u16, y: u16) {
        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let found = CellStyle::new(Rgb::new(90, 200, 120), Rgb::new(0, 0, 0));
        let masked = CellStyle::new(Rgb::new(140, 140, 140), Rgb::new(0, 0, 0)).dim();

        fb.put_str(x, y, "FOUND", label);
        fb.put_str(
            x + 6,
            y,
            &format!("{}/{}", session.found_count(), session.theme_words().len()),
            label,
        );

        for (i, word) in session.theme_words().iter().enumerate() {
            let row = y + 2 + i as u16;
            if session.is_found(word) {
                fb.put_str(x, row, word, found);
            } else {
                fb.put_str(x, row, "???", masked);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_complete_banner(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(40, 120, 60)).bold();
        let text = " ALL WORDS FOUND! ";
        let text_w = text.chars().count() as u16;
        let bx = x + w.saturating_sub(text_w) / 2;
        let by = y + h / 2;
        fb.put_str(bx, by, text, style);
    }

    fn draw_tutorial(&self, fb: &mut FrameBuffer, session: &GameSession, viewport: Viewport) {
        let frame = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(20, 20, 30));
        let text = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(20, 20, 30));
        let strong = CellStyle::new(Rgb::new(240, 220, 120), Rgb::new(20, 20, 30)).bold();

        let theme_line = format!("The theme is: {}", session.theme());
        let lines: [(&str, CellStyle); 6] = [
            ("HOW TO PLAY", strong),
            ("Drag across letters in a straight line to find words.", text),
            ("Click any cell to rotate its 2x2 block clockwise.", text),
            ("Find all the theme words to win!", text),
            (theme_line.as_str(), strong),
            ("Press any key or click to start.", text),
        ];

        let box_w = (lines
            .iter()
            .map(|(line, _)| line.chars().count())
            .max()
            .unwrap_or(0) as u16)
            + 4;
        let box_h = lines.len() as u16 + 4;
        let bx = viewport.width.saturating_sub(box_w) / 2;
        let by = viewport.height.saturating_sub(box_h) / 2;

        fb.fill_rect(bx, by, box_w, box_h, ' ', frame);
        self.draw_border(fb, bx, by, box_w, box_h, frame);
        for (i, (line, style)) in lines.iter().enumerate() {
            fb.put_str(bx + 2, by + 2 + i as u16, line, *style);
        }
    }
}

fn block_contains(origin: Coord, coord: Coord) -> bool {
    (coord.row == origin.row || coord.row == origin.row + 1)
        && (coord.col == origin.col || coord.col == origin.col + 1)
}
