//! Game session - ties the grid engine to the win condition
//!
//! The session owns the grid, the theme word list, the found-word set, and
//! the completion flag. It also owns the cosmetic flash countdowns for found
//! words and rotated blocks; these are advanced by [`GameSession::tick`] and
//! never feed back into gameplay state. Detection and recording of a found
//! word are atomic: the flash only delays how long the span stays lit.

use crate::core::grid::Grid;
use crate::types::{Coord, FoundWord, Selection, SessionPhase, FOUND_FLASH_MS, ROTATE_FLASH_MS};

/// Static puzzle definition supplied by the caller at session start.
///
/// Theme words are uppercase-normalized on construction; the grid rows are
/// expected to be uppercase already (puzzle data is static).
#[derive(Debug, Clone)]
pub struct Puzzle {
    /// Display label for the puzzle (e.g. "ANIMALS").
    pub theme: String,
    /// The set of strings to find. Order is the display order.
    pub words: Vec<String>,
    pub grid: Grid,
}

impl Puzzle {
    pub fn new(theme: &str, words: &[&str], rows: &[&str]) -> Self {
        Self {
            theme: theme.to_string(),
            words: words.iter().map(|w| w.to_uppercase()).collect(),
            grid: Grid::from_rows(rows),
        }
    }
}

/// A found word still flashing over its grid span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFlash {
    pub word: String,
    pub span: Selection,
    pub remaining_ms: u32,
}

/// A just-rotated block still emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockFlash {
    pub origin: Coord,
    pub remaining_ms: u32,
}

/// Complete session state: grid, found words, completion flag.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    theme: String,
    theme_words: Vec<String>,
    /// Found words in discovery order. Invariant: subset of `theme_words`,
    /// no duplicates, never shrinks.
    found: Vec<String>,
    phase: SessionPhase,
    word_flashes: Vec<WordFlash>,
    block_flash: Option<BlockFlash>,
}

impl GameSession {
    pub fn new(puzzle: Puzzle) -> Self {
        Self {
            grid: puzzle.grid,
            theme: puzzle.theme,
            theme_words: puzzle.words,
            found: Vec::new(),
            phase: SessionPhase::InProgress,
            word_flashes: Vec::new(),
            block_flash: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn theme_words(&self) -> &[String] {
        &self.theme_words
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    pub fn is_found(&self, word: &str) -> bool {
        self.found.iter().any(|w| w == word)
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// True iff every theme word has been found. Irreversible.
    pub fn is_complete(&self) -> bool {
        self.phase == SessionPhase::Complete
    }

    /// Finalize a drag. Extracts the selection's word and, when it is an
    /// unfound theme word, records it and reports the find.
    ///
    /// Words are read forward only (increasing index); a selection whose
    /// reverse spells a theme word is not a find. Non-aligned or
    /// out-of-bounds selections produce no event and no state change.
    pub fn on_selection_completed(&mut self, selection: Selection) -> Option<FoundWord> {
        let word = self.grid.extract_word(selection)?;
        if !self.is_theme_word(&word) || self.is_found(&word) {
            return None;
        }

        self.record_found(&word);

        let (lo, hi) = selection.normalized();
        let span = Selection::new(lo, hi);
        self.word_flashes.push(WordFlash {
            word: word.clone(),
            span,
            remaining_ms: FOUND_FLASH_MS,
        });

        Some(FoundWord { word, span })
    }

    /// Idempotently add a word to the found set and re-evaluate completion.
    ///
    /// Words outside the theme list are ignored, keeping the found set a
    /// subset of the theme words.
    pub fn record_found(&mut self, word: &str) {
        if !self.is_theme_word(word) || self.is_found(word) {
            return;
        }
        self.found.push(word.to_string());
        if self.found.len() == self.theme_words.len() {
            self.phase = SessionPhase::Complete;
        }
    }

    /// Rotate the 2x2 block containing the clicked cell. Rejected for
    /// partial edge blocks; selection state is unaffected either way.
    pub fn rotate_at(&mut self, coord: Coord) -> bool {
        let origin = Grid::block_origin(coord);
        if !self.grid.rotate_block(origin) {
            return false;
        }
        self.block_flash = Some(BlockFlash {
            origin,
            remaining_ms: ROTATE_FLASH_MS,
        });
        true
    }

    /// Advance cosmetic flash countdowns by elapsed milliseconds.
    pub fn tick(&mut self, elapsed_ms: u32) {
        for flash in &mut self.word_flashes {
            flash.remaining_ms = flash.remaining_ms.saturating_sub(elapsed_ms);
        }
        self.word_flashes.retain(|flash| flash.remaining_ms > 0);

        if let Some(flash) = &mut self.block_flash {
            flash.remaining_ms = flash.remaining_ms.saturating_sub(elapsed_ms);
            if flash.remaining_ms == 0 {
                self.block_flash = None;
            }
        }
    }

    /// Found words still flashing over their spans.
    pub fn word_flashes(&self) -> &[WordFlash] {
        &self.word_flashes
    }

    /// The just-rotated block, while still emphasized.
    pub fn block_flash(&self) -> Option<BlockFlash> {
        self.block_flash
    }

    fn is_theme_word(&self, word: &str) -> bool {
        self.theme_words.iter().any(|w| w == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_session() -> GameSession {
        GameSession::new(Puzzle::new(
            "TEST",
            &["CAT"],
            &["CAT", "XXX", "XXX"],
        ))
    }

    #[test]
    fn test_flashes_expire_after_tick() {
        let mut session = cat_session();
        let sel = Selection::new(Coord::new(0, 0), Coord::new(0, 2));
        assert!(session.on_selection_completed(sel).is_some());
        assert!(session.rotate_at(Coord::new(1, 1)));

        assert_eq!(session.word_flashes().len(), 1);
        assert!(session.block_flash().is_some());

        session.tick(ROTATE_FLASH_MS);
        assert!(session.block_flash().is_none());
        assert_eq!(session.word_flashes().len(), 1, "word flash outlives rotate flash");

        session.tick(FOUND_FLASH_MS);
        assert!(session.word_flashes().is_empty());
    }

    #[test]
    fn test_flash_is_cosmetic_only() {
        // Recording is atomic with detection; the session is complete while
        // the flash is still counting down.
        let mut session = cat_session();
        let sel = Selection::new(Coord::new(0, 0), Coord::new(0, 2));
        session.on_selection_completed(sel);
        assert!(session.is_complete());
        assert!(!session.word_flashes().is_empty());
    }

    #[test]
    fn test_record_found_ignores_non_theme_words() {
        let mut session = cat_session();
        session.record_found("DOG");
        assert_eq!(session.found_count(), 0);
        assert!(!session.is_complete());
    }
}
