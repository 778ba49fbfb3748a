//! The validating grid builder and the built puzzle.

use derive_more::{Display, Error};

use crate::{
    cell::Cell,
    grid::Grid,
    position::{BoardDims, Position},
    word::{Word, WordEntry, WordId},
};

/// Structural defects in puzzle data.
///
/// All of these are fatal to grid construction: no partial puzzle is ever
/// returned, and the presentation layer surfaces them as a load failure.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PuzzleError {
    /// The board has a zero side.
    #[display("degenerate board dimensions {dims}")]
    DegenerateBoard {
        /// The rejected dimensions.
        dims: BoardDims,
    },
    /// The word list is empty.
    ///
    /// A puzzle without words would count as solved before the first
    /// placement.
    #[display("puzzle contains no words")]
    NoWords,
    /// A word has an empty answer.
    #[display("word {id} has an empty answer")]
    EmptyAnswer {
        /// The offending word.
        id: WordId,
    },
    /// Two words share an identifier.
    #[display("duplicate word id {id}")]
    DuplicateWordId {
        /// The duplicated identifier.
        id: WordId,
    },
    /// A word's letters fall outside the board.
    #[display("letter {index} of word {id} falls outside the board")]
    WordOutOfBounds {
        /// The offending word.
        id: WordId,
        /// Zero-based index of the first out-of-bounds letter.
        index: usize,
    },
    /// Two crossing words disagree on the shared cell's letter.
    #[display("words {first} and {second} disagree at {at}: expected '{expected}', found '{found}'")]
    ConflictingIntersection {
        /// The word that claimed the cell first.
        first: WordId,
        /// The word whose letter disagrees.
        second: WordId,
        /// The shared cell.
        at: Position,
        /// Letter recorded by the first word.
        expected: char,
        /// Letter supplied by the second word.
        found: char,
    },
    /// Two words of the same orientation run through the same cell.
    #[display("words {first} and {second} overlap along the same direction at {at}")]
    OverlappingWords {
        /// The word that claimed the cell first.
        first: WordId,
        /// The overlapping word.
        second: WordId,
        /// The shared cell.
        at: Position,
    },
}

/// A validated, immutable crossword puzzle.
///
/// Built once from a word list and board dimensions; the word list is
/// annotated with display numbers and the static grid holds no letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    dims: BoardDims,
    words: Vec<Word>,
    grid: Grid,
}

impl Puzzle {
    /// Builds the cell grid from a word list, validating the puzzle data.
    ///
    /// Words are sorted by (row, col) of their start cell and numbered 1..N
    /// in that order; ties keep the input order. Every letter position is
    /// checked against the board bounds, and crossing words must agree on
    /// the shared letter. Words of the *same* orientation may never share a
    /// cell, even with agreeing letters; a cell belongs to at most one
    /// across and one down word.
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] describing the first structural defect
    /// found; see the variant docs. On error no partial grid escapes.
    pub fn build(entries: Vec<WordEntry>, dims: BoardDims) -> Result<Self, PuzzleError> {
        if dims.rows == 0 || dims.cols == 0 {
            return Err(PuzzleError::DegenerateBoard { dims });
        }
        if entries.is_empty() {
            return Err(PuzzleError::NoWords);
        }

        let mut entries = entries;
        entries.sort_by_key(|entry| (entry.start.row, entry.start.col));

        let mut seen = std::collections::BTreeSet::new();
        for entry in &entries {
            if entry.answer.is_empty() {
                return Err(PuzzleError::EmptyAnswer {
                    id: entry.id.clone(),
                });
            }
            if !seen.insert(entry.id.clone()) {
                return Err(PuzzleError::DuplicateWordId {
                    id: entry.id.clone(),
                });
            }
        }

        let words: Vec<Word> = entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| Word::from_entry(entry, i + 1))
            .collect();

        let mut grid = Grid::empty(dims);
        for (word_index, word) in words.iter().enumerate() {
            for (letter_index, letter) in word.letters().enumerate() {
                let pos = word.direction().step(word.start(), letter_index);
                if !dims.contains(pos) {
                    return Err(PuzzleError::WordOutOfBounds {
                        id: word.id().clone(),
                        index: letter_index,
                    });
                }
                let slot = grid
                    .slot_mut(pos)
                    .unwrap_or_else(|| unreachable!("position {pos} is in bounds"));
                match slot {
                    Some(cell) => {
                        let first = words[cell.word_indices()[0]].id().clone();
                        if cell.expected() != letter {
                            return Err(PuzzleError::ConflictingIntersection {
                                first,
                                second: word.id().clone(),
                                at: pos,
                                expected: cell.expected(),
                                found: letter,
                            });
                        }
                        if cell
                            .word_indices()
                            .iter()
                            .any(|&i| words[i].direction() == word.direction())
                        {
                            return Err(PuzzleError::OverlappingWords {
                                first,
                                second: word.id().clone(),
                                at: pos,
                            });
                        }
                        cell.add_word(word_index);
                    }
                    None => *slot = Some(Cell::new(letter, word_index)),
                }
            }
        }

        for word in &words {
            let cell = grid
                .cell_mut(word.start())
                .unwrap_or_else(|| unreachable!("start cell of {} is active", word.id()));
            cell.mark_start(word.number());
        }

        Ok(Self { dims, words, grid })
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn dims(&self) -> BoardDims {
        self.dims
    }

    /// Returns the numbered words, in display-number order.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Looks up a word by its identifier.
    #[must_use]
    pub fn word(&self, id: &WordId) -> Option<&Word> {
        self.words.iter().find(|word| word.id() == id)
    }

    /// Returns the static grid (all letters unset).
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Words covering the cell at `pos`.
    pub fn words_at(&self, pos: Position) -> impl Iterator<Item = &Word> {
        self.grid
            .cell(pos)
            .map(Cell::word_indices)
            .unwrap_or_default()
            .iter()
            .map(|&i| &self.words[i])
    }

    /// Collects one expected letter per active cell, in row-major order.
    ///
    /// Intersections contribute a single letter, so the pool size equals the
    /// active-cell count. Presentation order is the game session's concern.
    #[must_use]
    pub fn letter_pool(&self) -> Vec<char> {
        self.grid
            .active_cells()
            .map(|(_, cell)| cell.expected())
            .collect()
    }
}
