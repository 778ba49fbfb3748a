//! Word entries and the numbered words produced by the grid builder.

use derive_more::Display;

use crate::position::{Direction, Position};

/// Stable identifier of a word within a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct WordId(String);

impl WordId {
    /// Creates a new identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for WordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A raw clue/answer entry as accepted at the boundary.
///
/// Entries carry no display number; numbering is assigned by
/// [`Puzzle::build`](crate::Puzzle::build) after sorting by start position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// Unique, stable identifier.
    pub id: WordId,
    /// Answer text, case-insensitive, length >= 1.
    pub answer: String,
    /// Clue text shown to the player.
    pub clue: String,
    /// Optional reference to a clue illustration.
    pub clue_image: Option<String>,
    /// Start cell of the word.
    pub start: Position,
    /// Orientation from the start cell.
    pub direction: Direction,
}

impl WordEntry {
    /// Creates an entry without a clue illustration.
    #[must_use]
    pub fn new(
        id: impl Into<WordId>,
        answer: impl Into<String>,
        clue: impl Into<String>,
        start: Position,
        direction: Direction,
    ) -> Self {
        Self {
            id: id.into(),
            answer: answer.into(),
            clue: clue.into(),
            clue_image: None,
            start,
            direction,
        }
    }

    /// Sets the clue illustration reference.
    #[must_use]
    pub fn with_clue_image(mut self, image: impl Into<String>) -> Self {
        self.clue_image = Some(image.into());
        self
    }
}

/// A word placed on the board, annotated with its display number.
///
/// The answer is normalized to uppercase; all letter comparison in the game
/// happens against these letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    id: WordId,
    answer: String,
    clue: String,
    clue_image: Option<String>,
    start: Position,
    direction: Direction,
    number: usize,
}

impl Word {
    pub(crate) fn from_entry(entry: WordEntry, number: usize) -> Self {
        Self {
            id: entry.id,
            answer: entry.answer.to_uppercase(),
            clue: entry.clue,
            clue_image: entry.clue_image,
            start: entry.start,
            direction: entry.direction,
            number,
        }
    }

    /// Returns the word identifier.
    #[must_use]
    pub fn id(&self) -> &WordId {
        &self.id
    }

    /// Returns the uppercase answer text.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Returns the clue text.
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }

    /// Returns the clue illustration reference, if any.
    #[must_use]
    pub fn clue_image(&self) -> Option<&str> {
        self.clue_image.as_deref()
    }

    /// Returns the start cell.
    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Returns the orientation.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the display number (1-based, assigned in (row, col) order).
    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }

    /// Returns the answer length in letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answer.chars().count()
    }

    /// Returns whether the answer is empty (never true for built puzzles).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }

    /// Iterates over the uppercase answer letters.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.answer.chars()
    }

    /// Iterates over the board positions the word covers, in answer order.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let (start, direction) = (self.start, self.direction);
        (0..self.len()).map(move |i| direction.step(start, i))
    }

    /// Score awarded when this word is completed.
    #[must_use]
    pub fn score_value(&self) -> u32 {
        u32::try_from(self.len()).unwrap_or(u32::MAX).saturating_mul(10)
    }
}
