//! A single active board cell.

use derive_more::IsVariant;
use tinyvec::ArrayVec;

/// Correctness of a cell's current letter.
///
/// An unfilled cell is neither correct nor incorrect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Correctness {
    /// No letter is placed.
    Empty,
    /// The placed letter matches the expected letter.
    Correct,
    /// The placed letter does not match the expected letter.
    Incorrect,
}

/// An active cell of the grid.
///
/// Blocked board positions have no `Cell` at all; see
/// [`Grid`](crate::Grid). A cell is covered by at most one across word and
/// one down word, so both the covering-word set and the start-number set are
/// inline arrays of capacity two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    expected: char,
    letter: Option<char>,
    words: ArrayVec<[usize; 2]>,
    start_numbers: ArrayVec<[usize; 2]>,
}

impl Cell {
    pub(crate) fn new(expected: char, word_index: usize) -> Self {
        let mut words = ArrayVec::new();
        words.push(word_index);
        Self {
            expected,
            letter: None,
            words,
            start_numbers: ArrayVec::new(),
        }
    }

    pub(crate) fn add_word(&mut self, word_index: usize) {
        self.words.push(word_index);
    }

    pub(crate) fn mark_start(&mut self, number: usize) {
        self.start_numbers.push(number);
    }

    /// The expected (correct) uppercase letter for this cell.
    #[must_use]
    pub fn expected(&self) -> char {
        self.expected
    }

    /// The currently placed letter, if any.
    #[must_use]
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    /// Places a letter, returning the letter it replaced.
    pub fn set_letter(&mut self, letter: char) -> Option<char> {
        self.letter.replace(letter)
    }

    /// Clears the cell, returning the removed letter.
    pub fn clear_letter(&mut self) -> Option<char> {
        self.letter.take()
    }

    /// Indices (into the puzzle's word list) of the words covering this cell.
    #[must_use]
    pub fn word_indices(&self) -> &[usize] {
        &self.words
    }

    /// Returns whether two words cross at this cell.
    #[must_use]
    pub fn is_intersection(&self) -> bool {
        self.words.len() > 1
    }

    /// Returns whether some word starts at this cell.
    #[must_use]
    pub fn is_word_start(&self) -> bool {
        !self.start_numbers.is_empty()
    }

    /// Display numbers of every word starting at this cell.
    ///
    /// A cell can start at most one across and one down word.
    #[must_use]
    pub fn start_numbers(&self) -> &[usize] {
        &self.start_numbers
    }

    /// The single number label to render at this cell, if it starts a word.
    ///
    /// When both an across and a down word start here, the smaller number is
    /// used; both associations remain available via [`Self::start_numbers`].
    #[must_use]
    pub fn start_label(&self) -> Option<usize> {
        self.start_numbers.iter().copied().min()
    }

    /// Compares the current letter against the expected letter.
    #[must_use]
    pub fn correctness(&self) -> Correctness {
        match self.letter {
            None => Correctness::Empty,
            Some(letter) if letter == self.expected => Correctness::Correct,
            Some(_) => Correctness::Incorrect,
        }
    }
}
