//! The multiset of letters not yet placed on the board.

use std::collections::BTreeMap;

use rand::{Rng, seq::SliceRandom as _};

/// An unordered multiset of single uppercase letters.
///
/// The pool starts with one letter per active cell of the puzzle grid
/// (intersections contribute once). Order carries no gameplay meaning; it
/// exists only so a letter tray can be rendered, and [`Self::shuffle`]
/// randomizes it uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    letters: Vec<char>,
}

impl LetterPool {
    /// Creates a pool from the given letters.
    #[must_use]
    pub fn new(letters: Vec<char>) -> Self {
        Self { letters }
    }

    /// Returns the letters in presentation order.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns whether the pool is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns whether at least one occurrence of `letter` remains.
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Removes one occurrence of `letter`.
    ///
    /// Returns `false` and leaves the pool unchanged if the letter is not
    /// present. The remaining letters keep their presentation order.
    pub fn take(&mut self, letter: char) -> bool {
        match self.letters.iter().position(|&l| l == letter) {
            Some(index) => {
                self.letters.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns one occurrence of `letter` to the pool.
    pub fn put_back(&mut self, letter: char) {
        self.letters.push(letter);
    }

    /// Shuffles the presentation order uniformly (Fisher-Yates).
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.letters.shuffle(rng);
    }

    /// Occurrence count per letter, for multiset comparison.
    #[must_use]
    pub fn counts(&self) -> BTreeMap<char, usize> {
        let mut counts = BTreeMap::new();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}
