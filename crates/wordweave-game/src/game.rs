//! The game session: placement, removal, completion, and scoring.

use std::collections::BTreeSet;

use rand::Rng;
use wordweave_core::{Cell, Correctness, Grid, Position, Puzzle, Word, WordId};

use crate::{policy::CompletionPolicy, pool::LetterPool};

/// A crossword game session.
///
/// Owns the mutable play state derived from an immutable
/// [`Puzzle`]: the play grid (letters cleared), the remaining letter pool,
/// the completed-word set, the cumulative score, and the clue selection.
/// All operations are synchronous and atomic: a `false` return means
/// nothing changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    puzzle: Puzzle,
    grid: Grid,
    pool: LetterPool,
    completed: BTreeSet<WordId>,
    scored: BTreeSet<WordId>,
    score: u32,
    selected: Option<WordId>,
    policy: CompletionPolicy,
}

impl Game {
    /// Creates a session with the default (monotonic) completion policy.
    ///
    /// The pool is in row-major cell order; call [`Self::shuffle_pool`] to
    /// randomize presentation.
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        Self::with_policy(puzzle, CompletionPolicy::default())
    }

    /// Creates a session with an explicit completion policy.
    #[must_use]
    pub fn with_policy(puzzle: Puzzle, policy: CompletionPolicy) -> Self {
        let grid = puzzle.grid().cleared();
        let pool = LetterPool::new(puzzle.letter_pool());
        Self {
            puzzle,
            grid,
            pool,
            completed: BTreeSet::new(),
            scored: BTreeSet::new(),
            score: 0,
            selected: None,
            policy,
        }
    }

    /// Discards all progress and restores the initial session state.
    pub fn reset(&mut self) {
        self.grid = self.puzzle.grid().cleared();
        self.pool = LetterPool::new(self.puzzle.letter_pool());
        self.completed.clear();
        self.scored.clear();
        self.score = 0;
        self.selected = None;
    }

    /// Shuffles the letter pool's presentation order.
    pub fn shuffle_pool(&mut self, rng: &mut impl Rng) {
        self.pool.shuffle(rng);
    }

    /// Returns the immutable puzzle this session was created from.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the play grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the available-letter pool.
    #[must_use]
    pub fn pool(&self) -> &LetterPool {
        &self.pool
    }

    /// Returns the cumulative score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the completed-word set.
    #[must_use]
    pub fn completed_words(&self) -> &BTreeSet<WordId> {
        &self.completed
    }

    /// Returns the session's completion policy.
    #[must_use]
    pub fn policy(&self) -> CompletionPolicy {
        self.policy
    }

    /// Correctness of the cell at `pos`, or `None` for a blocked position.
    #[must_use]
    pub fn correctness(&self, pos: Position) -> Option<Correctness> {
        self.grid.cell(pos).map(Cell::correctness)
    }

    /// Places a letter from the pool onto the cell at `pos`.
    ///
    /// The letter is uppercased for comparison. Fails without any state
    /// change if the position is blocked or the letter is not in the pool.
    /// On success any replaced letter returns to the pool, and completion
    /// and score are updated.
    pub fn place_letter(&mut self, pos: Position, letter: char) -> bool {
        let letter = normalize(letter);
        if !self.pool.contains(letter) {
            log::debug!("rejected placement of '{letter}' at {pos}: not in pool");
            return false;
        }
        let Some(cell) = self.grid.cell_mut(pos) else {
            log::debug!("rejected placement of '{letter}' at {pos}: blocked cell");
            return false;
        };

        let replaced = cell.set_letter(letter);
        let taken = self.pool.take(letter);
        debug_assert!(taken);
        if let Some(replaced) = replaced {
            self.pool.put_back(replaced);
        }

        self.update_completion();
        true
    }

    /// Removes the letter at `pos`, returning it to the pool.
    ///
    /// Fails without any state change if the position is blocked or the
    /// cell is already empty. Under the monotonic policy this can never
    /// shrink the completed set or lower the score.
    pub fn remove_letter(&mut self, pos: Position) -> bool {
        let Some(cell) = self.grid.cell_mut(pos) else {
            return false;
        };
        let Some(removed) = cell.clear_letter() else {
            return false;
        };
        self.pool.put_back(removed);

        self.update_completion();
        true
    }

    /// Returns whether the word's cells currently spell its answer.
    ///
    /// This is the live check against the grid; under the monotonic policy
    /// the completed set may say otherwise for previously finished words.
    #[must_use]
    pub fn is_word_complete(&self, id: &WordId) -> bool {
        self.puzzle
            .word(id)
            .is_some_and(|word| word_filled(word, &self.grid))
    }

    /// Returns whether every word of the puzzle has been completed.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.completed.len() == self.puzzle.words().len()
    }

    /// Returns the currently selected word, if any.
    #[must_use]
    pub fn selected_word(&self) -> Option<&Word> {
        self.selected.as_ref().and_then(|id| self.puzzle.word(id))
    }

    /// Selects the word with the given id, or deselects it if it is already
    /// selected. Returns `false` for an unknown id.
    pub fn toggle_selection(&mut self, id: &WordId) -> bool {
        if self.puzzle.word(id).is_none() {
            return false;
        }
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.clone());
        }
        true
    }

    /// Clears the clue selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    fn update_completion(&mut self) {
        for word in self.puzzle.words() {
            if word_filled(word, &self.grid) {
                if self.completed.insert(word.id().clone()) {
                    log::debug!("word {} completed", word.id());
                }
                if self.scored.insert(word.id().clone()) {
                    self.score += word.score_value();
                }
            } else if self.policy.is_revocable() {
                self.completed.remove(word.id());
            }
        }
        if self.is_solved() {
            log::debug!("puzzle solved, score {}", self.score);
        }
    }
}

fn word_filled(word: &Word, grid: &Grid) -> bool {
    word.cells()
        .zip(word.letters())
        .all(|(pos, expected)| grid.cell(pos).is_some_and(|cell| cell.letter() == Some(expected)))
}

fn normalize(letter: char) -> char {
    letter.to_uppercase().next().unwrap_or(letter)
}

#[cfg(test)]
mod tests {
    use wordweave_core::{BoardDims, Direction, WordEntry};

    use super::*;

    fn single_word_game() -> Game {
        let puzzle = Puzzle::build(
            vec![WordEntry::new(
                "w1",
                "cat",
                "feline",
                Position::new(0, 0),
                Direction::Across,
            )],
            BoardDims::new(10, 10),
        )
        .unwrap();
        Game::new(puzzle)
    }

    fn crossing_game(policy: CompletionPolicy) -> Game {
        let puzzle = Puzzle::build(
            vec![
                WordEntry::new("across", "cat", "feline", Position::new(0, 0), Direction::Across),
                WordEntry::new("down", "cage", "enclosure", Position::new(0, 0), Direction::Down),
            ],
            BoardDims::new(10, 10),
        )
        .unwrap();
        Game::with_policy(puzzle, policy)
    }

    #[test]
    fn test_single_word_play_through() {
        let mut game = single_word_game();
        assert_eq!(game.pool().len(), 3);

        assert!(game.place_letter(Position::new(0, 0), 'c'));
        assert!(game.place_letter(Position::new(0, 1), 'a'));
        assert!(!game.is_word_complete(&WordId::new("w1")));
        assert!(game.place_letter(Position::new(0, 2), 't'));

        assert!(game.is_word_complete(&WordId::new("w1")));
        assert!(game.is_solved());
        assert_eq!(game.score(), 30);
        assert!(game.pool().is_empty());
    }

    #[test]
    fn test_crossing_words_share_pool_letter() {
        let mut game = crossing_game(CompletionPolicy::default());
        // Six active cells, six pool letters (shared 'C' contributes once).
        assert_eq!(game.pool().len(), 6);

        for (pos, letter) in [
            (Position::new(0, 0), 'C'),
            (Position::new(0, 1), 'A'),
            (Position::new(0, 2), 'T'),
            (Position::new(1, 0), 'A'),
            (Position::new(2, 0), 'G'),
            (Position::new(3, 0), 'E'),
        ] {
            assert!(game.place_letter(pos, letter));
        }

        assert!(game.is_solved());
        assert_eq!(game.score(), 30 + 40);
        assert!(game.pool().is_empty());
    }

    #[test]
    fn test_place_letter_not_in_pool_changes_nothing() {
        let mut game = single_word_game();
        let pool_before = game.pool().counts();

        assert!(!game.place_letter(Position::new(0, 0), 'z'));
        assert_eq!(game.pool().counts(), pool_before);
        assert_eq!(game.correctness(Position::new(0, 0)), Some(Correctness::Empty));
    }

    #[test]
    fn test_place_letter_on_blocked_cell_changes_nothing() {
        let mut game = single_word_game();
        let pool_before = game.pool().counts();

        assert!(!game.place_letter(Position::new(5, 5), 'c'));
        assert_eq!(game.pool().counts(), pool_before);
    }

    #[test]
    fn test_place_then_remove_round_trips_pool() {
        let mut game = single_word_game();
        let pool_before = game.pool().counts();

        assert!(game.place_letter(Position::new(0, 1), 'a'));
        assert!(game.remove_letter(Position::new(0, 1)));
        assert_eq!(game.pool().counts(), pool_before);
        assert_eq!(game.correctness(Position::new(0, 1)), Some(Correctness::Empty));
    }

    #[test]
    fn test_remove_from_empty_cell_fails() {
        let mut game = single_word_game();
        assert!(!game.remove_letter(Position::new(0, 0)));
        assert!(!game.remove_letter(Position::new(9, 9)));
    }

    #[test]
    fn test_replacing_a_letter_returns_old_one_to_pool() {
        let mut game = single_word_game();

        // Misplace 'T' at the first cell, then overwrite with 'C'.
        assert!(game.place_letter(Position::new(0, 0), 't'));
        assert_eq!(game.correctness(Position::new(0, 0)), Some(Correctness::Incorrect));
        assert!(game.place_letter(Position::new(0, 0), 'c'));
        assert_eq!(game.correctness(Position::new(0, 0)), Some(Correctness::Correct));

        // 'T' is back in the pool.
        assert!(game.pool().contains('T'));
        assert_eq!(game.pool().len(), 2);
    }

    #[test]
    fn test_monotonic_completion_survives_letter_removal() {
        let mut game = single_word_game();
        for (pos, letter) in [
            (Position::new(0, 0), 'c'),
            (Position::new(0, 1), 'a'),
            (Position::new(0, 2), 't'),
        ] {
            assert!(game.place_letter(pos, letter));
        }
        assert_eq!(game.score(), 30);

        assert!(game.remove_letter(Position::new(0, 1)));
        assert!(game.completed_words().contains(&WordId::new("w1")));
        assert!(game.is_solved());
        assert_eq!(game.score(), 30);

        // Restoring the letter does not re-award points.
        assert!(game.place_letter(Position::new(0, 1), 'a'));
        assert_eq!(game.score(), 30);
    }

    #[test]
    fn test_revocable_policy_shrinks_completed_set_but_never_rescores() {
        let mut game = crossing_game(CompletionPolicy::Revocable);
        for (pos, letter) in [
            (Position::new(0, 0), 'c'),
            (Position::new(0, 1), 'a'),
            (Position::new(0, 2), 't'),
        ] {
            assert!(game.place_letter(pos, letter));
        }
        assert!(game.completed_words().contains(&WordId::new("across")));
        assert_eq!(game.score(), 30);

        assert!(game.remove_letter(Position::new(0, 2)));
        assert!(!game.completed_words().contains(&WordId::new("across")));
        assert!(!game.is_solved());

        assert!(game.place_letter(Position::new(0, 2), 't'));
        assert!(game.completed_words().contains(&WordId::new("across")));
        assert_eq!(game.score(), 30);
    }

    #[test]
    fn test_selection_toggles() {
        let mut game = crossing_game(CompletionPolicy::default());
        let id = WordId::new("down");

        assert!(game.toggle_selection(&id));
        assert_eq!(game.selected_word().map(|w| w.id().clone()), Some(id.clone()));
        assert!(game.toggle_selection(&id));
        assert!(game.selected_word().is_none());

        assert!(!game.toggle_selection(&WordId::new("missing")));

        assert!(game.toggle_selection(&id));
        game.clear_selection();
        assert!(game.selected_word().is_none());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut game = single_word_game();
        let pool_before = game.pool().counts();

        assert!(game.place_letter(Position::new(0, 0), 'c'));
        assert!(game.place_letter(Position::new(0, 1), 'a'));
        assert!(game.place_letter(Position::new(0, 2), 't'));
        game.reset();

        assert_eq!(game.pool().counts(), pool_before);
        assert_eq!(game.score(), 0);
        assert!(game.completed_words().is_empty());
        assert!(!game.is_solved());
        assert_eq!(game.correctness(Position::new(0, 0)), Some(Correctness::Empty));
    }

    #[test]
    fn test_wordless_puzzle_cannot_become_a_session() {
        // Without this rejection a fresh session would report solved with
        // zero placements.
        let result = Puzzle::build(Vec::new(), BoardDims::new(5, 5));
        assert_eq!(result, Err(wordweave_core::PuzzleError::NoWords));
    }

    #[test]
    fn test_lowercase_input_matches_uppercase_answer() {
        let mut game = single_word_game();
        assert!(game.place_letter(Position::new(0, 0), 'c'));
        assert_eq!(game.grid().cell(Position::new(0, 0)).unwrap().letter(), Some('C'));
    }
}
