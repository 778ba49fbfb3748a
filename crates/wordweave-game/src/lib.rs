//! Mutable game session for the Wordweave crossword game.
//!
//! A [`Game`] owns everything that changes while the player solves a puzzle:
//! the play grid, the available-letter pool, the completed-word set, the
//! score, and the clue selection. The immutable
//! [`Puzzle`](wordweave_core::Puzzle) it was created from is never touched.
//!
//! Structural puzzle errors are handled at build time in `wordweave-core`;
//! everything here that can fail is an expected interaction edge case
//! (placing a letter that is not in the pool, removing from an empty cell)
//! and is reported as a `bool` rather than an error.
//!
//! # Examples
//!
//! ```
//! use wordweave_core::{BoardDims, Direction, Position, Puzzle, WordEntry};
//! use wordweave_game::Game;
//!
//! let puzzle = Puzzle::build(
//!     vec![WordEntry::new("w1", "cat", "feline", Position::new(0, 0), Direction::Across)],
//!     BoardDims::new(10, 10),
//! )
//! .unwrap();
//! let mut game = Game::new(puzzle);
//!
//! assert!(game.place_letter(Position::new(0, 0), 'c'));
//! assert!(game.place_letter(Position::new(0, 1), 'a'));
//! assert!(game.place_letter(Position::new(0, 2), 't'));
//!
//! assert!(game.is_solved());
//! assert_eq!(game.score(), 30);
//! ```

pub mod game;
pub mod policy;
pub mod pool;

pub use self::{game::Game, policy::CompletionPolicy, pool::LetterPool};
