//! Core data structures for the Wordweave crossword game.
//!
//! This crate provides the immutable puzzle model shared by the game session
//! and client boundary crates. A puzzle is built once from a word list and
//! board dimensions, validated structurally, and never mutated afterwards.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Coordinates** - board geometry
//!    - [`position`]: [`Position`], [`Direction`], and [`BoardDims`]
//! 2. **Words** - clue/answer entries placed on the board
//!    - [`word`]: the raw [`WordEntry`] accepted at the boundary and the
//!      numbered [`Word`] produced by the builder
//! 3. **The grid** - the 2-D cell matrix and its builder
//!    - [`cell`]: a single active cell with its expected letter, covering
//!      words, and start numbers
//!    - [`grid`]: the `rows x cols` matrix (blocked cells are absent)
//!    - [`puzzle`]: [`Puzzle::build`], the validating grid builder
//!
//! # Examples
//!
//! ```
//! use wordweave_core::{BoardDims, Direction, Position, Puzzle, WordEntry};
//!
//! let words = vec![WordEntry::new(
//!     "w1",
//!     "cat",
//!     "feline",
//!     Position::new(0, 0),
//!     Direction::Across,
//! )];
//! let puzzle = Puzzle::build(words, BoardDims::new(10, 10)).unwrap();
//!
//! assert_eq!(puzzle.grid().active_cell_count(), 3);
//! assert_eq!(puzzle.words()[0].number(), 1);
//! assert_eq!(puzzle.letter_pool(), vec!['C', 'A', 'T']);
//! ```

pub mod cell;
pub mod grid;
pub mod position;
pub mod puzzle;
pub mod word;

pub use self::{
    cell::{Cell, Correctness},
    grid::Grid,
    position::{BoardDims, Direction, Position},
    puzzle::{Puzzle, PuzzleError},
    word::{Word, WordEntry, WordId},
};
