//! Backend boundary for the Wordweave crossword game.
//!
//! The backend's puzzle payloads come in slightly divergent spellings
//! (`board_size` vs `size`, `definition` vs `clue`). This crate owns the
//! serde DTOs that accept those shapes, the adapter that normalizes them
//! into the canonical [`wordweave_core`] model, the session-report contract,
//! and a small load-slot state machine that discards fetch results that
//! arrive after they have been superseded.
//!
//! Transport (HTTP, retries, timeouts) stays outside: callers fetch bytes
//! however they like and hand the payload to [`dto::parse_puzzle`], and a
//! [`session::SessionSink`] implementation carries reports back out.

pub mod dto;
pub mod load;
pub mod session;

pub use self::{
    dto::{LoadError, PuzzleDto},
    load::{LoadSlot, LoadState, Ticket},
    session::{GameSession, SessionReport, SessionSink},
};
