//! Session reporting contract.
//!
//! The backend persists a game session per play-through; when the puzzle is
//! solved the client reports the final score and completion flag. The
//! returned session record is not consumed by game logic, so only the field
//! set matters here. Transport lives behind [`SessionSink`].

use serde::{Deserialize, Serialize};
use wordweave_game::Game;

/// The payload reported to the session endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Final cumulative score.
    pub score: u32,
    /// Whether every word was completed.
    pub completed: bool,
}

impl SessionReport {
    /// Snapshots a game session's reportable state.
    #[must_use]
    pub fn from_game(game: &Game) -> Self {
        Self {
            score: game.score(),
            completed: game.is_solved(),
        }
    }
}

/// A persisted game-session record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    /// Session identifier.
    pub id: String,
    /// Identifier of the crossword being played.
    pub crossword_id: String,
    /// Player identifier, if authenticated.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Score recorded by the backend.
    pub score: u32,
    /// Completion flag recorded by the backend.
    pub completed: bool,
    /// Session start timestamp (backend-formatted).
    pub start_time: String,
    /// Session end timestamp, once finished.
    #[serde(default)]
    pub end_time: Option<String>,
    /// Record creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Record update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Destination for session reports.
///
/// Implementations own the transport (HTTP, Telegram bridge, an in-memory
/// test double); the game core only ever builds a [`SessionReport`] and
/// hands it over.
pub trait SessionSink {
    /// Transport-specific failure type.
    type Error;

    /// Delivers a report, returning the persisted session record.
    ///
    /// # Errors
    ///
    /// Returns the transport's error; delivery is not retried here.
    fn report(&mut self, report: &SessionReport) -> Result<GameSession, Self::Error>;
}
