//! Puzzle payload DTOs and the normalizing adapter.
//!
//! The DTOs mirror the backend's JSON shape and are converted into the
//! canonical core model immediately; nothing else in the workspace reads
//! them. Field aliases cover the spellings observed across backend
//! variants. Unknown orientation strings fail deserialization instead of
//! being guessed at.

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use wordweave_core::{BoardDims, Direction, Position, Puzzle, PuzzleError, WordEntry};

/// A puzzle payload as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleDto {
    /// Placed words.
    pub words: Vec<WordDto>,
    /// Board dimensions (`board_size` in current payloads, `size` in older
    /// ones).
    #[serde(alias = "size")]
    pub board_size: BoardSizeDto,
}

/// Board dimensions payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoardSizeDto {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

/// One word of a puzzle payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordDto {
    /// Stable word identifier.
    pub id: String,
    /// Answer text.
    pub word: String,
    /// Clue text (`definition` in current payloads, `clue` in older ones).
    #[serde(alias = "clue")]
    pub definition: String,
    /// Optional clue illustration reference.
    #[serde(default, rename = "clueImage", alias = "clue_image")]
    pub clue_image: Option<String>,
    /// Start cell and orientation.
    pub coordinate: CoordinateDto,
}

/// Start cell and orientation payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinateDto {
    /// Start row (0-based).
    pub row: usize,
    /// Start column (0-based).
    pub col: usize,
    /// Orientation; only `across` and `down` are accepted.
    pub direction: DirectionDto,
}

/// Orientation strings accepted from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionDto {
    /// Letters extend rightward.
    Across,
    /// Letters extend downward.
    Down,
}

impl From<DirectionDto> for Direction {
    fn from(direction: DirectionDto) -> Self {
        match direction {
            DirectionDto::Across => Self::Across,
            DirectionDto::Down => Self::Down,
        }
    }
}

/// Failure to turn a backend payload into a playable puzzle.
///
/// Both variants are fatal to loading and retryable by fetching again; the
/// core never retries on its own.
#[derive(Debug, Display, Error, From)]
pub enum LoadError {
    /// The payload was not valid JSON of the expected shape.
    #[display("malformed puzzle payload: {_0}")]
    Decode(serde_json::Error),
    /// The payload decoded but describes a structurally broken puzzle.
    #[display("invalid puzzle data: {_0}")]
    Puzzle(PuzzleError),
}

impl From<WordDto> for WordEntry {
    fn from(dto: WordDto) -> Self {
        let mut entry = WordEntry::new(
            dto.id,
            dto.word,
            dto.definition,
            Position::new(dto.coordinate.row, dto.coordinate.col),
            dto.coordinate.direction.into(),
        );
        entry.clue_image = dto.clue_image;
        entry
    }
}

impl PuzzleDto {
    /// Normalizes the payload into a validated [`Puzzle`].
    ///
    /// # Errors
    ///
    /// Returns the underlying [`PuzzleError`] when the payload describes a
    /// structurally broken puzzle (out-of-bounds words, conflicting
    /// intersections, duplicate ids, ...).
    pub fn into_puzzle(self) -> Result<Puzzle, PuzzleError> {
        let dims = BoardDims::new(self.board_size.rows, self.board_size.cols);
        let entries = self.words.into_iter().map(WordEntry::from).collect();
        Puzzle::build(entries, dims)
    }
}

/// Decodes and normalizes a puzzle payload in one step.
///
/// # Errors
///
/// Returns [`LoadError::Decode`] for malformed JSON and
/// [`LoadError::Puzzle`] for structurally broken puzzle data; both are
/// logged as warnings.
pub fn parse_puzzle(payload: &str) -> Result<Puzzle, LoadError> {
    let dto: PuzzleDto = serde_json::from_str(payload).inspect_err(|err| {
        log::warn!("rejected puzzle payload: {err}");
    })?;
    dto.into_puzzle()
        .inspect_err(|err| log::warn!("rejected puzzle data: {err}"))
        .map_err(LoadError::from)
}
