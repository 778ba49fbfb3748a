//! Session policies.

use derive_more::IsVariant;

/// How word completion reacts to letters changing after a word was filled.
///
/// The shipped game never re-checks a word once it is complete: removing or
/// overwriting one of its letters keeps the word in the completed set and
/// keeps its points. That behavior is the default here; `Revocable` is the
/// stricter alternative for rule sets that want the completed set to always
/// reflect the current grid. Points are awarded at most once per word under
/// both policies, and the score never decreases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IsVariant)]
pub enum CompletionPolicy {
    /// Completion is one-way: the completed set only grows.
    #[default]
    Monotonic,
    /// The completed set is re-derived from the grid after every operation.
    Revocable,
}
