//! Stale-result handling for asynchronous loads.
//!
//! The only asynchrony the game core sees is the fetch of puzzle or session
//! data. A fetch may be superseded (the player asks for a new puzzle) or
//! abandoned (the consuming view goes away); a result that arrives for an
//! outdated request must be discarded, never applied to state that has
//! moved on. [`LoadSlot`] enforces that with a generation ticket.

use derive_more::IsVariant;

/// Proof of having started a specific load.
///
/// Returned by [`LoadSlot::begin`]; [`LoadSlot::accept`] only applies a
/// result carrying the ticket of the newest load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Observable state of a load slot.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum LoadState<T, E> {
    /// Nothing requested yet, or the last request was cancelled.
    Idle,
    /// A request is in flight.
    Loading,
    /// The newest request succeeded.
    Ready(T),
    /// The newest request failed; retry by calling `begin` again.
    Failed(E),
}

/// A single-value slot for the result of the newest asynchronous load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSlot<T, E> {
    state: LoadState<T, E>,
    generation: u64,
}

impl<T, E> Default for LoadSlot<T, E> {
    fn default() -> Self {
        Self {
            state: LoadState::Idle,
            generation: 0,
        }
    }
}

impl<T, E> LoadSlot<T, E> {
    /// Creates an idle slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new load, superseding any in-flight one.
    ///
    /// The returned ticket must accompany the result to [`Self::accept`].
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = LoadState::Loading;
        Ticket(self.generation)
    }

    /// Abandons the in-flight load, if any.
    ///
    /// Results for already-issued tickets will be discarded.
    pub fn cancel(&mut self) {
        self.generation += 1;
        if self.state.is_loading() {
            self.state = LoadState::Idle;
        }
    }

    /// Applies a finished load's result if its ticket is still current.
    ///
    /// Returns `true` if the result was applied, `false` if it was stale
    /// and discarded.
    pub fn accept(&mut self, ticket: Ticket, result: Result<T, E>) -> bool {
        if ticket.0 != self.generation {
            log::debug!(
                "discarding stale load result (ticket {}, current {})",
                ticket.0,
                self.generation
            );
            return false;
        }
        self.state = match result {
            Ok(value) => LoadState::Ready(value),
            Err(err) => LoadState::Failed(err),
        };
        true
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &LoadState<T, E> {
        &self.state
    }

    /// Returns the loaded value, if ready.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match &self.state {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the newest failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<&E> {
        match &self.state {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Returns whether a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Slot = LoadSlot<u32, &'static str>;

    #[test]
    fn test_accept_applies_current_ticket() {
        let mut slot = Slot::new();
        let ticket = slot.begin();
        assert!(slot.is_loading());

        assert!(slot.accept(ticket, Ok(7)));
        assert_eq!(slot.value(), Some(&7));
    }

    #[test]
    fn test_superseded_result_is_discarded() {
        let mut slot = Slot::new();
        let first = slot.begin();
        let second = slot.begin();

        // The first fetch finishes late; its result must not clobber the
        // newer request.
        assert!(!slot.accept(first, Ok(1)));
        assert!(slot.is_loading());

        assert!(slot.accept(second, Ok(2)));
        assert_eq!(slot.value(), Some(&2));
    }

    #[test]
    fn test_cancel_discards_pending_result() {
        let mut slot = Slot::new();
        let ticket = slot.begin();
        slot.cancel();

        assert!(slot.state().is_idle());
        assert!(!slot.accept(ticket, Ok(1)));
        assert!(slot.state().is_idle());
    }

    #[test]
    fn test_failure_is_retryable() {
        let mut slot = Slot::new();
        let ticket = slot.begin();
        assert!(slot.accept(ticket, Err("network down")));
        assert_eq!(slot.error(), Some(&"network down"));

        let retry = slot.begin();
        assert!(slot.accept(retry, Ok(3)));
        assert_eq!(slot.value(), Some(&3));
    }

    #[test]
    fn test_cancel_then_ready_stays_ready_until_new_begin() {
        let mut slot = Slot::new();
        let ticket = slot.begin();
        assert!(slot.accept(ticket, Ok(5)));

        // Cancelling with a ready value keeps it; only loading is abandoned.
        slot.cancel();
        assert_eq!(slot.value(), Some(&5));
    }
}
