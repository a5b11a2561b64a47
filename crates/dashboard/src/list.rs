//! Per-list display state shared by the users and roles orchestrators.

/// Lifecycle of a remotely-fetched list.
///
/// Transitions are driven by the owning controller:
/// `Idle → Loading → Ready | Errored`, with every successful mutation
/// triggering a fresh `Loading → Ready`. A failed *refresh* restores the
/// previously displayed rows rather than blanking the view; `Errored` is
/// only reached when there is nothing older to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState<T> {
    Idle,
    Loading,
    Ready(Vec<T>),
    Errored(String),
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        ListState::Idle
    }
}

impl<T> ListState<T> {
    /// Displayed rows, if the list has any.
    pub fn rows(&self) -> Option<&[T]> {
        match self {
            ListState::Ready(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }

    /// Move to `Loading`, handing back any rows currently displayed so the
    /// caller can restore them if the fetch fails.
    pub(crate) fn begin_loading(&mut self) -> Option<Vec<T>> {
        match std::mem::replace(self, ListState::Loading) {
            ListState::Ready(rows) => Some(rows),
            _ => None,
        }
    }

    /// Settle a failed fetch: stale-but-visible beats blank.
    pub(crate) fn settle_failure(&mut self, previous: Option<Vec<T>>, message: String) {
        *self = match previous {
            Some(rows) => ListState::Ready(rows),
            None => ListState::Errored(message),
        };
    }
}

/// One-slot, dismissible user-facing notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
    Unauthorized(String),
}

/// How a requested (and authorized) delete settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Remote delete succeeded.
    Deleted,
    /// The user declined the confirmation prompt.
    Cancelled,
    /// A delete for the same target is already in flight; nothing was
    /// retried.
    AlreadyInProgress,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_failure_becomes_errored() {
        let mut state: ListState<u32> = ListState::Idle;
        let previous = state.begin_loading();
        assert!(previous.is_none());
        assert!(state.is_loading());

        state.settle_failure(previous, "boom".to_string());
        assert_eq!(state, ListState::Errored("boom".to_string()));
    }

    #[test]
    fn refresh_failure_restores_previous_rows() {
        let mut state = ListState::Ready(vec![1, 2, 3]);
        let previous = state.begin_loading();

        state.settle_failure(previous, "boom".to_string());
        assert_eq!(state.rows(), Some([1, 2, 3].as_slice()));
    }
}
