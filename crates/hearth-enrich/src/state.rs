//! Enrichment view state.
//!
//! A single shared state value with exactly one writer (the active-generation
//! run) and any number of readers. Readers either poll [`EnrichmentState::current`]
//! or subscribe to change notifications; nothing else may mutate the state.

use std::sync::{Mutex, PoisonError};

use tokio::sync::watch;

use hearth_core::types::EnrichmentResult;

/// Lifecycle of one enrichment run as seen by the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub enum RunState {
    Idle,
    Loading,
    Ready(EnrichmentResult),
    Error(String),
}

/// Token identifying one run.
///
/// Issued by [`EnrichmentState::begin_run`]; transitions carrying a
/// superseded token are discarded silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// The shared state cell.
///
/// `begin_run` and `apply` take the counter lock together with the publish,
/// so a transition can never slip in between a newer run's token bump and
/// its `Loading` publication.
pub struct EnrichmentState {
    generation: Mutex<u64>,
    tx: watch::Sender<RunState>,
}

impl EnrichmentState {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = watch::channel(RunState::Idle);
        Self {
            generation: Mutex::new(0),
            tx,
        }
    }

    /// Starts a new run: bumps the generation and publishes `Loading`.
    ///
    /// Any previously Ready/Error content is hidden the instant the new run
    /// begins; results still in flight under older tokens become stale.
    pub fn begin_run(&self) -> Generation {
        let mut current = self
            .generation
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *current += 1;
        self.tx.send_replace(RunState::Loading);
        Generation(*current)
    }

    /// Applies a transition if `generation` is still the current run's.
    ///
    /// Returns `false` (and leaves the state untouched) when the token has
    /// been superseded by a newer `begin_run`.
    pub fn apply(&self, generation: Generation, state: RunState) -> bool {
        let current = self
            .generation
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if generation.0 != *current {
            return false;
        }
        self.tx.send_replace(state);
        true
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn current(&self) -> RunState {
        self.tx.borrow().clone()
    }

    /// Change-notification subscription for rendering layers.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RunState> {
        self.tx.subscribe()
    }
}

impl Default for EnrichmentState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use hearth_core::types::{AreaMetadata, Coordinate};

    use super::*;

    fn ready_state() -> RunState {
        RunState::Ready(EnrichmentResult {
            coordinate: Coordinate {
                latitude: 0.0,
                longitude: 0.0,
            },
            metadata: AreaMetadata::default(),
            results: Vec::new(),
        })
    }

    #[test]
    fn starts_idle() {
        let state = EnrichmentState::new();
        assert_eq!(state.current(), RunState::Idle);
    }

    #[test]
    fn begin_run_publishes_loading() {
        let state = EnrichmentState::new();
        state.begin_run();
        assert_eq!(state.current(), RunState::Loading);
    }

    #[test]
    fn begin_run_issues_distinct_tokens() {
        let state = EnrichmentState::new();
        let first = state.begin_run();
        let second = state.begin_run();
        assert_ne!(first, second);
    }

    #[test]
    fn current_generation_transition_is_applied() {
        let state = EnrichmentState::new();
        let generation = state.begin_run();
        assert!(state.apply(generation, ready_state()));
        assert!(matches!(state.current(), RunState::Ready(_)));
    }

    #[test]
    fn stale_generation_transition_is_discarded() {
        let state = EnrichmentState::new();
        let stale = state.begin_run();
        let fresh = state.begin_run();

        assert!(!state.apply(stale, RunState::Error("late failure".to_owned())));
        assert_eq!(state.current(), RunState::Loading);

        assert!(state.apply(fresh, ready_state()));
        assert!(matches!(state.current(), RunState::Ready(_)));

        // The stale run keeps losing even after the fresh run finished.
        assert!(!state.apply(stale, RunState::Error("very late".to_owned())));
        assert!(matches!(state.current(), RunState::Ready(_)));
    }

    #[test]
    fn new_run_hides_previous_terminal_content() {
        let state = EnrichmentState::new();
        let generation = state.begin_run();
        state.apply(generation, ready_state());

        state.begin_run();
        assert_eq!(state.current(), RunState::Loading);
    }

    #[tokio::test]
    async fn subscribers_see_transitions() {
        let state = EnrichmentState::new();
        let mut rx = state.subscribe();

        let generation = state.begin_run();
        rx.changed().await.expect("sender alive");
        assert_eq!(*rx.borrow(), RunState::Loading);

        state.apply(generation, ready_state());
        rx.changed().await.expect("sender alive");
        assert!(matches!(*rx.borrow(), RunState::Ready(_)));
    }
}
