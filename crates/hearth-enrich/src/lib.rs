//! Area-enrichment orchestration.
//!
//! One enrichment run turns a [`hearth_core::LocationQuery`] into a sequence
//! of view-state transitions: geocode the query once, then look up nearby
//! places for every catalog category in order, tolerating per-category
//! failure. The shared [`EnrichmentState`] carries a generation counter so a
//! superseded run can never overwrite the state of a newer one.

pub mod debounce;
pub mod orchestrator;
pub mod state;

pub use debounce::debounce_submissions;
pub use orchestrator::Enricher;
pub use state::{EnrichmentState, Generation, RunState};
