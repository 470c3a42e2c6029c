//! The area-enrichment orchestrator.
//!
//! Drives one run end to end: validate, geocode once, then one places lookup
//! per catalog category in fixed order. Geocode failures are fatal to the
//! run; category failures are isolated and folded into the aggregate result.

use std::sync::Arc;

use hearth_core::catalog::catalog;
use hearth_core::types::{CategoryResult, EnrichmentResult, LocationQuery};
use hearth_maps::{GeocodeError, GeocoderClient, PlacesClient};

use crate::state::{EnrichmentState, RunState};

pub struct Enricher {
    geocoder: Arc<GeocoderClient>,
    places: Arc<PlacesClient>,
    state: Arc<EnrichmentState>,
}

impl Enricher {
    #[must_use]
    pub fn new(
        geocoder: Arc<GeocoderClient>,
        places: Arc<PlacesClient>,
        state: Arc<EnrichmentState>,
    ) -> Self {
        Self {
            geocoder,
            places,
            state,
        }
    }

    /// The shared state this enricher publishes into.
    #[must_use]
    pub fn state(&self) -> &Arc<EnrichmentState> {
        &self.state
    }

    /// Runs one enrichment for `query`.
    ///
    /// An invalid query (either field empty) leaves the state untouched and
    /// makes no network calls. Otherwise the state moves to `Loading` and
    /// ends in `Ready` or `Error`; a run superseded mid-flight completes its
    /// I/O but its terminal transition is discarded.
    pub async fn run(&self, query: &LocationQuery) {
        if !query.is_valid() {
            tracing::debug!("ignoring location query with missing fields");
            return;
        }

        let generation = self.state.begin_run();

        let (coordinate, metadata) = match self.geocoder.geocode(query).await {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::warn!(error = %e, "geocoding failed, aborting run");
                self.state
                    .apply(generation, RunState::Error(geocode_failure_message(&e)));
                return;
            }
        };

        // One category at a time: the shared provider rate-limits, so
        // lookups must not fan out.
        let mut results = Vec::with_capacity(catalog().len());
        for category in catalog() {
            match self.places.nearby(&coordinate, category.provider_type).await {
                Ok(places) => {
                    tracing::debug!(
                        category = category.key,
                        count = places.len(),
                        "category lookup succeeded"
                    );
                    results.push(CategoryResult::success(*category, places));
                }
                Err(e) => {
                    tracing::warn!(
                        category = category.key,
                        error = %e,
                        "category lookup failed, continuing with remaining categories"
                    );
                    results.push(CategoryResult::failure(*category));
                }
            }
        }

        let result = EnrichmentResult {
            coordinate,
            metadata,
            results,
        };
        if !self.state.apply(generation, RunState::Ready(result)) {
            tracing::debug!("discarding result of superseded run");
        }
    }
}

/// User-facing message for a fatal geocode failure.
///
/// A no-match answer names the query; everything else (transport, timeout,
/// malformed body) collapses into a generic connectivity message.
fn geocode_failure_message(err: &GeocodeError) -> String {
    match err {
        GeocodeError::NoResults { .. } => {
            format!("{err}. Please check if the city and postal code are correct.")
        }
        _ => "Unable to connect to the location service. Please try again.".to_owned(),
    }
}
