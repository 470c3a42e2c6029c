use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

use hearth_core::types::{EnrichmentResult, LocationQuery};
use hearth_enrich::{Enricher, EnrichmentState, RunState};

use super::{bad_request, provider_error, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct EnrichmentParams {
    pub city: String,
    pub postal_code: String,
}

#[derive(Debug, Serialize)]
pub(super) struct EnrichmentData {
    pub status: &'static str,
    pub result: EnrichmentResult,
}

/// Runs a full enrichment server-side and returns its terminal state.
///
/// Each request gets its own state cell, so concurrent requests are
/// independent runs rather than mutually superseding ones.
pub(super) async fn area_enrichment(
    State(state): State<AppState>,
    Query(params): Query<EnrichmentParams>,
) -> Response {
    let query = LocationQuery::new(params.city, params.postal_code);
    if !query.is_valid() {
        return bad_request("city and postal_code are required");
    }

    let enricher = Enricher::new(
        Arc::clone(&state.geocoder),
        Arc::clone(&state.places),
        Arc::new(EnrichmentState::new()),
    );
    enricher.run(&query).await;

    match enricher.state().current() {
        RunState::Ready(result) => Json(EnrichmentData {
            status: "OK",
            result,
        })
        .into_response(),
        RunState::Error(message) => provider_error(message),
        state @ (RunState::Idle | RunState::Loading) => {
            tracing::error!(?state, "enrichment run ended in a non-terminal state");
            provider_error("enrichment did not complete")
        }
    }
}
