use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

use hearth_core::types::{AreaMetadata, Coordinate, LocationQuery};

use super::{bad_request, provider_error, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct GeocodeParams {
    pub city: String,
    pub postal_code: String,
}

#[derive(Debug, Serialize)]
pub(super) struct GeocodeData {
    pub status: &'static str,
    pub coordinate: Coordinate,
    pub metadata: AreaMetadata,
}

pub(super) async fn geocode(
    State(state): State<AppState>,
    Query(params): Query<GeocodeParams>,
) -> Response {
    let query = LocationQuery::new(params.city, params.postal_code);
    if !query.is_valid() {
        return bad_request("city and postal_code are required");
    }

    match state.geocoder.geocode(&query).await {
        Ok((coordinate, metadata)) => Json(GeocodeData {
            status: "OK",
            coordinate,
            metadata,
        })
        .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "geocode lookup failed");
            provider_error(e.to_string())
        }
    }
}
