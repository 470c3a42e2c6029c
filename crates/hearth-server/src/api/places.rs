use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

use hearth_core::types::{Coordinate, Place};

use super::{bad_request, provider_error, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct NearbyParams {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "type")]
    pub provider_type: String,
}

#[derive(Debug, Serialize)]
pub(super) struct NearbyData {
    pub status: &'static str,
    pub results: Vec<Place>,
}

pub(super) async fn nearby_places(
    State(state): State<AppState>,
    Query(params): Query<NearbyParams>,
) -> Response {
    if params.provider_type.trim().is_empty() {
        return bad_request("type is required");
    }

    let coordinate = Coordinate {
        latitude: params.latitude,
        longitude: params.longitude,
    };

    match state.places.nearby(&coordinate, &params.provider_type).await {
        Ok(results) => Json(NearbyData {
            status: "OK",
            results,
        })
        .into_response(),
        Err(e) => {
            tracing::warn!(provider_type = %params.provider_type, error = %e, "nearby lookup failed");
            provider_error(e.to_string())
        }
    }
}
