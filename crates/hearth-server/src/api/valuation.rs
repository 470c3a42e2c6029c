use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

use crate::predictor::{self, HouseFeatures, Prediction};

use super::{bad_request, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct HouseInput {
    pub address: String,
    #[serde(default)]
    pub price: Option<f64>,
    pub square_footage: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub age: u32,
}

#[derive(Debug, Serialize)]
pub(super) struct PredictionData {
    pub status: &'static str,
    pub prediction: Prediction,
}

/// Values a house. The address is geocoded first so an unresolvable address
/// fails fast instead of producing a valuation for nowhere.
pub(super) async fn predict_house_value(
    State(state): State<AppState>,
    Json(input): Json<HouseInput>,
) -> Response {
    if input.address.trim().is_empty() {
        return bad_request("address is required");
    }

    if let Err(e) = state.geocoder.geocode_address(&input.address).await {
        tracing::warn!(error = %e, "could not geocode valuation address");
        return bad_request("could not geocode address");
    }

    let prediction = predictor::predict(&HouseFeatures {
        price: input.price,
        square_footage: input.square_footage,
        bedrooms: input.bedrooms,
        bathrooms: input.bathrooms,
        age: input.age,
    });

    Json(PredictionData {
        status: "OK",
        prediction,
    })
    .into_response()
}
