//! HTTP API surface.
//!
//! Provider failures keep HTTP 200 with an `{"status": "ERROR", ...}`
//! envelope — the contract the demo frontend consumes. Input validation
//! failures return 400 with the same envelope shape.

mod enrichment;
mod geocode;
mod places;
mod valuation;

use std::sync::Arc;

use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use hearth_maps::{GeocoderClient, PlacesClient};

#[derive(Clone)]
pub struct AppState {
    pub geocoder: Arc<GeocoderClient>,
    pub places: Arc<PlacesClient>,
}

/// Error envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub error: String,
}

impl ErrorBody {
    fn new(error: impl Into<String>) -> Self {
        Self {
            status: "ERROR",
            error: error.into(),
        }
    }
}

/// A provider-side failure: 200 with an ERROR envelope.
pub(super) fn provider_error(message: impl Into<String>) -> Response {
    Json(ErrorBody::new(message)).into_response()
}

/// A caller mistake: 400 with an ERROR envelope.
pub(super) fn bad_request(message: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorBody::new(message))).into_response()
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    message: &'static str,
}

async fn health() -> Json<HealthData> {
    Json(HealthData {
        status: "healthy",
        message: "API is running",
    })
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/geocode", get(geocode::geocode))
        .route("/api/nearby-places", get(places::nearby_places))
        .route("/api/area-enrichment", get(enrichment::area_enrichment))
        .route(
            "/api/predict-house-value",
            post(valuation::predict_house_value),
        )
        .layer(build_cors())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    fn test_state() -> AppState {
        let geocoder =
            GeocoderClient::with_base_url("test-key", 1, "http://127.0.0.1:1").unwrap();
        let places =
            PlacesClient::with_base_url("test-key", 1, 3000, "http://127.0.0.1:1").unwrap();
        AppState {
            geocoder: Arc::new(geocoder),
            places: Arc::new(places),
        }
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let app = build_app(test_state());
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["status"], "healthy");
    }

    #[tokio::test]
    async fn geocode_requires_both_query_fields() {
        let app = build_app(test_state());
        let response = app
            .oneshot(
                Request::get("/api/geocode?city=San%20Diego&postal_code=")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["status"], "ERROR");
    }

    #[tokio::test]
    async fn unreachable_provider_yields_error_envelope() {
        // The test state points at a closed port, so the provider call fails
        // at the transport layer.
        let app = build_app(test_state());
        let response = app
            .oneshot(
                Request::get("/api/geocode?city=San%20Diego&postal_code=92101")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["status"], "ERROR");
    }
}
