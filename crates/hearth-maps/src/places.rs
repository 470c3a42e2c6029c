//! Client for the Places API (New) `searchNearby` endpoint.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Serialize;

use hearth_core::types::{Coordinate, Place};

use crate::error::PlacesError;
use crate::types::{NearbyResponse, PlaceRecord};

const DEFAULT_BASE_URL: &str = "https://places.googleapis.com";

const SEARCH_PATH: &str = "/v1/places:searchNearby";

/// Fields requested from the provider. Anything outside the mask is omitted
/// from the response, so the mask and [`PlaceRecord`] must stay in sync.
const FIELD_MASK: &str = "places.id,places.displayName,places.location,places.formattedAddress";

/// Upper bound on places kept per category, provider order preserved.
pub const MAX_NEARBY_RESULTS: usize = 3;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NearbyRequest<'a> {
    location_restriction: LocationRestriction,
    included_types: [&'a str; 1],
}

#[derive(Serialize)]
struct LocationRestriction {
    circle: Circle,
}

#[derive(Serialize)]
struct Circle {
    center: Center,
    radius: f64,
}

#[derive(Serialize)]
struct Center {
    latitude: f64,
    longitude: f64,
}

/// Client for nearby-place lookups.
///
/// Stateless per call and retry-free; one instance serves every category.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    radius_m: u32,
    endpoint: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, radius_m: u32) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, radius_m, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        radius_m: u32,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("hearth/0.1 (area-enrichment)")
            .build()?;

        let endpoint = Url::parse(base_url.trim_end_matches('/'))
            .and_then(|u| u.join(SEARCH_PATH))
            .map_err(|e| PlacesError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            radius_m,
            endpoint,
        })
    }

    /// Looks up places of one provider type near a coordinate.
    ///
    /// Returns at most [`MAX_NEARBY_RESULTS`] places in provider order.
    /// Records without a coordinate are dropped as malformed; a missing id
    /// is replaced with a generated one and a missing display name with
    /// `"Unnamed Place"`, so sparse records still render.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network failure, timeout, or a non-2xx
    ///   HTTP status.
    /// - [`PlacesError::Deserialize`] if the body is not the expected shape.
    pub async fn nearby(
        &self,
        coordinate: &Coordinate,
        provider_type: &str,
    ) -> Result<Vec<Place>, PlacesError> {
        let request = NearbyRequest {
            location_restriction: LocationRestriction {
                circle: Circle {
                    center: Center {
                        latitude: coordinate.latitude,
                        longitude: coordinate.longitude,
                    },
                    radius: f64::from(self.radius_m),
                },
            },
            included_types: [provider_type],
        };

        tracing::debug!(
            provider_type,
            latitude = coordinate.latitude,
            longitude = coordinate.longitude,
            "nearby-places lookup"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", FIELD_MASK)
            .json(&request)
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let parsed: NearbyResponse =
            serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
                context: format!("searchNearby({provider_type})"),
                source: e,
            })?;

        Ok(parsed
            .places
            .into_iter()
            .filter_map(into_place)
            .take(MAX_NEARBY_RESULTS)
            .collect())
    }
}

/// Converts one wire record into a domain [`Place`], or drops it when the
/// provider gave no usable coordinate.
fn into_place(record: PlaceRecord) -> Option<Place> {
    let Some(location) = record.location else {
        tracing::debug!("skipping place record without a location");
        return None;
    };

    let name = record
        .display_name
        .map(|d| d.text)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Unnamed Place".to_owned());

    let id = record
        .id
        .filter(|i| !i.is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    Some(Place {
        id,
        name,
        location: Coordinate {
            latitude: location.latitude,
            longitude: location.longitude,
        },
        address: record.formatted_address,
    })
}
