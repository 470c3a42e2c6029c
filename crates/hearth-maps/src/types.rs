//! Wire types for the two location providers.
//!
//! The geocoding API uses snake_case fields (`address_components`,
//! `long_name`); the Places API (New) uses camelCase (`displayName`,
//! `formattedAddress`). Optional fields carry `#[serde(default)]` so a
//! sparse provider response degrades instead of failing deserialization.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Geocoding API
// ---------------------------------------------------------------------------

/// Top-level envelope of a geocoding response.
///
/// `status` is `"OK"` on success; any other value, or an empty `results`
/// list, means the query matched nothing.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeMatch>,
}

/// A single geocoder match.
#[derive(Debug, Deserialize)]
pub struct GeocodeMatch {
    pub geometry: Geometry,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// One tagged address component (`locality`, `neighborhood`, ...).
#[derive(Debug, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

// ---------------------------------------------------------------------------
// Places API (New) searchNearby
// ---------------------------------------------------------------------------

/// Response envelope for `places:searchNearby`.
///
/// The provider omits the `places` key entirely when nothing is nearby, so
/// a missing key deserializes to an empty list rather than an error.
#[derive(Debug, Deserialize)]
pub struct NearbyResponse {
    #[serde(default)]
    pub places: Vec<PlaceRecord>,
}

/// One place record as returned by the provider.
///
/// Every field is optional on the wire; the client substitutes fallbacks
/// (generated id, placeholder name) or skips the record (no coordinate).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: Option<LocalizedText>,
    #[serde(default)]
    pub location: Option<PlaceLatLng>,
    #[serde(default)]
    pub formatted_address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct PlaceLatLng {
    pub latitude: f64,
    pub longitude: f64,
}
