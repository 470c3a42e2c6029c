//! HTTP clients for the external location providers.
//!
//! [`GeocoderClient`] resolves a free-text location to a coordinate plus
//! administrative metadata via the Google Geocoding API; [`PlacesClient`]
//! looks up nearby points of interest for one category via the Places API
//! (New) `searchNearby` endpoint. Both are stateless per call, never retry,
//! and expose a `with_base_url` constructor so tests can point them at a
//! mock server.

mod geocode;
mod places;

pub mod error;
pub mod types;

pub use error::{GeocodeError, PlacesError};
pub use geocode::GeocoderClient;
pub use places::{PlacesClient, MAX_NEARBY_RESULTS};
