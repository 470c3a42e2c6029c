//! Client for the Google Geocoding API.

use std::time::Duration;

use reqwest::{Client, Url};

use hearth_core::types::{AreaMetadata, Coordinate, LocationQuery, UNKNOWN_COMPONENT};

use crate::error::GeocodeError;
use crate::types::{AddressComponent, GeocodeResponse};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

const GEOCODE_PATH: &str = "/maps/api/geocode/json";

/// Client for the geocoding endpoint.
///
/// Use [`GeocoderClient::new`] for production or
/// [`GeocoderClient::with_base_url`] to point at a mock server in tests.
pub struct GeocoderClient {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl GeocoderClient {
    /// Creates a new client pointed at the production geocoding API.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, GeocodeError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("hearth/0.1 (area-enrichment)")
            .build()?;

        let invalid = |reason: String| GeocodeError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason,
        };
        let endpoint = Url::parse(base_url.trim_end_matches('/'))
            .and_then(|u| u.join(GEOCODE_PATH))
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
        })
    }

    /// Resolves a location query to a coordinate and administrative metadata.
    ///
    /// Uses the first match only. Address components the provider leaves out
    /// default to `"N/A"` rather than failing the lookup.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::NoResults`] (naming the city and postal code) if
    ///   the provider returns a non-`"OK"` status or an empty match list.
    /// - [`GeocodeError::Http`] on network failure, timeout, or a non-2xx
    ///   HTTP status.
    /// - [`GeocodeError::Deserialize`] if the body is not the expected shape.
    pub async fn geocode(
        &self,
        query: &LocationQuery,
    ) -> Result<(Coordinate, AreaMetadata), GeocodeError> {
        self.geocode_address(&query.address_line())
            .await
            .map_err(|e| match e {
                GeocodeError::NoResults { .. } => GeocodeError::NoResults {
                    query: format!(
                        "{}, {}",
                        query.city.trim(),
                        query.postal_code.trim()
                    ),
                },
                other => other,
            })
    }

    /// Resolves a free-form address line.
    ///
    /// # Errors
    ///
    /// Same conditions as [`GeocoderClient::geocode`]; `NoResults` names the
    /// raw address.
    pub async fn geocode_address(
        &self,
        address: &str,
    ) -> Result<(Coordinate, AreaMetadata), GeocodeError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("address", address)
            .append_pair("key", &self.api_key);

        tracing::debug!(address = %address, "geocoding address");

        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let parsed: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("geocode({address})"),
                source: e,
            })?;

        if parsed.status != "OK" || parsed.results.is_empty() {
            return Err(GeocodeError::NoResults {
                query: address.to_owned(),
            });
        }

        let first = &parsed.results[0];
        let coordinate = Coordinate {
            latitude: first.geometry.location.lat,
            longitude: first.geometry.location.lng,
        };
        let metadata = extract_metadata(&first.address_components);

        Ok((coordinate, metadata))
    }
}

/// Pulls the four administrative components out of a match's component list,
/// defaulting each to `"N/A"` when the tagged type is absent.
fn extract_metadata(components: &[AddressComponent]) -> AreaMetadata {
    let find = |tag: &str| {
        components
            .iter()
            .find(|c| c.types.iter().any(|t| t == tag))
            .map(|c| c.long_name.clone())
            .unwrap_or_else(|| UNKNOWN_COMPONENT.to_owned())
    };

    AreaMetadata {
        neighborhood: find("neighborhood"),
        city: find("locality"),
        county: find("administrative_area_level_2"),
        state: find("administrative_area_level_1"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(long_name: &str, types: &[&str]) -> AddressComponent {
        AddressComponent {
            long_name: long_name.to_owned(),
            types: types.iter().map(|t| (*t).to_owned()).collect(),
        }
    }

    #[test]
    fn extract_metadata_finds_all_components() {
        let components = vec![
            component("Gaslamp Quarter", &["neighborhood", "political"]),
            component("San Diego", &["locality", "political"]),
            component("San Diego County", &["administrative_area_level_2"]),
            component("California", &["administrative_area_level_1"]),
        ];
        let meta = extract_metadata(&components);
        assert_eq!(meta.neighborhood, "Gaslamp Quarter");
        assert_eq!(meta.city, "San Diego");
        assert_eq!(meta.county, "San Diego County");
        assert_eq!(meta.state, "California");
    }

    #[test]
    fn extract_metadata_defaults_missing_components() {
        let components = vec![component("San Diego", &["locality"])];
        let meta = extract_metadata(&components);
        assert_eq!(meta.city, "San Diego");
        assert_eq!(meta.neighborhood, UNKNOWN_COMPONENT);
        assert_eq!(meta.county, UNKNOWN_COMPONENT);
        assert_eq!(meta.state, UNKNOWN_COMPONENT);
    }

    #[test]
    fn extract_metadata_ignores_untagged_components() {
        let components = vec![component("92101", &["postal_code"])];
        let meta = extract_metadata(&components);
        assert_eq!(meta.city, UNKNOWN_COMPONENT);
    }

    #[test]
    fn with_base_url_rejects_garbage() {
        let result = GeocoderClient::with_base_url("k", 5, "not a url");
        assert!(matches!(result, Err(GeocodeError::InvalidBaseUrl { .. })));
    }
}
