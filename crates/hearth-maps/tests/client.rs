//! Integration tests for the provider clients using wiremock HTTP mocks.

use hearth_core::types::{Coordinate, LocationQuery};
use hearth_maps::{GeocodeError, GeocoderClient, PlacesClient, PlacesError, MAX_NEARBY_RESULTS};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn geocoder(base_url: &str) -> GeocoderClient {
    GeocoderClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

fn places(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 30, 3000, base_url)
        .expect("client construction should not fail")
}

fn downtown() -> Coordinate {
    Coordinate {
        latitude: 32.7157,
        longitude: -117.1611,
    }
}

#[tokio::test]
async fn geocode_returns_coordinate_and_metadata() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [
            {
                "geometry": { "location": { "lat": 32.7157, "lng": -117.1611 } },
                "address_components": [
                    { "long_name": "Gaslamp Quarter", "types": ["neighborhood", "political"] },
                    { "long_name": "San Diego", "types": ["locality", "political"] },
                    { "long_name": "San Diego County", "types": ["administrative_area_level_2"] },
                    { "long_name": "California", "types": ["administrative_area_level_1"] }
                ]
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .and(query_param("address", "San Diego 92101"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = geocoder(&server.uri());
    let query = LocationQuery::new("San Diego", "92101");
    let (coordinate, metadata) = client.geocode(&query).await.expect("should geocode");

    assert!((coordinate.latitude - 32.7157).abs() < f64::EPSILON);
    assert!((coordinate.longitude + 117.1611).abs() < f64::EPSILON);
    assert_eq!(metadata.neighborhood, "Gaslamp Quarter");
    assert_eq!(metadata.city, "San Diego");
    assert_eq!(metadata.county, "San Diego County");
    assert_eq!(metadata.state, "California");
}

#[tokio::test]
async fn geocode_defaults_missing_components() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [
            {
                "geometry": { "location": { "lat": 1.0, "lng": 2.0 } },
                "address_components": [
                    { "long_name": "San Diego", "types": ["locality"] }
                ]
            }
        ]
    });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = geocoder(&server.uri());
    let query = LocationQuery::new("San Diego", "92101");
    let (_, metadata) = client.geocode(&query).await.expect("should geocode");

    assert_eq!(metadata.city, "San Diego");
    assert_eq!(metadata.neighborhood, "N/A");
    assert_eq!(metadata.county, "N/A");
    assert_eq!(metadata.state, "N/A");
}

#[tokio::test]
async fn geocode_non_ok_status_is_no_results_naming_the_query() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "status": "ZERO_RESULTS", "results": [] });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = geocoder(&server.uri());
    let query = LocationQuery::new("San Diego", "92101");
    let err = client.geocode(&query).await.unwrap_err();

    assert!(matches!(err, GeocodeError::NoResults { .. }));
    let msg = err.to_string();
    assert!(msg.contains("San Diego"), "message should name the city: {msg}");
    assert!(msg.contains("92101"), "message should name the postal code: {msg}");
}

#[tokio::test]
async fn geocode_ok_status_with_empty_results_is_no_results() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "status": "OK", "results": [] });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = geocoder(&server.uri());
    let query = LocationQuery::new("Nowhere", "00000");
    let err = client.geocode(&query).await.unwrap_err();
    assert!(matches!(err, GeocodeError::NoResults { .. }));
}

#[tokio::test]
async fn geocode_server_error_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = geocoder(&server.uri());
    let query = LocationQuery::new("San Diego", "92101");
    let err = client.geocode(&query).await.unwrap_err();
    assert!(matches!(err, GeocodeError::Http(_)));
}

#[tokio::test]
async fn geocode_malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = geocoder(&server.uri());
    let query = LocationQuery::new("San Diego", "92101");
    let err = client.geocode(&query).await.unwrap_err();
    assert!(matches!(err, GeocodeError::Deserialize { .. }));
}

fn place_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "displayName": { "text": name },
        "location": { "latitude": 32.71, "longitude": -117.16 },
        "formattedAddress": format!("{name} St, San Diego, CA")
    })
}

#[tokio::test]
async fn nearby_returns_places_in_provider_order() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "places": [place_json("a", "Alpha School"), place_json("b", "Beta School")]
    });

    Mock::given(method("POST"))
        .and(path("/v1/places:searchNearby"))
        .and(header("X-Goog-Api-Key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = places(&server.uri());
    let found = client
        .nearby(&downtown(), "school")
        .await
        .expect("should parse places");

    assert_eq!(found.len(), 2);
    assert_eq!(found[0].name, "Alpha School");
    assert_eq!(found[1].name, "Beta School");
    assert_eq!(found[0].id, "a");
    assert!(found[0].address.as_deref().unwrap().contains("San Diego"));
}

#[tokio::test]
async fn nearby_truncates_to_three_preserving_order() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "places": [
            place_json("1", "First"),
            place_json("2", "Second"),
            place_json("3", "Third"),
            place_json("4", "Fourth"),
            place_json("5", "Fifth")
        ]
    });

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = places(&server.uri());
    let found = client.nearby(&downtown(), "park").await.unwrap();

    assert_eq!(found.len(), MAX_NEARBY_RESULTS);
    let names: Vec<&str> = found.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[tokio::test]
async fn nearby_missing_places_key_means_empty() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = places(&server.uri());
    let found = client.nearby(&downtown(), "hospital").await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn nearby_generates_unique_ids_for_anonymous_records() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "places": [
            {
                "displayName": { "text": "Unnamed One" },
                "location": { "latitude": 1.0, "longitude": 2.0 }
            },
            {
                "displayName": { "text": "Unnamed Two" },
                "location": { "latitude": 3.0, "longitude": 4.0 }
            }
        ]
    });

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = places(&server.uri());
    let found = client.nearby(&downtown(), "restaurant").await.unwrap();

    assert_eq!(found.len(), 2);
    assert_ne!(found[0].id, found[1].id);
    assert!(!found[0].id.is_empty());
}

#[tokio::test]
async fn nearby_server_error_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = places(&server.uri());
    let err = client.nearby(&downtown(), "school").await.unwrap_err();
    assert!(matches!(err, PlacesError::Http(_)));
}
