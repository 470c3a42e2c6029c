use thiserror::Error;

/// Errors returned by the geocoder client.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The provider answered but found no match for the query. Distinct from
    /// transport failure: the run must surface a message naming the query.
    #[error("no results found for {query}")]
    NoResults { query: String },

    /// Network or TLS failure, a timeout, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Errors returned by the places client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure, a timeout, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
