//! Core data model for one area-enrichment run.

use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// Placeholder used when the geocoder response lacks an address component.
pub const UNKNOWN_COMPONENT: &str = "N/A";

/// Free-text location input for one enrichment run.
///
/// A query is only usable when both fields are non-empty; callers must check
/// [`LocationQuery::is_valid`] before starting a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    pub city: String,
    pub postal_code: String,
}

impl LocationQuery {
    pub fn new(city: impl Into<String>, postal_code: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            postal_code: postal_code.into(),
        }
    }

    /// Both fields must contain at least one non-whitespace character.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.city.trim().is_empty() && !self.postal_code.trim().is_empty()
    }

    /// The single address line sent to the geocoder, e.g. `"San Diego 92101"`.
    #[must_use]
    pub fn address_line(&self) -> String {
        format!("{} {}", self.city.trim(), self.postal_code.trim())
    }
}

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Administrative metadata derived from the first geocoder match.
///
/// Components absent from the provider response default to
/// [`UNKNOWN_COMPONENT`] rather than failing the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaMetadata {
    pub neighborhood: String,
    pub city: String,
    pub county: String,
    pub state: String,
}

impl Default for AreaMetadata {
    fn default() -> Self {
        Self {
            neighborhood: UNKNOWN_COMPONENT.to_owned(),
            city: UNKNOWN_COMPONENT.to_owned(),
            county: UNKNOWN_COMPONENT.to_owned(),
            state: UNKNOWN_COMPONENT.to_owned(),
        }
    }
}

/// One point of interest near the resolved coordinate.
///
/// `id` is unique within its category's result list. Providers that omit an
/// identifier get a locally generated one so downstream rendering never sees
/// duplicate keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub location: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Outcome of one category lookup within a run.
///
/// `failed = true` means the provider call errored; `places` is then empty.
/// An empty `places` with `failed = false` is a genuine "nothing nearby"
/// answer, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResult {
    pub category: Category,
    pub places: Vec<Place>,
    pub failed: bool,
}

impl CategoryResult {
    #[must_use]
    pub fn success(category: Category, places: Vec<Place>) -> Self {
        Self {
            category,
            places,
            failed: false,
        }
    }

    /// An isolated provider failure: empty places, `failed` flag set.
    #[must_use]
    pub fn failure(category: Category) -> Self {
        Self {
            category,
            places: Vec::new(),
            failed: true,
        }
    }
}

/// Terminal artifact of one successful run.
///
/// `results` always holds exactly one entry per catalog entry, in catalog
/// order, regardless of how many individual categories failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichmentResult {
    pub coordinate: Coordinate,
    pub metadata: AreaMetadata,
    pub results: Vec<CategoryResult>,
}
