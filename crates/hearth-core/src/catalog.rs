//! Static catalog of the point-of-interest categories enriched per run.
//!
//! The catalog is fixed at build time and its order is load-bearing: an
//! `EnrichmentResult` carries exactly one `CategoryResult` per entry, in
//! this order.

use serde::Serialize;

/// One enrichable class of point of interest.
///
/// `key` is the stable identifier used in results and logs, `provider_type`
/// is the tag sent to the places provider, `label` is the human-facing name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub key: &'static str,
    pub provider_type: &'static str,
    pub label: &'static str,
}

const CATALOG: [Category; 7] = [
    Category {
        key: "schools",
        provider_type: "school",
        label: "Schools",
    },
    Category {
        key: "groceries",
        provider_type: "grocery_store",
        label: "Grocery Stores",
    },
    Category {
        key: "hospitals",
        provider_type: "hospital",
        label: "Hospitals & Medical Centers",
    },
    Category {
        key: "parks",
        provider_type: "park",
        label: "Parks & Recreation",
    },
    Category {
        key: "restaurants",
        provider_type: "restaurant",
        label: "Restaurants",
    },
    Category {
        key: "transit",
        provider_type: "transit_station",
        label: "Public Transit",
    },
    Category {
        key: "shopping",
        provider_type: "shopping_mall",
        label: "Shopping Centers",
    },
];

/// The full catalog, in enrichment order.
#[must_use]
pub fn catalog() -> &'static [Category] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_has_seven_entries() {
        assert_eq!(catalog().len(), 7);
    }

    #[test]
    fn catalog_keys_are_unique() {
        let keys: HashSet<&str> = catalog().iter().map(|c| c.key).collect();
        assert_eq!(keys.len(), catalog().len());
    }

    #[test]
    fn catalog_order_is_stable() {
        let keys: Vec<&str> = catalog().iter().map(|c| c.key).collect();
        assert_eq!(
            keys,
            vec![
                "schools",
                "groceries",
                "hospitals",
                "parks",
                "restaurants",
                "transit",
                "shopping"
            ]
        );
    }

    #[test]
    fn provider_types_are_unique() {
        let types: HashSet<&str> = catalog().iter().map(|c| c.provider_type).collect();
        assert_eq!(types.len(), catalog().len());
    }
}
