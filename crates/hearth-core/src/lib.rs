//! Domain types shared across the hearth workspace: the enrichment data
//! model, the static category catalog, and application configuration.

pub mod catalog;
pub mod config;
pub mod types;

pub use catalog::{catalog, Category};
pub use config::{load_app_config, load_app_config_from_env, AppConfig, ConfigError};
pub use types::{
    AreaMetadata, CategoryResult, Coordinate, EnrichmentResult, LocationQuery, Place,
};
