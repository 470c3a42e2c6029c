//! Application configuration loaded from environment variables.

use std::net::SocketAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Clone)]
pub struct AppConfig {
    pub google_maps_api_key: String,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub geocode_base_url: String,
    pub places_base_url: String,
    pub request_timeout_secs: u64,
    pub nearby_radius_m: u32,
    pub debounce_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("google_maps_api_key", &"[redacted]")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("geocode_base_url", &self.geocode_base_url)
            .field("places_base_url", &self.places_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("nearby_radius_m", &self.nearby_radius_m)
            .field("debounce_ms", &self.debounce_ms)
            .finish()
    }
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let google_maps_api_key = require("GOOGLE_MAPS_API_KEY")?;

    let bind_addr = parse_addr("HEARTH_BIND_ADDR", "0.0.0.0:8000")?;
    let log_level = or_default("HEARTH_LOG_LEVEL", "info");
    let geocode_base_url = or_default("HEARTH_GEOCODE_BASE_URL", "https://maps.googleapis.com");
    let places_base_url = or_default("HEARTH_PLACES_BASE_URL", "https://places.googleapis.com");
    let request_timeout_secs = parse_u64("HEARTH_REQUEST_TIMEOUT_SECS", "10")?;
    let nearby_radius_m = parse_u32("HEARTH_NEARBY_RADIUS_M", "3000")?;
    let debounce_ms = parse_u64("HEARTH_DEBOUNCE_MS", "400")?;

    Ok(AppConfig {
        google_maps_api_key,
        bind_addr,
        log_level,
        geocode_base_url,
        places_base_url,
        request_timeout_secs,
        nearby_radius_m,
        debounce_ms,
    })
}
