mod api;
mod predictor;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use hearth_maps::{GeocoderClient, PlacesClient};

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = hearth_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let geocoder = Arc::new(GeocoderClient::with_base_url(
        &config.google_maps_api_key,
        config.request_timeout_secs,
        &config.geocode_base_url,
    )?);
    let places = Arc::new(PlacesClient::with_base_url(
        &config.google_maps_api_key,
        config.request_timeout_secs,
        config.nearby_radius_m,
        &config.places_base_url,
    )?);

    let app = build_app(AppState { geocoder, places });

    tracing::info!(addr = %config.bind_addr, "starting hearth server");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
