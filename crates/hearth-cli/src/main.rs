mod report;

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;

use hearth_core::types::LocationQuery;
use hearth_core::AppConfig;
use hearth_enrich::{debounce_submissions, Enricher, EnrichmentState};
use hearth_maps::{GeocoderClient, PlacesClient};

#[derive(Debug, Parser)]
#[command(name = "hearth")]
#[command(about = "Area enrichment from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one enrichment for a city and postal code.
    Enrich {
        #[arg(long)]
        city: String,
        #[arg(long)]
        postal_code: String,
    },
    /// Read queries from stdin (one `city, postal code` per line) and run
    /// them debounced, printing a report per settled query.
    Watch,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = hearth_core::load_app_config()?;
    let enricher = build_enricher(&config)?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Enrich { city, postal_code } => {
            let query = LocationQuery::new(city, postal_code);
            anyhow::ensure!(query.is_valid(), "both --city and --postal-code are required");
            enricher.run(&query).await;
            report::print_state(&enricher.state().current(), config.nearby_radius_m);
        }
        Commands::Watch => {
            watch(enricher, &config).await;
        }
    }

    Ok(())
}

fn build_enricher(config: &AppConfig) -> anyhow::Result<Arc<Enricher>> {
    let geocoder = GeocoderClient::with_base_url(
        &config.google_maps_api_key,
        config.request_timeout_secs,
        &config.geocode_base_url,
    )?;
    let places = PlacesClient::with_base_url(
        &config.google_maps_api_key,
        config.request_timeout_secs,
        config.nearby_radius_m,
        &config.places_base_url,
    )?;
    Ok(Arc::new(Enricher::new(
        Arc::new(geocoder),
        Arc::new(places),
        Arc::new(EnrichmentState::new()),
    )))
}

/// Forwards stdin lines as queries through the debounce policy, so a paste
/// or a burst of edits settles into a single run.
async fn watch(enricher: Arc<Enricher>, config: &AppConfig) {
    let (tx, rx) = mpsc::channel(16);

    let reader = tokio::spawn(async move {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();
        while let Ok(Some(line)) = lines.next_line().await {
            match report::parse_query_line(&line) {
                Some(query) => {
                    if tx.send(query).await.is_err() {
                        break;
                    }
                }
                None => eprintln!("expected `city, postal code`, got: {line}"),
            }
        }
    });

    let radius_m = config.nearby_radius_m;
    let runner = Arc::clone(&enricher);
    debounce_submissions(rx, Duration::from_millis(config.debounce_ms), |query| {
        let runner = Arc::clone(&runner);
        async move {
            runner.run(&query).await;
            report::print_state(&runner.state().current(), radius_m);
        }
    })
    .await;

    if let Err(e) = reader.await {
        tracing::warn!(error = %e, "stdin reader task failed");
    }
}
