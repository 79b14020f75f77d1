use std::time::Duration;

use tracing::info;
use warp::Filter;

mod api;
mod config;
mod error;
mod metrics;
mod middleware;
mod models;
mod prose;
mod summarizer;

const INDEX_HTML: &str = include_str!("../../assets/web/index.html");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = config::Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    info!("Starting MediSum dual summarization demo server");
    info!("Configuration loaded");

    // Register metrics
    let metrics = metrics::Metrics::new(prometheus::default_registry())?;

    // Mock model backend
    let summarizer =
        summarizer::MockSummarizer::new(Duration::from_millis(config.simulated_delay_ms));
    info!(
        "Mock summarizer ready (simulated delay: {}ms)",
        config.simulated_delay_ms
    );

    // Build API routes
    let api_routes = api::routes(summarizer, metrics)
        .with(warp::log("api"))
        .with(middleware::cors());

    // Single-page UI
    let ui = warp::path::end()
        .and(warp::get())
        .map(|| warp::reply::html(INDEX_HTML));

    // Health check route
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::json(&serde_json::json!({"status": "healthy"})));

    // Metrics route
    let metrics_route = warp::path("metrics").and(warp::get()).map(|| {
        use prometheus::{Encoder, TextEncoder};
        let encoder = TextEncoder::new();
        let metric_families = prometheus::gather();
        let mut buffer = vec![];
        encoder.encode(&metric_families, &mut buffer).unwrap();
        warp::reply::with_header(buffer, "Content-Type", encoder.format_type())
    });

    let routes = ui
        .or(health)
        .or(metrics_route)
        .or(api_routes)
        .recover(error::handle_rejection);

    // Start server
    let addr = ([0, 0, 0, 0], config.port);
    info!("Server listening on {}", addr.1);

    warp::serve(routes).run(addr).await;

    Ok(())
}
