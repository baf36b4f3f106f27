// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use tryon_dashboard::application::dashboard_service::DashboardService;
use tryon_dashboard::infrastructure::config::load_api_config;
use tryon_dashboard::infrastructure::http_data_source::HttpDataSource;
use tryon_dashboard::presentation::app_state::AppState;
use tryon_dashboard::presentation::handlers::{get_dashboard, health_check};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let api_config = load_api_config()?;

    // Create data source (infrastructure layer)
    let data_source = Arc::new(HttpDataSource::new(api_config.api.base_url.clone()));

    // Create services (application layer)
    let dashboard_service = DashboardService::new(data_source);

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        api_base: api_config.api.base_url,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = "0.0.0.0:8080".parse().unwrap();
    println!("Starting tryon-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
