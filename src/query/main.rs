//! Query server for location resolution.
//!
//! Provides an HTTP API over the free-text geocoder and the
//! polygon-constrained road locator. Every response carries a region so a
//! map client always has something to render.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use molave::config::Config;
use molave::geocode::NominatimClient;
use molave::overpass::OverpassClient;
use molave::{BoundaryPolygon, Coordinate, Region, Resolution, Resolver};

#[derive(Parser, Debug)]
#[command(name = "query")]
#[command(about = "Location resolution server")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:3000")]
    listen: String,

    /// TOML config file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Application state shared across handlers
struct AppState {
    resolver: Resolver<NominatimClient, OverpassClient>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };

    info!("Molave Query Server");
    info!("Geocoder backend: {}", config.geocoder.url);
    info!("Map-data backend: {}", config.overpass.url);

    let state = Arc::new(AppState {
        resolver: Resolver::from_config(&config),
    });

    // Build router
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/v1/search", get(search_handler))
        .route("/v1/road", post(road_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("Starting server on {}", args.listen);

    let listener = tokio::net::TcpListener::bind(&args.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Free-text search
async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQueryParams>,
) -> Json<ResolveResponse> {
    let resolution = state.resolver.search_text(&params.text).await;
    Json(respond(&state.resolver, resolution))
}

/// Street lookup constrained to a boundary polygon
async fn road_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RoadRequest>,
) -> Json<ResolveResponse> {
    let resolution = state
        .resolver
        .search_road(&request.street, &request.polygon)
        .await;
    Json(respond(&state.resolver, resolution))
}

#[derive(Deserialize)]
struct SearchQueryParams {
    /// Search text
    text: String,
}

#[derive(Deserialize)]
struct RoadRequest {
    street: String,
    polygon: BoundaryPolygon,
}

#[derive(Serialize)]
struct ResolveResponse {
    resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    marker: Option<Coordinate>,
    region: Region,
}

/// Resolved coordinates center the viewport; everything else falls back to
/// the configured default region.
fn respond(
    resolver: &Resolver<NominatimClient, OverpassClient>,
    resolution: Resolution,
) -> ResolveResponse {
    match resolution.coordinate() {
        Some(coordinate) => ResolveResponse {
            resolved: true,
            marker: Some(coordinate),
            region: resolver.region_around(coordinate),
        },
        None => ResolveResponse {
            resolved: false,
            marker: None,
            region: resolver.fallback_region(),
        },
    }
}
