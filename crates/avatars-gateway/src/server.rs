//! HTTP server for the avatars gateway
//!
//! Provides /health, /twitter, /gravatar, and a usage page for everything else.

use crate::gravatar::gravatar;
use crate::types::HealthResponse;
use crate::usage;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use twitter_avatar::SharedTwitterState;

/// Shared state for the HTTP server
pub struct ServerState {
    pub twitter: SharedTwitterState,
    pub usage_page: String,
    pub started_at: DateTime<Utc>,
}

impl ServerState {
    pub fn new(twitter: SharedTwitterState, public_url: &str) -> Self {
        Self {
            twitter,
            usage_page: usage::render(public_url),
            started_at: Utc::now(),
        }
    }
}

pub type SharedState = Arc<ServerState>;

/// Create the HTTP router
pub fn create_router(state: SharedState) -> Router {
    let gateway = Router::new()
        .route("/health", get(health))
        .route("/gravatar", get(gravatar))
        .fallback(usage_page)
        .with_state(Arc::clone(&state));

    gateway
        .merge(twitter_avatar::router(Arc::clone(&state.twitter)))
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server
pub async fn start_server(state: SharedState, port: u16) -> std::io::Result<()> {
    let router = create_router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await
}

/// Health check endpoint
async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let cache_stats = state.twitter.cache().stats().await;
    let uptime_secs = (Utc::now() - state.started_at).num_seconds() as u64;

    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs,
        cache: cache_stats,
    })
}

/// Unknown paths get the usage page
async fn usage_page(State(state): State<SharedState>) -> Response {
    (StatusCode::NOT_FOUND, Html(state.usage_page.clone())).into_response()
}
