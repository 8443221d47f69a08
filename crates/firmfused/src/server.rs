//! HTTP server for firmfused

use crate::research::Researcher;
use crate::routes;
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub researcher: Arc<Researcher>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(researcher: Researcher) -> Self {
        Self {
            researcher: Arc::new(researcher),
            start_time: Instant::now(),
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::research_routes())
        .merge(routes::health_routes())
        .with_state(Arc::new(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server
pub async fn run(state: AppState, bind: &str) -> Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;
    info!("Listening on http://{}", bind);

    axum::serve(listener, app).await?;
    Ok(())
}
