//! API routes for firmfused

use crate::server::AppState;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use firmfuse_shared::{BatchResponse, ErrorResponse, ResearchReply, ResearchRequestBody};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

type AppStateArc = Arc<AppState>;

// ============================================================================
// Research Routes
// ============================================================================

pub fn research_routes() -> Router<AppStateArc> {
    Router::new().route(
        "/api/research-company",
        get(research_get).post(research_post),
    )
}

#[derive(Debug, Deserialize)]
pub struct ResearchQuery {
    pub company_name: Option<String>,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

fn bad_request(message: &str) -> Response {
    error_response(StatusCode::BAD_REQUEST, message)
}

/// Comma-separated names, trimmed, blanks dropped.
fn parse_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

async fn research_get(
    State(state): State<AppStateArc>,
    Query(query): Query<ResearchQuery>,
) -> Response {
    let names = query.company_name.as_deref().map(parse_names).unwrap_or_default();

    if names.is_empty() {
        return bad_request("company_name is required as a query parameter");
    }

    if names.len() == 1 {
        info!("Research request for {}", names[0]);
        let result = state.researcher.research(&names[0]).await;
        return Json(ResearchReply::Single(Box::new(result))).into_response();
    }

    info!("Batch research request for {} companies", names.len());
    let results = state.researcher.research_many(names).await;
    Json(ResearchReply::Batch(BatchResponse { results })).into_response()
}

async fn research_post(
    State(state): State<AppStateArc>,
    body: Result<Json<ResearchRequestBody>, JsonRejection>,
) -> Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            warn!("Rejected research body: {}", rejection.body_text());
            return error_response(rejection.status(), &rejection.body_text());
        }
    };

    if let Some(names) = body.company_names {
        info!("Batch research request for {} companies", names.len());
        let results = state.researcher.research_many(names).await;
        return Json(ResearchReply::Batch(BatchResponse { results })).into_response();
    }

    let Some(name) = body
        .company_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    else {
        return bad_request("company_name is required in the JSON body");
    };

    info!("Research request for {}", name);
    let mut result = state.researcher.research(name).await;
    result.apply_overrides(&body.overrides);
    Json(ResearchReply::Single(Box::new(result))).into_response()
}

// ============================================================================
// Health Routes
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health))
}

async fn health(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!(parse_names(" Acme , ,Globex,"), vec!["Acme", "Globex"]);
        assert!(parse_names(" , ").is_empty());
    }
}
