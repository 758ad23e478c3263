//! Health check endpoints for the lead service
//!
//! Kubernetes-style probes. PostgreSQL is the only dependency the service
//! has, so readiness reduces to one database round trip:
//! - /health - basic check, no dependencies touched
//! - /health/ready - readiness probe (pings the leads database)
//! - /health/live - liveness probe (always OK while the server runs)

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

/// Probe response. `database` is only present on the readiness probe.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<CheckStatus>,
}

/// Outcome of the database round trip
#[derive(Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn probe_response(status: &str, database: Option<CheckStatus>) -> HealthResponse {
    HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
    }
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(probe_response("healthy", None))
}

/// Readiness probe. The service cannot store leads without its database,
/// so a failed ping returns 503 and reports the cause.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    match db::health_check(&state.db).await {
        Ok(_) => {
            let check = CheckStatus {
                status: "healthy".to_string(),
                message: None,
            };
            Ok(Json(probe_response("ready", Some(check))))
        }
        Err(e) => {
            let check = CheckStatus {
                status: "unhealthy".to_string(),
                message: Some(e.to_string()),
            };
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(probe_response("not_ready", Some(check))),
            ))
        }
    }
}

/// Liveness probe - always returns OK if the server is running
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(probe_response("alive", None))
}
