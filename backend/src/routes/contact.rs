//! Contact form API routes

use crate::error::ApiError;
use crate::services::lead::{LeadInput, LeadService};
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use coach_landing_shared::ContactRequest;
use serde::Serialize;

/// Create contact routes
pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/", post(submit_contact))
}

/// Stored lead returned to the frontend
#[derive(Debug, Serialize)]
pub struct LeadResponse {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// POST /api/v1/contact - Submit a lead
///
/// Persists the lead and relays it to the configured Telegram chats.
/// Relay failures never fail the request; only a storage failure does.
async fn submit_contact(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<LeadResponse>, ApiError> {
    let input = LeadInput {
        name: req.name,
        phone: req.phone,
        message: req.message,
    };

    let lead = LeadService::submit(&state, input).await?;

    Ok(Json(LeadResponse {
        id: lead.id.to_string(),
        name: lead.name,
        phone: lead.phone,
        message: lead.message,
        created_at: lead.created_at,
    }))
}
