//! Server-side conversion tracking
//!
//! Reports a conversion event to the configured analytics collector when a
//! lead is stored. Like the Telegram relay this is best-effort and never
//! fails the submission.

use crate::config::AnalyticsConfig;
use serde_json::json;
use tracing::{debug, warn};
use uuid::Uuid;

/// Conversion event reporter
pub struct ConversionTracker {
    client: reqwest::Client,
    config: AnalyticsConfig,
}

impl ConversionTracker {
    pub fn from_config(client: reqwest::Client, config: &AnalyticsConfig) -> Self {
        Self {
            client,
            config: config.clone(),
        }
    }

    /// Report a lead conversion. Returns whether the event was accepted.
    pub async fn track_lead(&self, lead_id: Uuid) -> bool {
        if !self.config.enabled || self.config.url.is_empty() {
            debug!("Conversion tracking disabled");
            return false;
        }

        let body = json!({
            "event": self.config.conversion_event,
            "lead_id": lead_id,
        });

        match self.client.post(&self.config.url).json(&body).send().await {
            Ok(response) if response.status().is_success() => {
                debug!(lead_id = %lead_id, "Conversion event reported");
                true
            }
            Ok(response) => {
                warn!(
                    status = %response.status(),
                    "Analytics collector rejected the conversion event"
                );
                false
            }
            Err(e) => {
                warn!("Failed to report conversion event: {}", e);
                false
            }
        }
    }
}
