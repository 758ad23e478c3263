//! Lead intake service
//!
//! Persists a submitted lead, then relays it to Telegram and reports the
//! conversion event. Only persistence can fail the submission; both
//! outbound calls are best-effort.

use crate::error::ApiError;
use crate::repositories::{CreateLead, LeadRecord, LeadRepository};
use crate::services::telegram::format_lead_notification;
use crate::services::{ConversionTracker, TelegramNotifier};
use crate::state::AppState;
use tracing::info;

/// Maximum accepted lengths for the free-text lead fields
const MAX_NAME_LEN: usize = 100;
const MAX_PHONE_LEN: usize = 32;
const MAX_MESSAGE_LEN: usize = 2000;

/// Lead submission input
#[derive(Debug, Clone)]
pub struct LeadInput {
    pub name: String,
    pub phone: String,
    pub message: Option<String>,
}

/// Lead service for business logic
pub struct LeadService;

impl LeadService {
    /// Store a lead and fan out the notifications.
    ///
    /// Phone format is enforced in the form layer, not here: the
    /// calculator flow submits a placeholder phone, so the service only
    /// checks presence and length.
    pub async fn submit(state: &AppState, input: LeadInput) -> Result<LeadRecord, ApiError> {
        let input = Self::validate(input)?;

        let lead = LeadRepository::create(
            state.db(),
            CreateLead {
                name: input.name,
                phone: input.phone,
                message: input.message,
            },
        )
        .await?;

        info!(lead_id = %lead.id, name = %lead.name, "Lead stored");

        let notifier =
            TelegramNotifier::from_config(state.http().clone(), &state.config().telegram);
        notifier.notify(&format_lead_notification(&lead)).await;

        let tracker =
            ConversionTracker::from_config(state.http().clone(), &state.config().analytics);
        tracker.track_lead(lead.id).await;

        Ok(lead)
    }

    fn validate(input: LeadInput) -> Result<LeadInput, ApiError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(ApiError::InvalidField {
                field: "name",
                message: "Name must not be empty".to_string(),
            });
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(ApiError::InvalidField {
                field: "name",
                message: format!("Name must not exceed {} characters", MAX_NAME_LEN),
            });
        }

        let phone = input.phone.trim().to_string();
        if phone.is_empty() {
            return Err(ApiError::InvalidField {
                field: "phone",
                message: "Phone must not be empty".to_string(),
            });
        }
        if phone.chars().count() > MAX_PHONE_LEN {
            return Err(ApiError::InvalidField {
                field: "phone",
                message: format!("Phone must not exceed {} characters", MAX_PHONE_LEN),
            });
        }

        let message = input
            .message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());
        if let Some(m) = &message {
            if m.chars().count() > MAX_MESSAGE_LEN {
                return Err(ApiError::InvalidField {
                    field: "message",
                    message: format!("Message must not exceed {} characters", MAX_MESSAGE_LEN),
                });
            }
        }

        Ok(LeadInput {
            name,
            phone,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, phone: &str, message: Option<&str>) -> LeadInput {
        LeadInput {
            name: name.to_string(),
            phone: phone.to_string(),
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn test_validate_trims_and_accepts() {
        let valid = LeadService::validate(input("  Олена ", " +48 669 144 039 ", Some(" hi ")))
            .expect("valid input");
        assert_eq!(valid.name, "Олена");
        assert_eq!(valid.phone, "+48 669 144 039");
        assert_eq!(valid.message.as_deref(), Some("hi"));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        assert!(LeadService::validate(input("   ", "123456789", None)).is_err());
    }

    #[test]
    fn test_validate_rejects_blank_phone() {
        assert!(LeadService::validate(input("Олена", "", None)).is_err());
    }

    #[test]
    fn test_validate_accepts_placeholder_phone_from_calculator() {
        assert!(LeadService::validate(input("Олена", "-", None)).is_ok());
    }

    #[test]
    fn test_validate_drops_empty_message() {
        let valid = LeadService::validate(input("Олена", "-", Some("  "))).expect("valid input");
        assert_eq!(valid.message, None);
    }

    #[test]
    fn test_validate_rejects_oversized_fields() {
        assert!(LeadService::validate(input(&"a".repeat(101), "-", None)).is_err());
        assert!(LeadService::validate(input("Олена", &"1".repeat(33), None)).is_err());
        assert!(LeadService::validate(input("Олена", "-", Some(&"m".repeat(2001)))).is_err());
    }
}
