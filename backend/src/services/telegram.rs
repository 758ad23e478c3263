//! Telegram lead notifications
//!
//! Relays each submitted lead to the configured Telegram chats via the
//! Bot API. Delivery is best-effort: a missing token disables the relay
//! and per-chat failures are logged without failing the submission.

use crate::config::TelegramConfig;
use crate::repositories::LeadRecord;
use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::{error, info, warn};

/// Telegram Bot API client scoped to the configured chats
pub struct TelegramNotifier {
    client: reqwest::Client,
    api_base: String,
    bot_token: SecretString,
    chat_ids: Vec<String>,
}

impl TelegramNotifier {
    /// Build a notifier from the application configuration
    pub fn from_config(client: reqwest::Client, config: &TelegramConfig) -> Self {
        Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            bot_token: SecretString::new(config.bot_token.clone()),
            chat_ids: config.chat_ids(),
        }
    }

    /// Whether the relay has everything it needs to send
    pub fn is_configured(&self) -> bool {
        !self.bot_token.expose_secret().is_empty() && !self.chat_ids.is_empty()
    }

    /// Send a message to every configured chat, returning how many sends
    /// succeeded. Failures are logged per chat and never propagated.
    pub async fn notify(&self, text: &str) -> usize {
        if !self.is_configured() {
            warn!("Telegram relay not configured, skipping notification");
            return 0;
        }

        let url = format!(
            "{}/bot{}/sendMessage",
            self.api_base,
            self.bot_token.expose_secret()
        );

        let mut sent = 0;
        for chat_id in &self.chat_ids {
            let body = json!({
                "chat_id": chat_id,
                "text": text,
                "parse_mode": "HTML",
            });

            match self.client.post(&url).json(&body).send().await {
                Ok(response) if response.status().is_success() => {
                    info!(chat_id = %chat_id, "Telegram notification sent");
                    sent += 1;
                }
                Ok(response) => {
                    error!(
                        chat_id = %chat_id,
                        status = %response.status(),
                        "Telegram API rejected the notification"
                    );
                }
                Err(e) => {
                    error!(chat_id = %chat_id, "Failed to send Telegram notification: {}", e);
                }
            }
        }
        sent
    }
}

/// Format the HTML notification for a freshly stored lead
pub fn format_lead_notification(lead: &LeadRecord) -> String {
    let timestamp = Utc::now().format("%d.%m.%Y %H:%M");
    let message = lead.message.as_deref().unwrap_or("—");

    format!(
        "🏋️ <b>Нова заявка з сайту!</b>\n\n\
         👤 <b>Ім'я:</b> {}\n\
         📞 <b>Телефон:</b> {}\n\
         💬 <b>Повідомлення:</b> {}\n\n\
         🕐 <b>Час:</b> {} UTC",
        lead.name, lead.phone, message, timestamp
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn lead(message: Option<&str>) -> LeadRecord {
        LeadRecord {
            id: Uuid::new_v4(),
            name: "Олена".to_string(),
            phone: "+48 669 144 039".to_string(),
            message: message.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    fn config(api_base: &str, token: &str, chat_ids: &str) -> TelegramConfig {
        TelegramConfig {
            api_base: api_base.to_string(),
            bot_token: token.to_string(),
            chat_ids: chat_ids.to_string(),
        }
    }

    #[test]
    fn test_notification_format() {
        let text = format_lead_notification(&lead(Some("Хочу схуднути")));
        assert!(text.starts_with("🏋️ <b>Нова заявка з сайту!</b>"));
        assert!(text.contains("👤 <b>Ім'я:</b> Олена"));
        assert!(text.contains("📞 <b>Телефон:</b> +48 669 144 039"));
        assert!(text.contains("💬 <b>Повідомлення:</b> Хочу схуднути"));
        assert!(text.contains("UTC"));
    }

    #[test]
    fn test_missing_message_renders_dash() {
        let text = format_lead_notification(&lead(None));
        assert!(text.contains("💬 <b>Повідомлення:</b> —"));
    }

    #[tokio::test]
    async fn test_notify_posts_to_every_chat() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/bottest-token/sendMessage"))
            .and(body_partial_json(serde_json::json!({"parse_mode": "HTML"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(2)
            .mount(&server)
            .await;

        let notifier = TelegramNotifier::from_config(
            reqwest::Client::new(),
            &config(&server.uri(), "test-token", "111,222"),
        );

        assert_eq!(notifier.notify("hello").await, 2);
    }

    #[tokio::test]
    async fn test_notify_without_token_is_skipped() {
        let notifier =
            TelegramNotifier::from_config(reqwest::Client::new(), &config("http://localhost:1", "", "111"));
        assert!(!notifier.is_configured());
        assert_eq!(notifier.notify("hello").await, 0);
    }

    #[tokio::test]
    async fn test_per_chat_failure_does_not_stop_the_rest() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/bottest-token/sendMessage"))
            .and(body_partial_json(serde_json::json!({"chat_id": "111"})))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/bottest-token/sendMessage"))
            .and(body_partial_json(serde_json::json!({"chat_id": "222"})))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let notifier = TelegramNotifier::from_config(
            reqwest::Client::new(),
            &config(&server.uri(), "test-token", "111,222"),
        );

        assert_eq!(notifier.notify("hello").await, 1);
    }
}
