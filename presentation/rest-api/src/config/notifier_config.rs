use std::env;

/// Configuration of the notification channel
#[derive(Debug, Clone, PartialEq)]
pub struct NotifierConfig {
    /// Webhook receiving `{title, body}` JSON; notifications are only logged when unset
    pub webhook_url: Option<String>,
}

impl NotifierConfig {
    /// Environment variables:
    /// - NOTIFY_WEBHOOK_URL: Webhook endpoint (optional)
    pub fn from_env() -> Self {
        Self {
            webhook_url: env::var("NOTIFY_WEBHOOK_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        }
    }
}
