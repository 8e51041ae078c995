use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use business::domain::alert::services::Notifier;

/// JSON body posted to the webhook.
#[derive(Debug, Serialize)]
pub struct WebhookPayload<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

/// Posts each notification as JSON to a configured URL.
///
/// Delivery is best-effort: network errors and non-2xx answers are logged
/// and dropped, never retried.
pub struct WebhookNotifier {
    client: Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, title: &str, body: &str) {
        let payload = WebhookPayload { title, body };

        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => {
                tracing::debug!("Notification delivered: {}", title);
            }
            Ok(resp) => {
                tracing::warn!(
                    "Webhook rejected notification '{}' with status {}",
                    title,
                    resp.status()
                );
            }
            Err(e) => {
                tracing::warn!("Webhook unreachable, notification '{}' dropped: {}", title, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_payload_with_title_and_body() {
        let payload = WebhookPayload {
            title: "Expiring soon: Milk",
            body: "Expires on 2024-01-06 (3 day(s) left)",
        };

        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["title"], "Expiring soon: Milk");
        assert_eq!(value["body"], "Expires on 2024-01-06 (3 day(s) left)");
    }

    #[tokio::test]
    async fn should_swallow_delivery_failure() {
        // Nothing listens on the discard port of the loopback interface.
        let notifier = WebhookNotifier::new("http://127.0.0.1:9/hook".to_string());

        notifier.notify("Expired: Milk", "Expired on 2024-01-06").await;

        assert_eq!(notifier.url(), "http://127.0.0.1:9/hook");
    }
}
