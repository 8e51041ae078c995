use async_trait::async_trait;

use business::domain::alert::services::Notifier;

/// Notifier used when no delivery channel is configured: alerts only show up
/// in the service log.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, title: &str, body: &str) {
        tracing::info!(target: "freshness::notify", "NOTIFY: {} - {}", title, body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_accept_notification_without_subscriber() {
        LogNotifier.notify("Expired: Milk", "Expired on 2024-01-06").await;
    }
}
