use async_trait::async_trait;

/// Service port for delivering notifications to the user.
///
/// Best-effort: implementations swallow delivery failures (denied
/// permission, unreachable endpoint) and at most log them.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, title: &str, body: &str);
}
