use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use business::domain::alert::use_cases::check::{CheckAlertsParams, CheckAlertsUseCase};

/// Runs the alert check at startup and then once per period.
pub struct AlertScheduler {
    use_case: Arc<dyn CheckAlertsUseCase>,
    period: Duration,
}

impl AlertScheduler {
    pub fn new(use_case: Arc<dyn CheckAlertsUseCase>, period: Duration) -> Self {
        Self { use_case, period }
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    async fn run(self) {
        tracing::info!("Checking alerts every {}s", self.period.as_secs());
        let mut ticker = tokio::time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            self.check().await;
        }
    }

    async fn check(&self) {
        let today = Local::now().date_naive();
        match self.use_case.execute(CheckAlertsParams { today }).await {
            Ok(sent) if sent.is_empty() => tracing::debug!("Alert check found nothing new"),
            Ok(sent) => tracing::info!("Alert check sent {} notification(s)", sent.len()),
            Err(e) => tracing::error!("Alert check failed: {}", e),
        }
    }
}
