use std::env;
use std::time::Duration;

const DEFAULT_CHECK_INTERVAL_SECS: u64 = 3600;

/// Configuration of the periodic alert check
#[derive(Debug, Clone, PartialEq)]
pub struct AlertConfig {
    /// `None` disables the scheduler; alerts can still be checked on demand
    pub check_interval: Option<Duration>,
}

impl AlertConfig {
    /// Environment variables:
    /// - ALERT_CHECK_INTERVAL_SECS: Seconds between checks, 0 disables (default: 3600)
    pub fn from_env() -> Self {
        Self::from_value(env::var("ALERT_CHECK_INTERVAL_SECS").ok())
    }

    fn from_value(raw: Option<String>) -> Self {
        let secs = match raw {
            Some(value) => value.trim().parse::<u64>().unwrap_or_else(|_| {
                tracing::warn!(
                    "Invalid ALERT_CHECK_INTERVAL_SECS '{}', using {}",
                    value,
                    DEFAULT_CHECK_INTERVAL_SECS
                );
                DEFAULT_CHECK_INTERVAL_SECS
            }),
            None => DEFAULT_CHECK_INTERVAL_SECS,
        };

        Self {
            check_interval: (secs > 0).then(|| Duration::from_secs(secs)),
        }
    }
}
