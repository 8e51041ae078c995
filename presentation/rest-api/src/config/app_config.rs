use super::{
    alert_config::AlertConfig, cors_config, notifier_config::NotifierConfig,
    server_config::ServerConfig, storage_config::StorageConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub storage: StorageConfig,
    pub notifier: NotifierConfig,
    pub alerts: AlertConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            storage: StorageConfig::from_env(),
            notifier: NotifierConfig::from_env(),
            alerts: AlertConfig::from_env(),
        }
    }
}
