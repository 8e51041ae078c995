use std::env;
use std::path::PathBuf;

/// Where items and alert state are kept
#[derive(Debug, Clone, PartialEq)]
pub enum StorageConfig {
    /// PostgreSQL database, migrated at startup
    Postgres { database_url: String },
    /// `items.json` and `alerts.json` inside a data directory
    JsonFile { data_dir: PathBuf },
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string; selects the database stores when set
    /// - DATA_DIR: Directory of the JSON file stores (default: "data")
    pub fn from_env() -> Self {
        Self::from_values(env::var("DATABASE_URL").ok(), env::var("DATA_DIR").ok())
    }

    fn from_values(database_url: Option<String>, data_dir: Option<String>) -> Self {
        match database_url.filter(|url| !url.trim().is_empty()) {
            Some(database_url) => StorageConfig::Postgres { database_url },
            None => StorageConfig::JsonFile {
                data_dir: PathBuf::from(data_dir.unwrap_or_else(|| "data".to_string())),
            },
        }
    }
}
