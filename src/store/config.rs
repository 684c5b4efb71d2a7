//! Record store configuration
//!
//! Defaults reproduce the service's fixed connection constants.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Document database connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Connection string (default: "mongodb://localhost:27017/fiber-hrms")
    #[serde(default = "default_uri")]
    pub uri: String,

    /// Database name (default: "fiber-hrms")
    #[serde(default = "default_database")]
    pub database: String,

    /// Employee collection name (default: "employees")
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Bound on the initial connection attempt (default: 30)
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_uri() -> String {
    format!("mongodb://localhost:27017/{}", default_database())
}

fn default_database() -> String {
    "fiber-hrms".to_string()
}

fn default_collection() -> String {
    "employees".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    30
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            database: default_database(),
            collection: default_collection(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl StoreConfig {
    /// Connection timeout as a duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
