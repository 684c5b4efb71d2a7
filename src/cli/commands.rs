//! CLI command implementations
//!
//! Boot sequence for `serve`:
//! 1. Load and validate configuration
//! 2. Connect to the record store (fatal on failure)
//! 3. Bind the HTTP listener and serve until Ctrl-C

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{
    init_logging, log_boot_failed, log_config_loaded, log_event, log_store_connected, Event,
};
use crate::store::{MemoryStore, MongoStore, StoreConfig};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Configuration file structure
///
/// Every field is optional; omitted fields keep the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Document store settings
    #[serde(default)]
    pub store: StoreConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config(format!("failed to read {}: {}", path.display(), e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config(format!("{} is not valid config JSON: {}", path.display(), e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if given, otherwise use the defaults
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::config("server.port must be > 0"));
        }

        if self.store.uri.trim().is_empty() {
            return Err(CliError::config("store.uri must not be empty"));
        }

        if self.store.database.trim().is_empty() {
            return Err(CliError::config("store.database must not be empty"));
        }

        if self.store.collection.trim().is_empty() {
            return Err(CliError::config("store.collection must not be empty"));
        }

        if self.store.connect_timeout_secs == 0 {
            return Err(CliError::config(
                "store.connect_timeout_secs must be > 0",
            ));
        }

        Ok(())
    }
}

/// Main entry point for CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, memory } => serve(config.as_deref(), memory),
        Command::CheckConfig { config } => check_config(config.as_deref()),
    }
}

/// Print the effective configuration
pub fn check_config(config_path: Option<&Path>) -> CliResult<()> {
    let config = Config::resolve(config_path)?;
    write_json(&config)
}

/// Boot the service and serve HTTP until shutdown
pub fn serve(config_path: Option<&Path>, memory: bool) -> CliResult<()> {
    init_logging();
    log_event(Event::BootStart);

    let result = boot_and_serve(config_path, memory);
    if let Err(e) = &result {
        log_boot_failed(e);
    }
    result
}

fn boot_and_serve(config_path: Option<&Path>, memory: bool) -> CliResult<()> {
    let config = Config::resolve(config_path)?;
    log_config_loaded(&config.store.database, config.server.port);

    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async {
        let server = if memory {
            log_store_connected("memory", None);
            HttpServer::new(
                config.server.clone(),
                Arc::new(MemoryStore::new()),
                &config.store.collection,
            )
        } else {
            let store = MongoStore::connect(
                &config.store.uri,
                &config.store.database,
                config.store.connect_timeout(),
            )
            .await?;
            log_store_connected("mongodb", Some(store.database_name()));
            HttpServer::new(
                config.server.clone(),
                Arc::new(store),
                &config.store.collection,
            )
        };

        server.start().await.map_err(CliError::from)
    })?;

    log_event(Event::ShutdownComplete);
    Ok(())
}
