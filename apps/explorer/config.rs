use anyhow::Result;
use nexa_catalog::debounce::{DEFAULT_DEBOUNCE_WINDOW, clamp_window};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::{env, fs, path::PathBuf, time::Duration};
use tracing::{info, warn};
use utils::errors::{CONFIG_ALREADY_INITIALIZED, CONFIG_NOT_INITIALIZED};

pub static CONFIG: OnceCell<ExplorerConfig> = OnceCell::new();

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ExplorerConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON snapshot to serve. The built-in sample corpus is used when unset.
    pub snapshot_path: Option<PathBuf>,
    pub audit_on_start: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            audit_on_start: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_WINDOW.as_millis() as u64,
        }
    }
}

impl SearchConfig {
    /// Configured window, bounded to 100-300ms.
    pub fn debounce_window(&self) -> Duration {
        clamp_window(Duration::from_millis(self.debounce_ms))
    }
}

pub fn load() -> Result<()> {
    let config = load_config();
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!(CONFIG_ALREADY_INITIALIZED))?;
    Ok(())
}

pub fn get_config() -> Result<&'static ExplorerConfig> {
    CONFIG.get().ok_or_else(|| anyhow::anyhow!(CONFIG_NOT_INITIALIZED))
}

fn load_config() -> ExplorerConfig {
    let path = env::var("EXPLORER_CONFIG_PATH").unwrap_or_else(|_| "explorer.yaml".to_string());
    let mut config = match fs::read_to_string(&path) {
        Ok(contents) => parse_config(&contents).unwrap_or_else(|err| {
            warn!(error = %err, path = %path, "Failed to parse explorer config, using defaults");
            ExplorerConfig::default()
        }),
        Err(err) => {
            warn!(error = %err, path = %path, "Explorer config not found, using defaults");
            ExplorerConfig::default()
        }
    };

    apply_env_overrides(&mut config);

    info!(
        bind_address = %config.server.bind_address,
        snapshot_path = ?config.catalog.snapshot_path,
        audit_on_start = config.catalog.audit_on_start,
        debounce_ms = config.search.debounce_ms,
        "Explorer config loaded"
    );

    config
}

fn parse_config(contents: &str) -> Result<ExplorerConfig, serde_yaml::Error> {
    serde_yaml::from_str::<ExplorerConfig>(contents)
}

fn apply_env_overrides(config: &mut ExplorerConfig) {
    if let Ok(value) = env::var("EXPLORER_BIND_ADDRESS") {
        config.server.bind_address = value;
    }

    if let Ok(value) = env::var("EXPLORER_CATALOG_PATH") {
        config.catalog.snapshot_path = if value.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(value))
        };
    }

    if let Ok(value) = env::var("EXPLORER_DEBOUNCE_MS") {
        match value.parse::<u64>() {
            Ok(ms) => {
                config.search.debounce_ms = ms;
            }
            Err(err) => {
                warn!(
                    error = %err,
                    "Failed to parse EXPLORER_DEBOUNCE_MS override"
                );
            }
        }
    }
}
