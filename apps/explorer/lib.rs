pub mod api;
pub mod config;
pub mod console;

use anyhow::{Context, Result};
use nexa_catalog::Catalog;
use tracing::info;
use utils::errors::CATALOG_LOAD_FAILED;

/// Loads the configured snapshot, or the sample corpus when none is set.
pub fn load_catalog(config: &config::CatalogConfig) -> Result<Catalog> {
    let catalog = match &config.snapshot_path {
        Some(path) => Catalog::from_snapshot_file(path).context(CATALOG_LOAD_FAILED)?,
        None => {
            info!("No catalog snapshot configured, serving sample data");
            Catalog::sample()
        }
    };

    if config.audit_on_start {
        catalog.log_audit();
    }

    Ok(catalog)
}
