//! Catalog seed configuration loaded from catalog.toml
//!
//! The items listed in catalog.toml become the starting catalog of every session.
//! When no file is present the built-in grocery list is used instead.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default seed file name, looked up in the install directory.
pub const CATALOG_FILE_NAME: &str = "catalog.toml";

/// Configuration structure representing the entire catalog.toml file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Items to seed, in display order
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

/// Configuration for a single catalog item
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ItemConfig {
    /// Display name, unique within the catalog
    pub name: String,
    /// Unit price
    pub price: f64,
}

impl ItemConfig {
    fn new(name: &str, price: f64) -> Self {
        Self {
            name: name.to_string(),
            price,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            items: vec![
                ItemConfig::new("Milk", 45.0),
                ItemConfig::new("Bread", 25.0),
                ItemConfig::new("Eggs (Dozen)", 60.0),
                ItemConfig::new("Rice (1kg)", 70.0),
                ItemConfig::new("Sugar (1kg)", 50.0),
                ItemConfig::new("Tea (250g)", 120.0),
                ItemConfig::new("Oil (1L)", 150.0),
                ItemConfig::new("Chilli Powder (100g)", 20.0),
            ],
        }
    }
}

/// Loads the catalog configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CatalogConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read catalog file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path.as_ref().display()),
    })
}

/// Path of the catalog seed file: `CATALOG_CONFIG` if set, else `catalog.toml` in the install dir.
pub fn catalog_config_path() -> Result<PathBuf> {
    match std::env::var("CATALOG_CONFIG") {
        Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(super::install_dir()?.join(CATALOG_FILE_NAME)),
    }
}

/// Loads the catalog from `path`, or the built-in defaults when the file does not exist.
pub fn load_config_or_default(path: &Path) -> Result<CatalogConfig> {
    if path.exists() {
        info!("Loading catalog from {}", path.display());
        load_config(path)
    } else {
        debug!("No catalog file at {}; using built-in items", path.display());
        Ok(CatalogConfig::default())
    }
}

/// Loads the catalog from the default location.
pub fn load_default_config() -> Result<CatalogConfig> {
    load_config_or_default(&catalog_config_path()?)
}
