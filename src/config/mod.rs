/// Catalog seed loading from catalog.toml
pub mod catalog;

/// Database location, connection, and table creation
pub mod database;

use crate::errors::{Error, Result};
use std::path::PathBuf;

/// Directory containing the running executable.
///
/// The database file and the catalog seed file live next to the binary unless
/// overridden through the environment.
pub fn install_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent()
        .map(std::path::Path::to_path_buf)
        .ok_or_else(|| Error::Config {
            message: format!("Executable path {} has no parent directory", exe.display()),
        })
}
