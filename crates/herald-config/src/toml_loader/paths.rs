//! Where the config file lives, and writing the commented default.

use herald_common::ConfigError;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

/// Environment variable naming a directory that holds `config.toml`,
/// taking precedence over the platform config dir.
pub const CONFIG_DIR_ENV: &str = "HERALD_CONFIG_DIR";

const CONFIG_FILE: &str = "config.toml";

/// Default config file path: `$HERALD_CONFIG_DIR/config.toml` when the
/// variable is set, else `<platform config dir>/herald/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    resolve_config_path(std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from), dirs::config_dir())
}

pub(super) fn resolve_config_path(
    override_dir: Option<PathBuf>,
    platform_dir: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    match override_dir.filter(|dir| !dir.as_os_str().is_empty()) {
        Some(dir) => Ok(dir.join(CONFIG_FILE)),
        None => platform_dir
            .map(|dir| dir.join("herald").join(CONFIG_FILE))
            .ok_or_else(|| {
                ConfigError::ParseError(format!(
                    "could not determine config directory; set {CONFIG_DIR_ENV}"
                ))
            }),
    }
}

/// Write the commented default config. An existing file is never replaced.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_error = |what: &str, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to {what} {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create directory for", e))?;
    }

    let mut file = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            info!("config already exists at {}, leaving it", path.display());
            return Ok(());
        }
        Err(e) => return Err(io_error("create", e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| io_error("write", e))?;

    info!("created default config at {}", path.display());
    Ok(())
}
