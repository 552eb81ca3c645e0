use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::QadeskError;

const CONFIG_DIR: &str = "qadesk";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from `explicit` if given, else from the default path
///
/// An explicit path must exist. A missing default file is not an error.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, QadeskError> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    let Some(path) = config_path() else {
        log::debug!("No home directory; using default config");
        return Ok(Config::default());
    };

    match load_config_from_path(&path) {
        Err(QadeskError::ConfigRead { .. }) if !path.exists() => {
            log::debug!("No config at {}; using defaults", path.display());
            Ok(Config::default())
        }
        other => other,
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, QadeskError> {
    let contents = fs::read_to_string(path).map_err(|e| QadeskError::ConfigRead {
        path: path.to_path_buf(),
        message: match e.kind() {
            ErrorKind::NotFound => "file not found".to_string(),
            _ => e.to_string(),
        },
    })?;

    let config = parse_config(&contents).map_err(|message| QadeskError::ConfigParse {
        path: path.to_path_buf(),
        message,
    })?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn parse_config(content: &str) -> Result<Config, String> {
    toml::from_str::<Config>(content).map_err(|e| e.message().to_string())
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
