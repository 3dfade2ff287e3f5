pub mod types;

use crate::error::{ConfigError, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".scaffold.toml";

/// Get the global config file path (~/.scaffold.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (<dir>/.scaffold.toml)
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Load configuration.
///
/// An explicit path must exist and parse. Otherwise the local file in the
/// working directory wins over the global one, and a file that fails to
/// parse is skipped with a warning.
pub fn load_config(explicit: Option<&Path>) -> Result<types::Config> {
    if let Some(path) = explicit {
        return read_config_file(path);
    }

    let mut candidates = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(local_config_path(&cwd));
    }
    if let Some(global) = global_config_path() {
        candidates.push(global);
    }

    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        match read_config_file(&candidate) {
            Ok(config) => {
                debug!("Loaded configuration from {}", candidate.display());
                return Ok(config);
            }
            Err(e) => warn!("Ignoring {}: {}", candidate.display(), e),
        }
    }

    Ok(types::Config::default())
}

/// Parse a single config file
pub fn read_config_file(path: &Path) -> Result<types::Config> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content).map_err(|reason| {
        ConfigError::ParseError {
            path: path.to_path_buf(),
            reason,
        }
        .into()
    })
}

fn parse_config(content: &str) -> std::result::Result<types::Config, String> {
    toml::from_str(content).map_err(|e| e.to_string())
}
