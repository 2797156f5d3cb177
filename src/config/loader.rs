//! Settings file discovery and parsing
//!
//! Search order:
//! 1. the path given with `--config`
//! 2. `~/.sshpick/sshpick.yaml`
//! 3. `.sshpick.yaml` in the current directory

use super::{Config, ConfigError};
use crate::{log_debug, log_info, log_warn};
use std::{env, fs, path::PathBuf};

const SETTINGS_DIR: &str = ".sshpick";
const SETTINGS_FILE: &str = "sshpick.yaml";
const LOCAL_SETTINGS_FILE: &str = ".sshpick.yaml";

pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(explicit_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let config_path = match explicit_path {
            Some(path) if path.is_file() => Some(path),
            Some(path) => {
                log_warn!("Requested settings file does not exist: {:?}", path);
                return Err(ConfigError::NotFound(path));
            }
            None => Self::find_config_path(),
        };
        Ok(Self { config_path })
    }

    /// Find the settings file in the standard locations.
    fn find_config_path() -> Option<PathBuf> {
        log_debug!("Searching for settings file...");
        let candidates = Self::candidate_paths();
        for candidate in candidates {
            log_debug!("Checking: {:?}", candidate);
            if candidate.is_file() {
                log_info!("Found settings at: {:?}", candidate);
                return Some(candidate);
            }
        }
        log_debug!("No settings file found, using defaults");
        None
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Some(home_dir) = dirs::home_dir() {
            candidates.push(home_dir.join(SETTINGS_DIR).join(SETTINGS_FILE));
        }
        if let Ok(current_dir) = env::current_dir() {
            candidates.push(current_dir.join(LOCAL_SETTINGS_FILE));
        }
        candidates
    }

    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    /// Read and parse the located settings file.
    pub fn load_config(self) -> Result<Config, ConfigError> {
        let Some(config_path) = self.config_path else {
            return Ok(Config::default());
        };

        log_info!("Loading settings from: {:?}", config_path);
        let content = fs::read_to_string(&config_path).inspect_err(|err| {
            log_warn!("Failed to read settings file: {}", err);
        })?;

        let mut config = parse_config(&content)?;
        config.metadata.config_path = Some(config_path);
        Ok(config)
    }
}

/// Parse settings YAML; an empty document yields the defaults.
pub(super) fn parse_config(content: &str) -> Result<Config, ConfigError> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yml::from_str(content)?;
    Ok(config)
}

#[cfg(test)]
#[path = "../test/config/loader.rs"]
mod tests;
