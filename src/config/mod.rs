//! Settings file loading.
//!
//! Settings are read once at startup from YAML and kept in a process-wide
//! cell. A missing settings file means defaults.

mod errors;
mod loader;
mod settings;

pub use errors::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{Config, LaunchMode, Settings};

use once_cell::sync::OnceCell;
use std::path::PathBuf;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load the settings file and install it as the process configuration.
///
/// Calling this more than once keeps the first loaded configuration.
pub fn init_config(explicit_path: Option<PathBuf>) -> Result<&'static Config, ConfigError> {
    CONFIG.get_or_try_init(|| ConfigLoader::new(explicit_path)?.load_config())
}
