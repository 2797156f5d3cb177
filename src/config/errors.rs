use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    IoError(io::Error),
    /// An explicitly requested settings file does not exist.
    NotFound(PathBuf),
    ParseError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "I/O error: {}", e),
            ConfigError::NotFound(path) => write!(f, "settings file not found: {}", path.display()),
            ConfigError::ParseError(msg) => write!(f, "invalid settings: {}", msg),
        }
    }
}

impl Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        ConfigError::IoError(error)
    }
}

impl From<serde_yml::Error> for ConfigError {
    fn from(error: serde_yml::Error) -> Self {
        ConfigError::ParseError(error.to_string())
    }
}
