pub mod args;
pub mod command_path;
pub mod commands;
pub mod completion;
pub mod config;
pub mod hosts;
pub mod launcher;
pub mod log;
pub mod opener;
pub mod paths;
pub mod ssh_config;
pub mod ui;
pub mod workspace;

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Config(config::ConfigError),
    Completion(completion::CompletionError),
    Log(log::LogError),
    UI(ui::UIError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(err) => write!(f, "Configuration error: {}", err),
            Error::Completion(err) => write!(f, "Completion error: {}", err),
            Error::Log(err) => write!(f, "Logging error: {}", err),
            Error::UI(err) => write!(f, "UI error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<completion::CompletionError> for Error {
    fn from(err: completion::CompletionError) -> Self {
        Error::Completion(err)
    }
}

impl From<log::LogError> for Error {
    fn from(err: log::LogError) -> Self {
        Error::Log(err)
    }
}

impl From<ui::UIError> for Error {
    fn from(err: ui::UIError) -> Self {
        Error::UI(err)
    }
}
