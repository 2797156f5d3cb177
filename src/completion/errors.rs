use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum CompletionError {
    /// The bundled option table could not be parsed.
    InvalidTable(String),
    /// Completion items could not be written out.
    OutputError(String),
}

impl fmt::Display for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionError::InvalidTable(msg) => write!(f, "invalid option table: {}", msg),
            CompletionError::OutputError(msg) => write!(f, "failed to write completions: {}", msg),
        }
    }
}

impl Error for CompletionError {}
