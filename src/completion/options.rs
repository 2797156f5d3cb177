//! The bundled table of SSH option names.

use super::CompletionError;
use crate::log_debug;
use once_cell::sync::OnceCell;
use serde::Deserialize;

const OPTION_TABLE: &str = include_str!("../../assets/ssh_options.json");

static OPTIONS: OnceCell<Vec<OptionEntry>> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OptionEntry {
    pub label: String,
    pub documentation: String,
}

/// The option table, parsed on first use and shared for the rest of the process.
///
/// Concurrent first callers wait for the same parse.
pub fn option_entries() -> Result<&'static [OptionEntry], CompletionError> {
    OPTIONS
        .get_or_try_init(|| {
            let entries = parse_option_table(OPTION_TABLE)?;
            log_debug!("Loaded {} SSH option entries", entries.len());
            Ok(entries)
        })
        .map(Vec::as_slice)
}

pub fn parse_option_table(text: &str) -> Result<Vec<OptionEntry>, CompletionError> {
    serde_json::from_str(text).map_err(|err| CompletionError::InvalidTable(err.to_string()))
}
