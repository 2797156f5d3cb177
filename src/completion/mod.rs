//! Option-name completions for SSH config files.
//!
//! Completions are offered only while the cursor sits where a new keyword
//! starts: the text before it on the line is blank or a single partial word.
//! Every known option is returned together with a `Host` block snippet;
//! filtering against the typed prefix is left to the editor.

mod errors;
mod options;

pub use errors::CompletionError;
pub use options::{OptionEntry, option_entries, parse_option_table};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Trigger character the completion surface is registered with.
pub const TRIGGER_CHARACTER: char = ' ';

static KEYWORD_POSITION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\w*$").expect("keyword position pattern is valid"));

const HOST_SNIPPET_LABEL: &str = "Host";
const HOST_SNIPPET_BODY: &str = "Host ${1:alias}\n    HostName ${2:hostname}\n    LocalForward ${3:8080} ${4:localhost}:${5:80}\n    User ${6:user}\n";
const HOST_SNIPPET_DOC: &str = "New Host block with HostName, LocalForward and User.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionKind {
    Option,
    Snippet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionItem {
    pub label: String,
    pub kind: CompletionKind,
    pub documentation: String,
    /// Snippet text with `${n:placeholder}` tab stops.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_text: Option<String>,
}

/// Whether the cursor, preceded by `line_prefix`, is where a keyword starts.
pub fn is_keyword_position(line_prefix: &str) -> bool {
    KEYWORD_POSITION.is_match(line_prefix)
}

/// Completions for a cursor preceded by `line_prefix` on its line.
pub fn completions_for_line(line_prefix: &str) -> Result<Vec<CompletionItem>, CompletionError> {
    if !is_keyword_position(line_prefix) {
        return Ok(Vec::new());
    }

    let entries = option_entries()?;
    let mut items: Vec<CompletionItem> = entries
        .iter()
        .map(|entry| CompletionItem {
            label: entry.label.clone(),
            kind: CompletionKind::Option,
            documentation: entry.documentation.clone(),
            insert_text: None,
        })
        .collect();
    items.push(host_snippet());
    Ok(items)
}

/// Completions for an editor request that may carry a trigger character.
///
/// Requests triggered by anything but [`TRIGGER_CHARACTER`] get nothing.
pub fn completions_for_request(line_prefix: &str, trigger: Option<char>) -> Result<Vec<CompletionItem>, CompletionError> {
    match trigger {
        Some(ch) if ch != TRIGGER_CHARACTER => Ok(Vec::new()),
        _ => completions_for_line(line_prefix),
    }
}

fn host_snippet() -> CompletionItem {
    CompletionItem {
        label: HOST_SNIPPET_LABEL.to_string(),
        kind: CompletionKind::Snippet,
        documentation: HOST_SNIPPET_DOC.to_string(),
        insert_text: Some(HOST_SNIPPET_BODY.to_string()),
    }
}

#[cfg(test)]
#[path = "../test/completion/mod.rs"]
mod tests;
