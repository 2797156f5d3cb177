//! Opening SSH config files in the user's editor.

use crate::command_path::resolve_program;
use crate::launcher::map_exit_code_for;
use crate::{Result, log_debug, log_info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

const FALLBACK_EDITOR: &str = "vi";

/// A config file about to be opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigTarget {
    pub path: PathBuf,
    /// The file does not exist yet; the editor starts on an empty buffer
    /// that is written to `path` on save.
    pub is_new: bool,
}

/// Check whether `path` exists and make sure a new file could be saved there.
///
/// The file itself is never created.
pub fn prepare_config_target(path: &Path) -> io::Result<ConfigTarget> {
    if path.exists() {
        return Ok(ConfigTarget {
            path: path.to_path_buf(),
            is_new: false,
        });
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        log_debug!("Creating parent directory for new config: {}", parent.display());
        fs::create_dir_all(parent)?;
    }

    Ok(ConfigTarget {
        path: path.to_path_buf(),
        is_new: true,
    })
}

/// Editor command line: the configured editor, then `$VISUAL`, then `$EDITOR`,
/// then `vi`. Blank values are skipped. Values are split with shell quoting
/// rules, so a quoted program path may contain spaces. The first word is the
/// program.
pub fn resolve_editor(configured: Option<&str>, visual: Option<&str>, editor: Option<&str>) -> Vec<String> {
    [configured, visual, editor]
        .into_iter()
        .flatten()
        .map(split_command)
        .find(|words| !words.is_empty())
        .unwrap_or_else(|| vec![FALLBACK_EDITOR.to_string()])
}

/// Unbalanced quotes fall back to plain whitespace splitting.
fn split_command(value: &str) -> Vec<String> {
    shlex::split(value).unwrap_or_else(|| value.split_whitespace().map(str::to_string).collect())
}

/// Editor command line from settings and the environment.
pub fn editor_from_env(configured: Option<&str>) -> Vec<String> {
    let visual = std::env::var("VISUAL").ok();
    let editor = std::env::var("EDITOR").ok();
    resolve_editor(configured, visual.as_deref(), editor.as_deref())
}

/// Open `target` in `editor_command` and wait for the editor to exit.
pub fn open_in_editor(target: &ConfigTarget, editor_command: &[String]) -> Result<ExitCode> {
    let Some((program, editor_args)) = editor_command.split_first() else {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "no editor configured").into());
    };
    let program_path = resolve_program(program)?;

    if target.is_new {
        log_info!("Opening new config buffer for {}", target.path.display());
    } else {
        log_info!("Opening config {}", target.path.display());
    }

    let status = Command::new(program_path).args(editor_args).arg(&target.path).status()?;
    Ok(map_exit_code_for(&status))
}

#[cfg(test)]
#[path = "test/opener.rs"]
mod tests;
