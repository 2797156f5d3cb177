use crate::workspace::WorkspaceEntry;
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_TERMINAL_READY_TIMEOUT_MS: u64 = 1000;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub settings: Settings,
    /// Workspace folders used when none are given on the command line.
    pub workspaces: Vec<WorkspaceEntry>,
    #[serde(skip)]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub debug_mode: bool,
    pub launch_mode: LaunchMode,
    /// How long shell mode waits for the shell's first output before typing the command.
    pub terminal_ready_timeout_ms: u64,
    /// Editor command used to open config files, e.g. `code --wait`.
    pub editor: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_mode: false,
            launch_mode: LaunchMode::default(),
            terminal_ready_timeout_ms: DEFAULT_TERMINAL_READY_TIMEOUT_MS,
            editor: None,
        }
    }
}

/// How the chosen host is connected to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchMode {
    /// Run `ssh` directly in the current terminal.
    #[default]
    Exec,
    /// Start the user's shell on a PTY and type the `ssh` command into it.
    Shell,
}

#[derive(Debug, Clone, Default)]
pub struct Metadata {
    /// Settings file the configuration was read from, if any.
    pub config_path: Option<PathBuf>,
}
