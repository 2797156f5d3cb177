//! Decides which SSH config files take part in host lookup.

use crate::workspace::WorkspaceFolder;
use std::path::{Path, PathBuf};

/// User-level config, relative to the home directory.
pub const USER_CONFIG_RELATIVE: &str = ".ssh/config";
/// Per-folder config, relative to a workspace folder root.
pub const WORKSPACE_CONFIG_RELATIVE: &str = ".vscode/ssh.config";

/// One candidate SSH config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    /// Absolute path of the config file.
    pub path: PathBuf,
    /// Folder owning the file; `None` for the user config.
    pub workspace: Option<WorkspaceFolder>,
}

impl ConfigLocation {
    pub fn user(path: PathBuf) -> Self {
        Self { path, workspace: None }
    }

    pub fn workspace(folder: &WorkspaceFolder) -> Self {
        Self {
            path: workspace_config_path(folder),
            workspace: Some(folder.clone()),
        }
    }

    pub fn is_user_config(&self) -> bool {
        self.workspace.is_none()
    }
}

pub fn user_config_path(home: &Path) -> PathBuf {
    home.join(USER_CONFIG_RELATIVE)
}

pub fn workspace_config_path(folder: &WorkspaceFolder) -> PathBuf {
    folder.root.join(WORKSPACE_CONFIG_RELATIVE)
}

/// List the config files to search: the user config when `home` is known,
/// then one file per workspace folder in folder order.
pub fn locate_config_files(home: Option<&Path>, folders: &[WorkspaceFolder]) -> Vec<ConfigLocation> {
    let mut locations = Vec::with_capacity(folders.len() + 1);
    if let Some(home) = home {
        locations.push(ConfigLocation::user(user_config_path(home)));
    }
    locations.extend(folders.iter().map(ConfigLocation::workspace));
    locations
}

#[cfg(test)]
#[path = "../test/ssh_config/locator.rs"]
mod tests;
