//! Workspace folders: project directories whose `.vscode/ssh.config` is searched for hosts.

use serde::Deserialize;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// A project directory taking part in host lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceFolder {
    /// Display name, used as the prefix of shortened paths.
    pub name: String,
    /// Absolute root directory of the folder.
    pub root: PathBuf,
}

impl WorkspaceFolder {
    /// Create a folder named after the last component of `root`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let name = default_folder_name(&root);
        Self { name, root }
    }

    pub fn with_name(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }
}

fn default_folder_name(root: &Path) -> String {
    root.file_name()
        .map(|segment| segment.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.to_string_lossy().into_owned())
}

/// Workspace entry as written in the settings file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WorkspaceEntry {
    pub path: PathBuf,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<&WorkspaceEntry> for WorkspaceFolder {
    fn from(entry: &WorkspaceEntry) -> Self {
        match &entry.name {
            Some(name) if !name.is_empty() => WorkspaceFolder::with_name(name.clone(), entry.path.clone()),
            _ => WorkspaceFolder::from_root(entry.path.clone()),
        }
    }
}

/// Resolve the open workspace folders.
///
/// Folders given on the command line win over the settings file; with neither,
/// the current directory is the only folder. Relative paths are made absolute
/// against `cwd`, then normalized so that equivalent spellings of one root
/// collapse into a single folder.
pub fn resolve_workspace_folders(cli_roots: &[PathBuf], configured: &[WorkspaceEntry], cwd: Option<&Path>) -> Vec<WorkspaceFolder> {
    let absolutize = |path: &Path| -> PathBuf {
        match cwd {
            Some(base) if path.is_relative() => normalize_root(&base.join(path)),
            _ => normalize_root(path),
        }
    };

    let mut folders: Vec<WorkspaceFolder> = if !cli_roots.is_empty() {
        cli_roots.iter().map(|root| WorkspaceFolder::from_root(absolutize(root))).collect()
    } else if !configured.is_empty() {
        configured
            .iter()
            .map(|entry| {
                WorkspaceFolder::from(&WorkspaceEntry {
                    path: absolutize(&entry.path),
                    name: entry.name.clone(),
                })
            })
            .collect()
    } else {
        cwd.map(|dir| vec![WorkspaceFolder::from_root(normalize_root(dir))]).unwrap_or_default()
    };

    let mut seen = Vec::new();
    folders.retain(|folder| {
        if seen.contains(&folder.root) {
            false
        } else {
            seen.push(folder.root.clone());
            true
        }
    });
    folders
}

/// Canonical form of `root`, or its lexically cleaned form when it cannot be
/// resolved on disk.
fn normalize_root(root: &Path) -> PathBuf {
    fs::canonicalize(root).unwrap_or_else(|_| lexically_normalize(root))
}

/// Drop `.` components and fold `..` into the preceding normal component.
fn lexically_normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // `..` above the root stays at the root.
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(component),
            },
            other => normalized.push(other),
        }
    }
    normalized
}

#[cfg(test)]
#[path = "test/workspace.rs"]
mod tests;
