//! Human-readable renderings of config file paths.

use crate::workspace::WorkspaceFolder;
use std::path::Path;

/// Render `path` in its shortest known form.
///
/// Candidates are considered in a fixed order: the path itself, `~/<rel>` when
/// it lies under `home`, then `<folder-name>/<rel>` for every folder it lies
/// under. The shortest candidate wins; on equal length the earlier one does.
pub fn shorten_path(path: &Path, home: Option<&Path>, folders: &[WorkspaceFolder]) -> String {
    let mut candidates = vec![path.to_string_lossy().into_owned()];

    if let Some(home) = home
        && let Some(relative) = relative_under(path, home)
    {
        candidates.push(prefixed("~", &relative));
    }

    for folder in folders {
        if let Some(relative) = relative_under(path, &folder.root) {
            candidates.push(prefixed(&folder.name, &relative));
        }
    }

    // `min_by_key` keeps the first of several equal minimums.
    candidates
        .into_iter()
        .min_by_key(|candidate| candidate.chars().count())
        .unwrap_or_default()
}

fn relative_under(path: &Path, base: &Path) -> Option<String> {
    path.strip_prefix(base).ok().map(|relative| relative.to_string_lossy().into_owned())
}

fn prefixed(prefix: &str, relative: &str) -> String {
    if relative.is_empty() {
        prefix.to_string()
    } else {
        format!("{}/{}", prefix, relative)
    }
}

/// Express `path` relative to `base` when it lies under it, otherwise unchanged.
pub fn relative_or_absolute(path: &Path, base: &Path) -> String {
    relative_under(path, base)
        .filter(|relative| !relative.is_empty())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
#[path = "test/paths.rs"]
mod tests;
