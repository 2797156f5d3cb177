//! Host aggregation across every located config file.

use crate::paths::shorten_path;
use crate::ssh_config::{ConfigLocation, read_hosts};
use crate::workspace::WorkspaceFolder;
use crate::{log_debug, log_error};
use std::cmp::Ordering;
use std::io;
use std::path::Path;
use std::thread;

/// A host alias offered in the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    /// Alias as written after `Host`.
    pub label: String,
    /// Shortened path of the file declaring the alias.
    pub description: String,
    pub source: ConfigLocation,
}

/// Read every location concurrently and return all hosts sorted by label.
///
/// Missing files contribute nothing. The first other read failure aborts the
/// whole collection.
pub fn collect_hosts(locations: &[ConfigLocation], home: Option<&Path>, folders: &[WorkspaceFolder]) -> io::Result<Vec<HostEntry>> {
    let per_file: Vec<io::Result<Vec<String>>> = thread::scope(|scope| {
        let handles: Vec<_> = locations
            .iter()
            .map(|location| scope.spawn(move || read_hosts(&location.path)))
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|_| Err(io::Error::other("config reader thread panicked")))
            })
            .collect()
    });

    let mut entries = Vec::new();
    for (location, result) in locations.iter().zip(per_file) {
        let aliases = result.inspect_err(|err| {
            log_error!("Failed to read hosts from {}: {}", location.path.display(), err);
        })?;

        let description = shorten_path(&location.path, home, folders);
        entries.extend(aliases.into_iter().map(|label| HostEntry {
            label,
            description: description.clone(),
            source: location.clone(),
        }));
    }

    sort_hosts(&mut entries);
    log_debug!("Collected {} host(s) from {} config file(s)", entries.len(), locations.len());
    Ok(entries)
}

/// Sort by label, ignoring case first and then by exact text.
///
/// The sort is stable, so equal labels keep discovery order.
pub fn sort_hosts(entries: &mut [HostEntry]) {
    entries.sort_by(|left, right| compare_labels(&left.label, &right.label));
}

pub fn compare_labels(left: &str, right: &str) -> Ordering {
    left.to_lowercase().cmp(&right.to_lowercase()).then_with(|| left.cmp(right))
}

#[cfg(test)]
#[path = "test/hosts.rs"]
mod tests;
