//! Extracts `Host` aliases from SSH config text.

use crate::log_debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;

// Only the first alias of a `Host a b c` line is captured.
static HOST_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^Host[ \t]+(\S+)").expect("host line pattern is valid"));

/// Return the alias declared on every `Host` line, in order of appearance.
pub fn parse_hosts(text: &str) -> Vec<String> {
    HOST_LINE
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|alias| alias.as_str().to_string())
        .collect()
}

/// Read `path` and return its host aliases.
///
/// A file that does not exist has no hosts; any other read failure is returned.
pub fn read_hosts(path: &Path) -> io::Result<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(text) => {
            let hosts = parse_hosts(&text);
            log_debug!("Found {} host(s) in {}", hosts.len(), path.display());
            Ok(hosts)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log_debug!("SSH config not present, skipping: {}", path.display());
            Ok(Vec::new())
        }
        Err(err) => Err(io::Error::new(err.kind(), format!("failed to read {}: {}", path.display(), err))),
    }
}

#[cfg(test)]
#[path = "../test/ssh_config/parser.rs"]
mod tests;
