//! Building the `ssh` invocation for a chosen host.

use crate::hosts::HostEntry;
use crate::paths::relative_or_absolute;
use std::borrow::Cow;
use std::path::PathBuf;

pub const SSH_PROGRAM: &str = "ssh";

/// Arguments and working directory for one `ssh` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshInvocation {
    /// Directory to start in; the owning workspace folder for workspace hosts.
    pub cwd: Option<PathBuf>,
    /// Arguments after the program name.
    pub args: Vec<String>,
}

impl SshInvocation {
    /// Hosts from the user config rely on `ssh` reading it by default. Hosts
    /// from a workspace config run inside that folder with `-F` pointing at
    /// the folder-relative config path.
    pub fn for_host(host: &HostEntry) -> Self {
        match &host.source.workspace {
            Some(folder) => Self {
                cwd: Some(folder.root.clone()),
                args: vec![
                    "-F".to_string(),
                    relative_or_absolute(&host.source.path, &folder.root),
                    host.label.clone(),
                ],
            },
            None => Self {
                cwd: None,
                args: vec![host.label.clone()],
            },
        }
    }

    /// The invocation as text typed into a shell.
    pub fn command_line(&self) -> String {
        std::iter::once(Cow::Borrowed(SSH_PROGRAM))
            .chain(self.args.iter().map(|arg| shell_quote(arg)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Quote `arg` for a POSIX shell when it contains anything but safe characters.
pub fn shell_quote(arg: &str) -> Cow<'_, str> {
    let is_safe = |ch: char| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.' | '/' | ':' | '@' | ',' | '+' | '=' | '%');
    if !arg.is_empty() && arg.chars().all(is_safe) {
        Cow::Borrowed(arg)
    } else {
        Cow::Owned(format!("'{}'", arg.replace('\'', r"'\''")))
    }
}

#[cfg(test)]
#[path = "../test/launcher/command.rs"]
mod tests;
