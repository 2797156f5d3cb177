use super::{SshInvocation, shell_quote};
use crate::hosts::HostEntry;
use crate::ssh_config::ConfigLocation;
use crate::workspace::WorkspaceFolder;
use std::path::PathBuf;

fn user_host(label: &str) -> HostEntry {
    HostEntry {
        label: label.to_string(),
        description: "~/.ssh/config".to_string(),
        source: ConfigLocation::user(PathBuf::from("/home/u/.ssh/config")),
    }
}

fn workspace_host(label: &str) -> HostEntry {
    let folder = WorkspaceFolder::from_root("/ws/proj");
    HostEntry {
        label: label.to_string(),
        description: "proj/.vscode/ssh.config".to_string(),
        source: ConfigLocation::workspace(&folder),
    }
}

#[test]
fn user_config_host_runs_plain_ssh() {
    let invocation = SshInvocation::for_host(&user_host("bastion"));
    assert_eq!(invocation.cwd, None);
    assert_eq!(invocation.args, vec!["bastion"]);
    assert_eq!(invocation.command_line(), "ssh bastion");
}

#[test]
fn workspace_host_runs_in_folder_with_relative_config() {
    let invocation = SshInvocation::for_host(&workspace_host("staging"));
    assert_eq!(invocation.cwd, Some(PathBuf::from("/ws/proj")));
    assert_eq!(invocation.args, vec!["-F", ".vscode/ssh.config", "staging"]);
    assert_eq!(invocation.command_line(), "ssh -F .vscode/ssh.config staging");
}

#[test]
fn unusual_aliases_are_quoted_for_the_shell() {
    let invocation = SshInvocation::for_host(&user_host("web;rm"));
    assert_eq!(invocation.command_line(), "ssh 'web;rm'");
}

#[test]
fn quoting_leaves_safe_text_alone_and_escapes_single_quotes() {
    assert_eq!(shell_quote("user@host.example:22"), "user@host.example:22");
    assert_eq!(shell_quote("it's"), r"'it'\''s'");
    assert_eq!(shell_quote("*"), "'*'");
    assert_eq!(shell_quote(""), "''");
}
