//! Runs `ssh` directly, attached to the current terminal.

use super::{SshInvocation, map_exit_code_for};
use crate::command_path::ssh_path;
use crate::{Result, log_debug, log_error};
use std::process::{Command, ExitCode};

pub(super) fn run_ssh(invocation: &SshInvocation) -> Result<ExitCode> {
    let program = ssh_path().inspect_err(|err| {
        log_error!("Unable to locate ssh: {}", err);
    })?;

    let mut command = Command::new(&program);
    command.args(&invocation.args);
    if let Some(cwd) = &invocation.cwd {
        command.current_dir(cwd);
    }

    let status = command.status().inspect_err(|err| {
        log_error!("Failed to spawn ssh: {}", err);
    })?;
    log_debug!("ssh exited with {:?}", status);

    Ok(map_exit_code_for(&status))
}
