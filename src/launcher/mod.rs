//! Connecting to a chosen host.

mod command;
mod exec;
mod ready_gate;
mod shell;

pub use command::{SSH_PROGRAM, SshInvocation, shell_quote};
pub use ready_gate::ReadyGate;

use crate::Result;
use crate::config::{LaunchMode, Settings};
use crate::log_info;
use std::process::{ExitCode, ExitStatus};
use std::time::Duration;

/// Run `invocation` the way `mode` asks and return the session's exit code.
pub fn launch(invocation: &SshInvocation, mode: LaunchMode, settings: &Settings) -> Result<ExitCode> {
    log_info!("Launching `{}` in {:?} mode (cwd: {:?})", invocation.command_line(), mode, invocation.cwd);
    match mode {
        LaunchMode::Exec => exec::run_ssh(invocation),
        LaunchMode::Shell => shell::run_in_shell(invocation, Duration::from_millis(settings.terminal_ready_timeout_ms)),
    }
}

/// Exit code mirroring a finished child process.
pub(crate) fn map_exit_code_for(status: &ExitStatus) -> ExitCode {
    map_exit_code(status.success(), status.code().map(i64::from))
}

fn map_exit_code(success: bool, code: Option<i64>) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        // Clamp to the u8 range an exit code can carry.
        let clamped_code = code.map_or(1, |status_code| u8::try_from(status_code).unwrap_or(255));
        ExitCode::from(clamped_code)
    }
}

#[cfg(test)]
#[path = "../test/launcher/mod.rs"]
mod tests;
