//! Runs the user's shell on a PTY and types the `ssh` command into it.
//!
//! The command is sent once the shell prints its first output, or when the
//! readiness timer runs out, whichever happens first. The PTY is bridged to
//! the real terminal in raw mode until the shell exits.

use super::{ReadyGate, SshInvocation, map_exit_code};
use crate::{Result, log_debug, log_error};
use crossterm::terminal;
use portable_pty::{Child, CommandBuilder, MasterPty, PtySize, native_pty_system};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

const CHILD_POLL_INTERVAL: Duration = Duration::from_millis(50);
const FALLBACK_SIZE: (u16, u16) = (80, 24);

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;
type PtyChild = Box<dyn Child + Send + Sync>;

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// A shell running on a PTY with the command-typing gate armed.
struct ShellSession {
    child: PtyChild,
    master: Box<dyn MasterPty + Send>,
    reader: Box<dyn Read + Send>,
    writer: SharedWriter,
    gate: Arc<ReadyGate>,
}

pub(super) fn run_in_shell(invocation: &SshInvocation, ready_timeout: Duration) -> Result<ExitCode> {
    let shell = default_shell();
    let size = terminal::size().unwrap_or(FALLBACK_SIZE);
    log_debug!("Starting shell {:?} on a {}x{} PTY", shell, size.0, size.1);

    let command_text = format!("{}\r", invocation.command_line());
    let ShellSession {
        mut child,
        master,
        reader,
        writer,
        gate,
    } = start_session(&shell, invocation.cwd.as_deref(), command_text, size, ready_timeout)?;

    let status = match bridge_terminal(child.as_mut(), master.as_ref(), reader, writer, &gate, size) {
        Ok(status) => status,
        Err(err) => {
            log_error!("Shell session failed: {}", err);
            terminate_child(child.as_mut());
            return Err(err.into());
        }
    };

    if !gate.has_fired() {
        log_debug!("Shell exited before the ssh command was typed");
    }
    log_debug!("Shell exited with code {}", status.exit_code());
    Ok(map_exit_code(status.success(), Some(i64::from(status.exit_code()))))
}

/// Spawn `shell` on a new PTY and arm a gate that types `command_text` into it.
///
/// The shell is killed if the session cannot be wired up after it started.
fn start_session(shell: &Path, cwd: Option<&Path>, command_text: String, size: (u16, u16), ready_timeout: Duration) -> io::Result<ShellSession> {
    let pty_pair = native_pty_system().openpty(pty_size(size.0, size.1)).map_err(pty_error)?;

    let mut shell_command = CommandBuilder::new(shell);
    if let Some(cwd) = cwd {
        shell_command.cwd(cwd);
    }
    let mut child = pty_pair.slave.spawn_command(shell_command).map_err(pty_error)?;
    drop(pty_pair.slave);
    let master = pty_pair.master;

    let wired = (|| -> io::Result<(Box<dyn Read + Send>, SharedWriter, Arc<ReadyGate>)> {
        let reader = master.try_clone_reader().map_err(pty_error)?;
        let writer: SharedWriter = Arc::new(Mutex::new(master.take_writer().map_err(pty_error)?));
        let gate = typing_gate(&writer, command_text);
        gate.arm_timeout(ready_timeout)?;
        Ok((reader, writer, gate))
    })();

    match wired {
        Ok((reader, writer, gate)) => Ok(ShellSession {
            child,
            master,
            reader,
            writer,
            gate,
        }),
        Err(err) => {
            terminate_child(child.as_mut());
            Err(err)
        }
    }
}

/// Bridge the PTY to the real terminal in raw mode until the shell exits.
fn bridge_terminal(
    child: &mut (dyn Child + Send + Sync),
    master: &(dyn MasterPty + Send),
    reader: Box<dyn Read + Send>,
    writer: SharedWriter,
    gate: &Arc<ReadyGate>,
    size: (u16, u16),
) -> io::Result<portable_pty::ExitStatus> {
    terminal::enable_raw_mode()?;
    let _raw_mode = RawModeGuard;

    let output_thread = spawn_output_pump(reader, Arc::clone(gate), io::stdout())?;
    spawn_input_pump(writer)?;

    let status = wait_following_resizes(child, master, size)?;

    // The pump ends once the PTY reports EOF or an error after the shell is gone.
    let _ = output_thread.join();
    Ok(status)
}

fn typing_gate(writer: &SharedWriter, command_text: String) -> Arc<ReadyGate> {
    let writer = Arc::clone(writer);
    ReadyGate::new(move || {
        if let Err(err) = write_to_pty(&writer, command_text.as_bytes()) {
            log_error!("Failed to send ssh command to the shell: {}", err);
        }
    })
}

fn terminate_child(child: &mut (dyn Child + Send + Sync)) {
    if let Err(err) = child.kill() {
        log_debug!("Failed to kill shell: {}", err);
    }
    let _ = child.wait();
}

fn default_shell() -> PathBuf {
    #[cfg(windows)]
    let fallback = std::env::var_os("COMSPEC").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("cmd.exe"));
    #[cfg(not(windows))]
    let fallback = std::env::var_os("SHELL")
        .filter(|shell| !shell.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/bin/sh"));
    fallback
}

fn pty_size(cols: u16, rows: u16) -> PtySize {
    PtySize {
        rows: rows.max(1),
        cols: cols.max(1),
        pixel_width: 0,
        pixel_height: 0,
    }
}

fn pty_error(err: impl std::fmt::Display) -> io::Error {
    io::Error::other(err.to_string())
}

fn write_to_pty(writer: &SharedWriter, bytes: &[u8]) -> io::Result<()> {
    let mut guard = writer.lock().map_err(|_| io::Error::other("PTY writer lock poisoned"))?;
    guard.write_all(bytes)?;
    guard.flush()
}

/// Copy shell output to `sink`; the first chunk opens the readiness gate.
fn spawn_output_pump(
    mut reader: Box<dyn Read + Send>,
    gate: Arc<ReadyGate>,
    mut sink: impl Write + Send + 'static,
) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new().name("pty-output".to_string()).spawn(move || {
        let mut buf = [0u8; 8192];
        loop {
            match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(bytes_read) => {
                    if sink.write_all(&buf[..bytes_read]).and_then(|()| sink.flush()).is_err() {
                        break;
                    }
                    gate.trigger();
                }
                Err(err) => {
                    log_debug!("PTY read ended: {}", err);
                    break;
                }
            }
        }
    })
}

/// Forward keystrokes to the shell. Detached: a blocked stdin read ends with the process.
fn spawn_input_pump(writer: SharedWriter) -> io::Result<()> {
    thread::Builder::new().name("pty-input".to_string()).spawn(move || {
        let mut buf = [0u8; 1024];
        let mut stdin = io::stdin();
        loop {
            match stdin.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(bytes_read) => {
                    if write_to_pty(&writer, &buf[..bytes_read]).is_err() {
                        break;
                    }
                }
            }
        }
    })?;
    Ok(())
}

fn wait_following_resizes(
    child: &mut (dyn Child + Send + Sync),
    master: &(dyn MasterPty + Send),
    initial_size: (u16, u16),
) -> io::Result<portable_pty::ExitStatus> {
    let mut last_size = initial_size;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }

        if let Ok(size) = terminal::size()
            && size != last_size
        {
            if let Err(err) = master.resize(pty_size(size.0, size.1)) {
                log_debug!("PTY resize failed: {}", err);
            }
            last_size = size;
        }

        thread::sleep(CHILD_POLL_INTERVAL);
    }
}

#[cfg(test)]
#[path = "../test/launcher/shell.rs"]
mod tests;
