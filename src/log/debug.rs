//! Background file writer for debug logging.
//!
//! Entries are queued to a dedicated thread that appends them to
//! `~/.sshpick/logs/sshpick.log`, flushing by size or interval.

use super::{LogError, LogLevel, formatter::LogFormatter};
use once_cell::sync::OnceCell;
use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    sync::{
        Arc,
        mpsc::{self, Receiver, RecvTimeoutError, SyncSender},
    },
    thread,
    time::{Duration, Instant},
};

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

const FLUSH_BYTES: usize = 8 * 1024;
const FLUSH_INTERVAL: Duration = Duration::from_millis(100);
const QUEUE_CAPACITY: usize = 1024;
const LOG_DIR_NAME: &str = ".sshpick";
const LOG_FILE_NAME: &str = "sshpick.log";
#[cfg(unix)]
const PRIVATE_LOG_DIR_MODE: u32 = 0o700;
#[cfg(unix)]
const PRIVATE_LOG_FILE_MODE: u32 = 0o600;

enum WriterMessage {
    Entry(LogLevel, String),
    Flush(SyncSender<Result<(), String>>),
}

/// Queues formatted entries for the writer thread, which is started on first use.
#[derive(Clone, Default)]
pub(super) struct DebugLogger {
    sender: Arc<OnceCell<SyncSender<WriterMessage>>>,
}

impl DebugLogger {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn log(&self, level: LogLevel, message: &str) -> Result<(), LogError> {
        self.sender()?
            .send(WriterMessage::Entry(level, message.to_string()))
            .map_err(|err| LogError::WorkerError(format!("failed to queue log entry: {}", err)))
    }

    pub(super) fn flush(&self) -> Result<(), LogError> {
        let Some(sender) = self.sender.get() else {
            return Ok(());
        };

        let (ack_tx, ack_rx) = mpsc::sync_channel(0);
        sender
            .send(WriterMessage::Flush(ack_tx))
            .map_err(|err| LogError::WorkerError(format!("failed to queue log flush: {}", err)))?;

        match ack_rx.recv() {
            Ok(result) => result.map_err(LogError::WorkerError),
            Err(err) => Err(LogError::WorkerError(format!("log writer went away during flush: {}", err))),
        }
    }

    fn sender(&self) -> Result<&SyncSender<WriterMessage>, LogError> {
        self.sender.get_or_try_init(|| {
            let (tx, rx) = mpsc::sync_channel(QUEUE_CAPACITY);
            thread::Builder::new()
                .name("sshpick-log-writer".to_string())
                .spawn(move || run_writer(rx, LogFormatter::default()))
                .map_err(|err| LogError::WorkerError(format!("failed to spawn log writer: {}", err)))?;
            Ok(tx)
        })
    }
}

fn log_file_path() -> Result<PathBuf, LogError> {
    let home_dir = dirs::home_dir().ok_or_else(|| LogError::DirectoryCreationError("Home directory not found".to_string()))?;
    let log_dir = home_dir.join(LOG_DIR_NAME).join("logs");
    create_private_directory(&log_dir)?;
    Ok(log_dir.join(LOG_FILE_NAME))
}

fn create_private_directory(path: &Path) -> Result<(), LogError> {
    fs::create_dir_all(path).map_err(|err| LogError::DirectoryCreationError(format!("{}: {}", path.display(), err)))?;
    #[cfg(unix)]
    fs::set_permissions(path, fs::Permissions::from_mode(PRIVATE_LOG_DIR_MODE))?;
    Ok(())
}

fn open_private_append_file(path: &Path) -> Result<File, LogError> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        options.mode(PRIVATE_LOG_FILE_MODE);
    }
    let file = options.open(path)?;
    #[cfg(unix)]
    fs::set_permissions(path, fs::Permissions::from_mode(PRIVATE_LOG_FILE_MODE))?;
    Ok(file)
}

struct WriterState {
    writer: Option<BufWriter<File>>,
    pending_bytes: usize,
    last_flush: Instant,
    last_error: Option<String>,
}

fn run_writer(receiver: Receiver<WriterMessage>, formatter: LogFormatter) {
    let mut state = WriterState {
        writer: None,
        pending_bytes: 0,
        last_flush: Instant::now(),
        last_error: None,
    };

    loop {
        match receiver.recv_timeout(FLUSH_INTERVAL) {
            Ok(WriterMessage::Entry(level, message)) => {
                if let Err(err) = write_entry(&mut state, &formatter, level, &message) {
                    state.last_error = Some(err.to_string());
                }
            }
            Ok(WriterMessage::Flush(ack_tx)) => {
                let result = flush_writer(&mut state)
                    .map_err(|err| err.to_string())
                    .and_then(|()| state.last_error.take().map_or(Ok(()), Err));
                let _ = ack_tx.send(result);
            }
            Err(RecvTimeoutError::Timeout) => {
                if should_flush(state.pending_bytes, state.last_flush.elapsed())
                    && let Err(err) = flush_writer(&mut state)
                {
                    state.last_error = Some(err.to_string());
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                let _ = flush_writer(&mut state);
                break;
            }
        }
    }
}

fn write_entry(state: &mut WriterState, formatter: &LogFormatter, level: LogLevel, message: &str) -> Result<(), LogError> {
    if state.writer.is_none() {
        state.writer = Some(BufWriter::new(open_private_append_file(&log_file_path()?)?));
    }

    let line = formatter.format(Some(level), message);
    if let Some(writer) = state.writer.as_mut() {
        writeln!(writer, "{}", line)?;
    }
    state.pending_bytes = state.pending_bytes.saturating_add(line.len() + 1);

    if should_flush(state.pending_bytes, state.last_flush.elapsed()) {
        flush_writer(state)?;
    }
    Ok(())
}

fn flush_writer(state: &mut WriterState) -> Result<(), LogError> {
    if let Some(writer) = state.writer.as_mut() {
        writer.flush()?;
    }
    state.pending_bytes = 0;
    state.last_flush = Instant::now();
    Ok(())
}

fn should_flush(pending_bytes: usize, elapsed_since_flush: Duration) -> bool {
    pending_bytes >= FLUSH_BYTES || (pending_bytes > 0 && elapsed_since_flush >= FLUSH_INTERVAL)
}

#[cfg(test)]
#[path = "../test/log/debug.rs"]
mod tests;
