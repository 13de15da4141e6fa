use crate::log::{log_level::LogLevel, log_msg::LogMsg, logger_handle::LoggerHandle};

use std::{
    fs::{self, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    sync::mpsc::{self, RecvTimeoutError},
    thread,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

/// Lines written between explicit flushes.
#[cfg(feature = "log-debug")]
const FLUSH_BATCH_SIZE: u32 = 20;
#[cfg(not(feature = "log-debug"))]
const FLUSH_BATCH_SIZE: u32 = 200;

/// Idle time after which buffered lines are written out. The process logger
/// is never dropped, so this is what gets quiet sessions onto disk.
const FLUSH_INTERVAL: Duration = Duration::from_millis(250);

/// Queue capacity used by [`Logger::start_default`].
pub const DEFAULT_QUEUE_CAPACITY: usize = 1_024;

/// Bounded, non-blocking file logger.
///
/// Producers enqueue through [`LoggerHandle`]; a `facecap-logger` thread
/// drains the queue into `<dir>/<name>-<unix secs>-pid<pid>.log`. Warnings
/// and errors trigger an immediate flush so a host crash right after a
/// failed call still leaves the reason on disk.
pub struct Logger {
    handle: LoggerHandle,
    _thread: Option<thread::JoinHandle<()>>,
    file_path: PathBuf,
}

impl Logger {
    /// Starts a logger in `logs/` next to the host executable.
    #[must_use]
    pub fn start_default(app_name: Option<&str>) -> Self {
        let base = exe_dir_fallback_cwd().join("logs");
        Self::start_in_dir(base, app_name, DEFAULT_QUEUE_CAPACITY)
    }

    /// Starts a logger writing into `dir`, creating it when missing.
    ///
    /// Falls back to a file in the temp dir, then to a sink, if the target
    /// cannot be opened. Never panics.
    pub fn start_in_dir<D: AsRef<Path>>(dir: D, app_name: Option<&str>, cap: usize) -> Self {
        let dir = expand_path(dir.as_ref());
        let _ = fs::create_dir_all(&dir);

        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let pid = std::process::id();
        let name = app_name.unwrap_or("facecap");
        let file_path = dir.join(format!("{name}-{secs}-pid{pid}.log"));

        let (tx, rx) = mpsc::sync_channel::<LogMsg>(cap.max(1));
        let target = file_path.clone();

        let _thread = thread::Builder::new()
            .name("facecap-logger".into())
            .spawn(move || {
                let mut out = BufWriter::new(open_writer(&target));
                let mut lines_written: u32 = 0;
                let mut pending = false;

                loop {
                    let m = match rx.recv_timeout(FLUSH_INTERVAL) {
                        Ok(m) => m,
                        Err(RecvTimeoutError::Timeout) => {
                            if pending {
                                let _ = out.flush();
                                pending = false;
                            }
                            continue;
                        }
                        Err(RecvTimeoutError::Disconnected) => break,
                    };
                    let _ = writeln!(&mut out, "{}", m.render());
                    lines_written = lines_written.wrapping_add(1);
                    pending = true;

                    if matches!(m.level, LogLevel::Warn | LogLevel::Error)
                        || lines_written.is_multiple_of(FLUSH_BATCH_SIZE)
                    {
                        let _ = out.flush();
                        pending = false;
                    }
                }

                let _ = out.flush();
            })
            .ok();

        Self {
            handle: LoggerHandle { tx },
            _thread,
            file_path,
        }
    }

    #[must_use]
    pub fn handle(&self) -> LoggerHandle {
        self.handle.clone()
    }

    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

fn open_writer(path: &Path) -> Box<dyn Write + Send> {
    if let Ok(f) = OpenOptions::new().create(true).append(true).open(path) {
        return Box::new(f);
    }
    let fallback = std::env::temp_dir().join("facecap-fallback.log");
    match OpenOptions::new().create(true).append(true).open(fallback) {
        Ok(f) => Box::new(f),
        Err(_) => Box::new(io::sink()),
    }
}

/// Directory of the host executable, or the working directory if that is
/// unavailable.
fn exe_dir_fallback_cwd() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Expands a leading `~` to the user's home directory.
fn expand_path(path: &Path) -> PathBuf {
    let Some(path_str) = path.to_str() else {
        return path.to_path_buf();
    };
    if !path_str.starts_with('~') {
        return path.to_path_buf();
    }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()
        .map(PathBuf::from);

    match home {
        Some(home) if path_str == "~" => home,
        Some(mut home) if path_str.starts_with("~/") || path_str.starts_with("~\\") => {
            home.push(&path_str[2..]);
            home
        }
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use std::time::Instant;

    #[test]
    fn expand_path_leaves_plain_paths_alone() {
        assert_eq!(expand_path(Path::new("logs/x")), PathBuf::from("logs/x"));
    }

    fn wait_for_line(logger: &Logger, needle: &str) -> String {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut content = String::new();
        while Instant::now() < deadline {
            content = fs::read_to_string(logger.file_path()).unwrap_or_default();
            if content.contains(needle) {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }
        content
    }

    fn test_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("facecap-logger-{tag}-{}", std::process::id()))
    }

    #[test]
    fn warn_lines_reach_the_file() {
        let dir = test_dir("warn");
        let logger = Logger::start_in_dir(&dir, Some("unit"), 8);
        logger
            .handle()
            .try_log(LogLevel::Warn, "device lost", "facecap::tests")
            .expect("queue has room");

        let content = wait_for_line(&logger, "device lost");
        assert!(content.contains("[WARN]"), "log file content: {content:?}");
        assert!(content.contains("device lost"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn single_info_line_is_flushed_while_logger_lives() {
        let dir = test_dir("idle");
        let logger = Logger::start_in_dir(&dir, Some("unit"), 8);
        logger
            .handle()
            .try_log(LogLevel::Info, "session closed", "facecap::tests")
            .expect("queue has room");

        let content = wait_for_line(&logger, "session closed");
        assert!(
            content.contains("[INFO]") && content.contains("session closed"),
            "log file content: {content:?}"
        );
        drop(logger);
        let _ = fs::remove_dir_all(&dir);
    }
}
