//! Rolling File Logger
//!
//! Installs a global `tracing` subscriber that writes to stdout and to a
//! size-rotated file in a log directory. Records emitted through the `log`
//! crate are forwarded into the same subscriber.
//!
//! Rotation scheme for `app.log` with `max_files = 3`:
//! `app.log` -> `app.log.1` -> `app.log.2` -> `app.log.3` -> removed.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Rotate once the active file would grow past this many bytes
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Number of rotated files kept next to the active one
pub const DEFAULT_MAX_FILES: usize = 3;

/// Errors raised while setting up the logger
#[derive(Debug)]
pub enum LoggerError {
    Io(io::Error),
    AlreadyInitialized,
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::Io(e) => write!(f, "Log file error: {}", e),
            LoggerError::AlreadyInitialized => write!(f, "A global logger is already installed"),
        }
    }
}

impl std::error::Error for LoggerError {}

impl From<io::Error> for LoggerError {
    fn from(e: io::Error) -> Self {
        LoggerError::Io(e)
    }
}

/// A log file that rotates itself when it reaches `max_bytes`
pub struct RollingFile {
    path: PathBuf,
    max_bytes: u64,
    max_files: usize,
    file: File,
    written: u64,
}

impl RollingFile {
    /// Open (or continue) `<dir>/<app_name>.log`, creating `dir` if needed
    pub fn open(dir: &Path, app_name: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", app_name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            path,
            max_bytes,
            max_files,
            file,
            written,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn rotated_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{}", index));
        PathBuf::from(name)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.max_files > 0 {
            let oldest = self.rotated_path(self.max_files);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for index in (1..self.max_files).rev() {
                let from = self.rotated_path(index);
                if from.exists() {
                    fs::rename(&from, self.rotated_path(index + 1))?;
                }
            }
            fs::rename(&self.path, self.rotated_path(1))?;
        }

        // File::create truncates, which is what max_files == 0 wants too
        self.file = File::create(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Cloneable handle handed to `tracing_subscriber` as a writer factory
#[derive(Clone)]
pub struct SharedRollingFile(Arc<Mutex<RollingFile>>);

impl SharedRollingFile {
    pub fn new(file: RollingFile) -> Self {
        Self(Arc::new(Mutex::new(file)))
    }
}

impl Write for SharedRollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedRollingFile {
    type Writer = SharedRollingFile;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Install the global logger with default rotation limits.
///
/// Returns the path of the active log file. The filter is taken from
/// `RUST_LOG` and falls back to `info`.
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<PathBuf, LoggerError> {
    init_logger_with(log_dir, app_name, DEFAULT_MAX_BYTES, DEFAULT_MAX_FILES)
}

/// Install the global logger with explicit rotation limits
pub fn init_logger_with(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    max_bytes: u64,
    max_files: usize,
) -> Result<PathBuf, LoggerError> {
    let file = RollingFile::open(log_dir.as_ref(), app_name, max_bytes, max_files)?;
    let path = file.path().to_path_buf();
    let writer = SharedRollingFile::new(file);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_timer(LocalTime))
        .with(fmt::layer().with_timer(LocalTime).with_ansi(false).with_writer(writer))
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    tracing::info!(app = app_name, path = %path.display(), "Logger initialized");
    Ok(path)
}

pub fn info(message: &str) {
    tracing::info!("{}", message);
}

pub fn error(message: &str) {
    tracing::error!("{}", message);
}
