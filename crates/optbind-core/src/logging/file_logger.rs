//! Process-wide diagnostic log sink
//!
//! Nothing is written until a sink is configured, either through the
//! `OPTBIND_LOG_FILE` environment variable (read once, on first use) or at
//! runtime with `set_output` / `configure`. The minimum level comes from
//! `OPTBIND_LOG_LEVEL` and defaults to `debug`.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde::Serialize;

/// Environment variable naming the log file
pub const LOG_FILE_ENV: &str = "OPTBIND_LOG_FILE";

/// Environment variable holding the minimum level
pub const LOG_LEVEL_ENV: &str = "OPTBIND_LOG_LEVEL";

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// Parse a level name, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<5}", self.as_str())
    }
}

/// Line layout written to the sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `[secs.millis] [LEVEL] [module] message`
    #[default]
    Raw,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Raw
        }
    }
}

enum Target {
    Off,
    Stderr,
    File { path: PathBuf, file: File },
}

#[derive(Serialize)]
struct JsonLine<'a> {
    ts: f64,
    level: LogLevel,
    module: &'a str,
    msg: &'a str,
}

struct Sink {
    target: Target,
    min_level: LogLevel,
    format: LogFormat,
}

impl Sink {
    fn from_env() -> Self {
        let min_level = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .and_then(|v| LogLevel::parse(&v))
            .unwrap_or(LogLevel::Debug);

        let target = std::env::var(LOG_FILE_ENV)
            .ok()
            .filter(|p| !p.is_empty())
            .and_then(|p| open_target(Path::new(&p)).ok())
            .unwrap_or(Target::Off);

        Self {
            target,
            min_level,
            format: LogFormat::Raw,
        }
    }

    fn write(&mut self, level: LogLevel, module: &str, message: &str) {
        if level < self.min_level {
            return;
        }

        let ts = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or_default();

        let line = match self.format {
            LogFormat::Raw => format!("[{:.3}] [{}] [{}] {}", ts, level, module, message),
            LogFormat::Json => {
                let entry = JsonLine { ts, level, module, msg: message };
                match serde_json::to_string(&entry) {
                    Ok(line) => line,
                    Err(_) => return,
                }
            }
        };

        match &mut self.target {
            Target::Off => {}
            Target::Stderr => eprintln!("{}", line),
            Target::File { file, .. } => {
                let _ = writeln!(file, "{}", line);
                let _ = file.flush();
            }
        }
    }
}

fn open_target(path: &Path) -> io::Result<Target> {
    if path.as_os_str() == "stderr" {
        return Ok(Target::Stderr);
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(Target::File {
        path: path.to_path_buf(),
        file,
    })
}

static SINK: Lazy<Mutex<Sink>> = Lazy::new(|| Mutex::new(Sink::from_env()));

/// Log a message at the specified level
pub fn log(level: LogLevel, module: &str, message: &str) {
    SINK.lock().write(level, module, message);
}

pub fn trace(module: &str, message: &str) {
    log(LogLevel::Trace, module, message);
}

pub fn debug(module: &str, message: &str) {
    log(LogLevel::Debug, module, message);
}

pub fn info(module: &str, message: &str) {
    log(LogLevel::Info, module, message);
}

pub fn warn(module: &str, message: &str) {
    log(LogLevel::Warn, module, message);
}

pub fn error(module: &str, message: &str) {
    log(LogLevel::Error, module, message);
}

/// Current minimum level
pub fn level() -> LogLevel {
    SINK.lock().min_level
}

/// Change the minimum level
pub fn set_level(level: LogLevel) {
    SINK.lock().min_level = level;
}

/// Change the line layout
pub fn set_format(format: LogFormat) {
    SINK.lock().format = format;
}

/// Redirect output to a file (appending), to `"stderr"`, or turn it off with `None`
pub fn set_output(path: Option<&Path>) -> io::Result<()> {
    let target = match path {
        Some(path) => open_target(path)?,
        None => Target::Off,
    };
    SINK.lock().target = target;
    Ok(())
}

/// Path of the current log file, if output goes to a file
pub fn log_file_path() -> Option<PathBuf> {
    match &SINK.lock().target {
        Target::File { path, .. } => Some(path.clone()),
        _ => None,
    }
}

/// Convenience macros for logging with automatic module name
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        $crate::logging::file_logger::trace(module_path!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::logging::file_logger::debug(module_path!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        $crate::logging::file_logger::info(module_path!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::logging::file_logger::warn(module_path!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::logging::file_logger::error(module_path!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_levels() {
        assert!(LogLevel::Debug > LogLevel::Trace);
        assert!(LogLevel::Info > LogLevel::Debug);
        assert!(LogLevel::Warn > LogLevel::Info);
        assert!(LogLevel::Error > LogLevel::Warn);
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("WARNING"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("Info"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("verbose"), None);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse(""), LogFormat::Raw);
    }

    #[test]
    fn test_logging_without_sink() {
        // Must not panic whether or not a sink is configured
        debug("test", "test message");
        info("test", "test message");
        warn("test", "test message");
        error("test", "test message");
    }
}
