//! Diagnostic logging
//!
//! File reads, enum fallbacks and collaborator failures leave a trail here.
//! The sink is process-global and off unless configured.

pub mod file_logger;

pub use file_logger::{
    log, trace, debug, info, warn, error,
    level, set_level, set_format, set_output, log_file_path,
    LogLevel, LogFormat, LOG_FILE_ENV, LOG_LEVEL_ENV,
};

use std::io;
use std::path::Path;

use crate::config::Logging;

/// Apply a bound `Logging` node to the global sink
///
/// - `level`: minimum level; unrecognized values keep the current level
/// - `format`: `json` or anything else for raw lines
/// - `output`: a file path (a `file://` prefix is accepted), `stderr`, or
///   empty to turn output off
pub fn configure(logging: &Logging) -> io::Result<()> {
    if let Some(level) = LogLevel::parse(&logging.level) {
        set_level(level);
    }
    set_format(LogFormat::parse(&logging.format));

    let output = crate::resolve::strip_file_scheme(&logging.output);
    if output.is_empty() {
        set_output(None)
    } else {
        set_output(Some(Path::new(output)))
    }
}
