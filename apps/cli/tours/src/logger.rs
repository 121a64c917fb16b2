//! Logging for the `tours` command line client.
//!
//! Provides dual output (stderr with colors + file) with thread-safe initialization.
//! Command output goes to stdout, so log lines never mix into piped results.

use crate::error::TourCliError;

use common::ErrorLocation;

use std::io::stderr;
use std::panic::Location;
use std::path::Path;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

/// Thread-safe initialization guard.
static INIT_LOGGER_ONCE: Once = Once::new();

/// Tracks if logger initialization was already attempted.
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

const LOG_FILE_NAME: &str = "tours.log";

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";

const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

/// Level for the terminal when `--verbose` is not given.
pub const DEFAULT_CONSOLE_LEVEL: LevelFilter = LevelFilter::Warn;

/// Level for the log file.
#[cfg(debug_assertions)]
const FILE_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
const FILE_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Initialize the logger with dual output (stderr + file).
///
/// Safe to call multiple times - subsequent calls log a warning and return Ok.
///
/// # Arguments
///
/// * `log_dir` - Directory where the log file will be created
/// * `console_level` - Most verbose level echoed to stderr
///
/// # Errors
///
/// Returns an error if:
/// - Log file cannot be created
/// - Logger dispatch configuration fails
pub fn initialize(log_dir: &Path, console_level: LevelFilter) -> Result<(), TourCliError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = initialize_internal(log_dir, console_level);
        if result.is_ok() {
            info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{console_level:?} (file: {FILE_LOG_LEVEL:?})");
        }
    });

    result
}

#[track_caller]
fn initialize_internal(log_dir: &Path, console_level: LevelFilter) -> Result<(), TourCliError> {
    let log_file_path = log_dir.join(LOG_FILE_NAME);

    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    // The base level admits everything either sink wants; each sink filters further
    let base_dispatch = Dispatch::new().level(console_level.max(FILE_LOG_LEVEL));

    let console_dispatch = Dispatch::new()
        .level(console_level)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message}",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
            ))
        })
        .chain(stderr());

    let file_dispatch = Dispatch::new()
        .level(FILE_LOG_LEVEL)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0)
            ))
        })
        .chain(
            fern::log_file(&log_file_path).map_err(|e| TourCliError::Cli {
                message: format!("Failed to create log file: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?,
        );

    base_dispatch
        .chain(console_dispatch)
        .chain(file_dispatch)
        .apply()
        .map_err(|e| TourCliError::Cli {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}
