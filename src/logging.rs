/// Structured logging for hydrograph segmentation
///
/// Provides leveled logging tagged with the emitting component and, where
/// relevant, the series identifier. Supports console output and optional
/// append-to-file logging. Nothing is emitted until `init_logger` is called,
/// so library callers that never configure logging see no output.

use chrono::Utc;
use serde::Deserialize;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

use crate::qualifiers::MaskCode;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Classifier,
    Segments,
    Cumulative,
    Ingest,
    Config,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Classifier => write!(f, "CLASSIFY"),
            Component::Segments => write!(f, "SEGMENTS"),
            Component::Cumulative => write!(f, "CUMULATIVE"),
            Component::Ingest => write!(f, "INGEST"),
            Component::Config => write!(f, "CONFIG"),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
    /// Optional file path for logging
    log_file: Option<String>,
    /// Whether to include timestamps in console output
    console_timestamps: bool,
}

impl Logger {
    /// Initialize the global logger
    pub fn init(min_level: LogLevel, log_file: Option<String>, console_timestamps: bool) {
        let logger = Logger {
            min_level,
            log_file,
            console_timestamps,
        };

        if let Ok(mut slot) = LOGGER.lock() {
            *slot = Some(logger);
        }
    }

    fn format_entry(level: LogLevel, component: Component, series_id: Option<&str>, message: &str) -> String {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let series_part = series_id.map(|s| format!(" [{}]", s)).unwrap_or_default();
        format!("{} {} {}{}: {}", timestamp, level, component, series_part, message)
    }

    fn log(&self, level: LogLevel, component: Component, series_id: Option<&str>, message: &str) {
        if level < self.min_level {
            return;
        }

        let log_entry = Self::format_entry(level, component, series_id, message);
        let series_part = series_id.map(|s| format!(" [{}]", s)).unwrap_or_default();

        // Console output
        if self.console_timestamps {
            match level {
                LogLevel::Error | LogLevel::Warning => eprintln!("{}", log_entry),
                LogLevel::Info | LogLevel::Debug => println!("{}", log_entry),
            }
        } else {
            match level {
                LogLevel::Error => eprintln!("   ✗ {}{}: {}", component, series_part, message),
                LogLevel::Warning => eprintln!("   ⚠ {}{}: {}", component, series_part, message),
                LogLevel::Info => println!("   {}", message),
                LogLevel::Debug => println!("   [DEBUG] {}{}: {}", component, series_part, message),
            }
        }

        // File output
        if let Some(ref path) = self.log_file {
            if let Err(e) = Self::append_to_file(path, &log_entry) {
                eprintln!("Failed to write to log file {}: {}", path, e);
            }
        }
    }

    fn append_to_file(path: &str, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&str>, console_timestamps: bool) {
    Logger::init(min_level, log_file.map(String::from), console_timestamps);
}

fn dispatch(level: LogLevel, component: Component, series_id: Option<&str>, message: &str) {
    if let Ok(guard) = LOGGER.lock() {
        if let Some(logger) = guard.as_ref() {
            logger.log(level, component, series_id, message);
        }
    }
}

/// Log a general informational message
pub fn info(component: Component, series_id: Option<&str>, message: &str) {
    dispatch(LogLevel::Info, component, series_id, message);
}

/// Log a warning message
pub fn warn(component: Component, series_id: Option<&str>, message: &str) {
    dispatch(LogLevel::Warning, component, series_id, message);
}

/// Log an error message
pub fn error(component: Component, series_id: Option<&str>, message: &str) {
    dispatch(LogLevel::Error, component, series_id, message);
}

/// Log a debug message
pub fn debug(component: Component, series_id: Option<&str>, message: &str) {
    dispatch(LogLevel::Debug, component, series_id, message);
}

// ---------------------------------------------------------------------------
// Domain Logging Helpers
// ---------------------------------------------------------------------------

/// Warn that a point carried several masking qualifiers and which one won.
pub fn log_mask_conflict(date_time: i64, masks: &[MaskCode], chosen: MaskCode) {
    let codes: Vec<&str> = masks.iter().map(|m| m.code()).collect();
    let message = format!(
        "point at {} has {} mask qualifiers [{}]; using '{}'",
        date_time,
        masks.len(),
        codes.join(", "),
        chosen
    );
    warn(Component::Classifier, None, &message);
}

/// Log a summary of one segmentation pass
pub fn log_segmentation_summary(series_id: &str, points: usize, segments: usize, masked: usize) {
    let message = format!(
        "{} points -> {} segments ({} masked)",
        points, segments, masked
    );

    if points > 0 && segments == 0 {
        error(Component::Segments, Some(series_id), &message);
    } else {
        debug(Component::Segments, Some(series_id), &message);
    }
}
