/// Segmentation and logging configuration.
///
/// Settings live in a TOML file. Every field has a default, so an empty file
/// (or no file at all) yields the standard hydrograph behaviour: a 72-minute
/// gap threshold and running totals for precipitation.
///
/// ```toml
/// [segments]
/// gap_threshold_minutes = 72
/// accumulate_parameter_codes = ["00045"]
///
/// [logging]
/// level = "info"
/// file = "hydrograph.log"
/// timestamps = true
/// ```

use serde::Deserialize;
use std::env;
use std::path::Path;

use crate::logging::{self, Component, LogLevel};
use crate::model::{HydroError, PARAM_PRECIPITATION};

/// Consecutive unmasked points further apart than this start a new line.
pub const GAP_THRESHOLD_MINUTES: i64 = 72;

/// `GAP_THRESHOLD_MINUTES` in epoch milliseconds (4,320,000).
pub const GAP_THRESHOLD_MS: i64 = GAP_THRESHOLD_MINUTES * 60 * 1000;

/// Environment variable naming the config file read by `from_env`.
pub const CONFIG_PATH_VAR: &str = "HYDROGRAPH_CONFIG";

/// Environment variable overriding `[logging] level`.
pub const LOG_LEVEL_VAR: &str = "HYDROGRAPH_LOG_LEVEL";

// ---------------------------------------------------------------------------
// Config types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct SegmentConfig {
    pub segments: SegmentSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SegmentSettings {
    pub gap_threshold_minutes: i64,
    /// Parameter codes displayed as running totals since the last gap.
    pub accumulate_parameter_codes: Vec<String>,
}

impl Default for SegmentSettings {
    fn default() -> Self {
        SegmentSettings {
            gap_threshold_minutes: GAP_THRESHOLD_MINUTES,
            accumulate_parameter_codes: vec![PARAM_PRECIPITATION.to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: LogLevel,
    pub file: Option<String>,
    pub timestamps: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: LogLevel::Info,
            file: None,
            timestamps: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl SegmentConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<SegmentConfig, HydroError> {
        let config: SegmentConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<SegmentConfig, HydroError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| HydroError::Io(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&contents)?;
        logging::debug(
            Component::Config,
            None,
            &format!("loaded segmentation config from {}", path.display()),
        );
        Ok(config)
    }

    /// Loads `.env` if present, then reads the file named by
    /// `HYDROGRAPH_CONFIG` (defaults when unset) and applies a
    /// `HYDROGRAPH_LOG_LEVEL` override.
    pub fn from_env() -> Result<SegmentConfig, HydroError> {
        dotenv::dotenv().ok();

        let mut config = match env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::load(path)?,
            Err(_) => SegmentConfig::default(),
        };

        if let Ok(level) = env::var(LOG_LEVEL_VAR) {
            config.logging.level = level
                .parse()
                .map_err(|e: String| HydroError::ConfigError(format!("{}: {}", LOG_LEVEL_VAR, e)))?;
        }

        Ok(config)
    }

    fn validate(&self) -> Result<(), HydroError> {
        if self.segments.gap_threshold_minutes <= 0 {
            return Err(HydroError::ConfigError(format!(
                "gap_threshold_minutes must be positive, got {}",
                self.segments.gap_threshold_minutes
            )));
        }
        if self.segments.gap_threshold_minutes.checked_mul(60 * 1000).is_none() {
            return Err(HydroError::ConfigError(format!(
                "gap_threshold_minutes {} is too large to express in milliseconds",
                self.segments.gap_threshold_minutes
            )));
        }
        for code in &self.segments.accumulate_parameter_codes {
            if code.len() != 5 || !code.chars().all(|c| c.is_ascii_digit()) {
                return Err(HydroError::ConfigError(format!(
                    "'{}' is not a 5-digit USGS parameter code",
                    code
                )));
            }
        }
        Ok(())
    }

    pub fn gap_threshold_ms(&self) -> i64 {
        // Saturates for hand-built configs that skipped validation.
        self.segments.gap_threshold_minutes.saturating_mul(60 * 1000)
    }

    /// True if series with this parameter code are shown as running totals.
    pub fn accumulates(&self, parameter_code: &str) -> bool {
        self.segments
            .accumulate_parameter_codes
            .iter()
            .any(|c| c == parameter_code)
    }

    /// Installs the global logger described by the `[logging]` table.
    pub fn init_logging(&self) {
        logging::init_logger(
            self.logging.level,
            self.logging.file.as_deref(),
            self.logging.timestamps,
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
