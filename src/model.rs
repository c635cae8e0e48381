/// Core data types for hydrograph segmentation.
///
/// This module defines the shared domain model imported by all other modules:
/// observation points, time series, USGS parameter codes and the crate error
/// type. It contains no segmentation logic.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Parameter codes
// ---------------------------------------------------------------------------

/// USGS parameter code for discharge (streamflow), in cubic feet per second.
pub const PARAM_DISCHARGE: &str = "00060";

/// USGS parameter code for gage height (stage), in feet.
pub const PARAM_STAGE: &str = "00065";

/// USGS parameter code for precipitation total, in inches.
/// Displayed as a running total rather than per-interval readings.
pub const PARAM_PRECIPITATION: &str = "00045";

// ---------------------------------------------------------------------------
// Point types
// ---------------------------------------------------------------------------

/// A single observation in a time series.
///
/// `value` is `None` when the reading is unavailable, which usually
/// coincides with a masking qualifier such as `Ice` or `Eqp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub value: Option<f64>,
    pub date_time: i64, // epoch milliseconds
    pub qualifiers: Vec<String>,
}

impl Point {
    pub fn new(value: Option<f64>, date_time: i64, qualifiers: &[&str]) -> Self {
        Point {
            value,
            date_time,
            qualifiers: qualifiers.iter().map(|q| q.to_string()).collect(),
        }
    }

    /// True if any qualifier equals `code` exactly (case-sensitive).
    pub fn has_qualifier(&self, code: &str) -> bool {
        self.qualifiers.iter().any(|q| q == code)
    }
}

/// All points reported for one parameter by one measurement method.
///
/// `id` keys the series in multi-series results. Points are expected in
/// ascending `date_time` order; nothing downstream re-sorts them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeries {
    pub id: String,
    pub parameter_code: String,
    pub method_id: String,
    pub points: Vec<Point>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised at the fallible edges of the crate: payload parsing and
/// configuration loading. Segmentation itself never fails.
#[derive(Debug, PartialEq)]
pub enum HydroError {
    /// The IV payload could not be deserialized or lacked a required field.
    ParseError(String),
    /// A `dateTime` string was not valid ISO 8601 with an offset.
    InvalidTimestamp(String),
    /// A point value string was neither numeric nor the no-data sentinel.
    InvalidValue { series: String, raw: String },
    /// The configuration file was malformed or held an unusable value.
    ConfigError(String),
    /// The configuration file could not be read.
    Io(String),
}

impl std::fmt::Display for HydroError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HydroError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            HydroError::InvalidTimestamp(raw) => write!(f, "Invalid timestamp: {}", raw),
            HydroError::InvalidValue { series, raw } => {
                write!(f, "Invalid value in series {}: {:?}", series, raw)
            }
            HydroError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            HydroError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for HydroError {}

impl From<serde_json::Error> for HydroError {
    fn from(err: serde_json::Error) -> Self {
        HydroError::ParseError(err.to_string())
    }
}

impl From<toml::de::Error> for HydroError {
    fn from(err: toml::de::Error) -> Self {
        HydroError::ConfigError(err.to_string())
    }
}

impl From<std::io::Error> for HydroError {
    fn from(err: std::io::Error) -> Self {
        HydroError::Io(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
