/// USGS NWIS Instantaneous Values (IV) response parsing.
///
/// Converts an already-fetched IV JSON body into `TimeSeries`, one per
/// (parameter, method) block. Fetching is the caller's job; this module
/// performs no I/O.
///
/// Response shape: https://waterservices.usgs.gov/docs/instantaneous-values/

use chrono::DateTime;
use serde::Deserialize;

use crate::logging::{self, Component};
use crate::model::{HydroError, Point, TimeSeries};

// ============================================================================
// IV API Response Structures
// ============================================================================

#[derive(Debug, Deserialize)]
struct IvResponse {
    value: IvValue,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IvValue {
    time_series: Vec<IvTimeSeries>,
}

#[derive(Debug, Deserialize)]
struct IvTimeSeries {
    name: Option<String>,
    variable: IvVariable,
    values: Vec<IvValues>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IvVariable {
    variable_code: Vec<IvCode>,
    no_data_value: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct IvCode {
    value: String,
}

#[derive(Debug, Deserialize)]
struct IvValues {
    value: Vec<IvPoint>,
    #[serde(default)]
    method: Vec<IvMethod>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IvPoint {
    value: String,
    #[serde(default)]
    qualifiers: Vec<String>,
    date_time: String,
}

#[derive(Debug, Deserialize)]
struct IvMethod {
    #[serde(rename = "methodID")]
    method_id: serde_json::Value, // number in practice, string in some mirrors
}

// ============================================================================
// Parsing
// ============================================================================

/// Parses an IV response body into one `TimeSeries` per method block.
///
/// Series ids are `"{parameter_code}:{method_id}"`. Values equal to the
/// series' no-data sentinel become `None`. Points are stably sorted by time.
pub fn parse_iv_response(json: &str) -> Result<Vec<TimeSeries>, HydroError> {
    let response: IvResponse = serde_json::from_str(json)?;
    let mut series = Vec::new();

    for ts in response.value.time_series {
        let parameter_code = ts
            .variable
            .variable_code
            .first()
            .map(|c| c.value.clone())
            .ok_or_else(|| {
                HydroError::ParseError(format!(
                    "timeSeries {} has no variableCode",
                    ts.name.as_deref().unwrap_or("<unnamed>")
                ))
            })?;

        for block in ts.values {
            let method_id = block
                .method
                .first()
                .map(|m| method_id_string(&m.method_id))
                .unwrap_or_default();
            let id = format!("{}:{}", parameter_code, method_id);

            let mut points = block
                .value
                .into_iter()
                .map(|p| parse_point(&id, p, ts.variable.no_data_value))
                .collect::<Result<Vec<Point>, HydroError>>()?;
            points.sort_by_key(|p| p.date_time);

            logging::debug(
                Component::Ingest,
                Some(&id),
                &format!("parsed {} points", points.len()),
            );

            series.push(TimeSeries {
                id,
                parameter_code: parameter_code.clone(),
                method_id,
                points,
            });
        }
    }

    if series.is_empty() {
        logging::warn(Component::Ingest, None, "IV response contained no timeSeries entries");
    }

    Ok(series)
}

/// Converts an ISO 8601 timestamp with offset to epoch milliseconds.
pub fn parse_date_time(raw: &str) -> Result<i64, HydroError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.timestamp_millis())
        .map_err(|_| HydroError::InvalidTimestamp(raw.to_string()))
}

fn parse_point(series_id: &str, point: IvPoint, no_data_value: Option<f64>) -> Result<Point, HydroError> {
    let date_time = parse_date_time(&point.date_time)?;

    let trimmed = point.value.trim();
    let value = if trimmed.is_empty() {
        None
    } else {
        let parsed: f64 = trimmed.parse().map_err(|_| HydroError::InvalidValue {
            series: series_id.to_string(),
            raw: point.value.clone(),
        })?;
        if no_data_value.is_some_and(|sentinel| parsed == sentinel) {
            None
        } else {
            Some(parsed)
        }
    };

    Ok(Point {
        value,
        date_time,
        qualifiers: point.qualifiers,
    })
}

fn method_id_string(raw: &serde_json::Value) -> String {
    match raw {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::fixtures;

    #[test]
    fn test_parses_one_series_per_method() {
        let series = parse_iv_response(fixtures::KINGSTON_MINES_TWO_METHODS).expect("fixture should parse");
        let ids: Vec<&str> = series.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["00060:69928", "00060:69929", "00045:11"]);
        assert_eq!(series[0].method_id, "69928");
        assert_eq!(series[0].parameter_code, "00060");
    }

    #[test]
    fn test_sentinel_becomes_missing_value() {
        let series = parse_iv_response(fixtures::KINGSTON_MINES_TWO_METHODS).unwrap();
        let ice = &series[0].points[2];
        assert_eq!(ice.value, None);
        assert_eq!(ice.qualifiers, vec!["P".to_string(), "Ice".to_string()]);
    }

    #[test]
    fn test_points_sorted_by_time() {
        let series = parse_iv_response(fixtures::KINGSTON_MINES_TWO_METHODS).unwrap();
        // The second method block is listed out of order in the fixture.
        let times: Vec<i64> = series[1].points.iter().map(|p| p.date_time).collect();
        let mut sorted = times.clone();
        sorted.sort();
        assert_eq!(times, sorted);
    }

    #[test]
    fn test_timestamp_offset_is_honoured() {
        // 08:00 at -05:00 is 13:00 UTC.
        let local = parse_date_time("2024-05-01T08:00:00.000-05:00").unwrap();
        let utc = parse_date_time("2024-05-01T13:00:00.000+00:00").unwrap();
        assert_eq!(local, utc);
        assert_eq!(utc, 1_714_568_400_000);
    }

    #[test]
    fn test_invalid_timestamp_is_error() {
        assert_eq!(
            parse_date_time("not-a-datetime"),
            Err(HydroError::InvalidTimestamp("not-a-datetime".to_string()))
        );
    }

    #[test]
    fn test_non_numeric_value_is_error() {
        let result = parse_iv_response(fixtures::BAD_VALUE);
        assert!(
            matches!(result, Err(HydroError::InvalidValue { ref raw, .. }) if raw == "n/a"),
            "got {:?}",
            result
        );
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(parse_iv_response("{\"value\":"), Err(HydroError::ParseError(_))));
    }

    #[test]
    fn test_empty_time_series_is_ok_and_empty() {
        let series = parse_iv_response(r#"{"value":{"timeSeries":[]}}"#).unwrap();
        assert!(series.is_empty());
    }
}
