/// Series-level segmentation.
///
/// Ties the point-level algorithms to `TimeSeries` metadata: the parameter
/// code decides whether values become running totals, and the method id
/// decides whether lines are styled as the selected method.

use std::collections::BTreeMap;

use crate::analysis::cumulative::accumulate;
use crate::analysis::segments::{line_segments, LineSegment};
use crate::config::SegmentConfig;
use crate::logging::{self, Component};
use crate::model::{Point, TimeSeries};

/// Points as they should be drawn: running totals for accumulating
/// parameters, the raw points otherwise.
pub fn prepare_points(series: &TimeSeries, config: &SegmentConfig) -> Vec<Point> {
    if config.accumulates(&series.parameter_code) {
        logging::debug(
            Component::Cumulative,
            Some(&series.id),
            &format!("accumulating {} points for parameter {}", series.points.len(), series.parameter_code),
        );
        accumulate(&series.points)
    } else {
        series.points.clone()
    }
}

/// True when no method is selected or the series belongs to the selected one.
pub fn is_current_method(series: &TimeSeries, current_method_id: Option<&str>) -> bool {
    current_method_id.is_none_or(|id| id == series.method_id)
}

/// Line segments for one series.
pub fn line_segments_for_series(
    series: &TimeSeries,
    current_method_id: Option<&str>,
    config: &SegmentConfig,
) -> Vec<LineSegment> {
    let points = prepare_points(series, config);
    let segments = line_segments(
        &points,
        is_current_method(series, current_method_id),
        config.gap_threshold_ms(),
    );

    let masked = segments.iter().filter(|s| s.is_masked()).count();
    logging::log_segmentation_summary(&series.id, points.len(), segments.len(), masked);
    segments
}

/// Line segments for several series, keyed by series id.
pub fn line_segments_by_series(
    series: &[TimeSeries],
    current_method_id: Option<&str>,
    config: &SegmentConfig,
) -> BTreeMap<String, Vec<LineSegment>> {
    series
        .iter()
        .map(|ts| (ts.id.clone(), line_segments_for_series(ts, current_method_id, config)))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
