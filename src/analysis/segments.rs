/// Line segmentation of classified time series.
///
/// A hydrograph is drawn as a set of line segments, each with a single
/// style. Both segmentations in this module walk the points once, in order,
/// and differ only in the `SegmentStrategy` they run with:
///
/// - `line_segments` keys on the four line-style facets and never
///   duplicates points, so the segments partition the input exactly.
/// - `display_segments` keys on a single `PointKind` and bridges kind
///   changes by duplicating the boundary point, so neighbouring lines meet.
///
/// Both start a new segment when an unmasked point comes more than
/// `gap_threshold_ms` after the previous point. Such a split never duplicates
/// a point, even when the key changes across the gap. Masked runs are never
/// split on gaps. Input must already be sorted by `date_time`.

use serde::Serialize;

use crate::analysis::classify::{classify_point, primary_mask, PointKind};
use crate::model::Point;
use crate::qualifiers::MaskCode;

// ---------------------------------------------------------------------------
// Shared iteration core
// ---------------------------------------------------------------------------

/// What happens to the boundary point when the key changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Segments share no points.
    Disjoint,
    /// A masked segment absorbs the next point; an unmasked segment lends
    /// its last point to the next segment.
    Bridged,
}

pub trait SegmentStrategy {
    type Key: Copy + PartialEq;

    fn key(&self, point: &Point) -> Self::Key;

    fn is_masked(&self, key: &Self::Key) -> bool;

    fn boundary_policy(&self) -> BoundaryPolicy;
}

/// A maximal run of points sharing one key.
#[derive(Debug, Clone, PartialEq)]
pub struct Run<K> {
    pub key: K,
    pub points: Vec<Point>,
}

enum Step {
    Start,
    Extend,
    SplitOnGap,
    KeyChange,
}

/// Walks `points` once and groups them into runs according to `strategy`.
pub fn segment_with<S: SegmentStrategy>(
    points: &[Point],
    strategy: &S,
    gap_threshold_ms: i64,
) -> Vec<Run<S::Key>> {
    let mut runs: Vec<Run<S::Key>> = Vec::new();

    for point in points {
        let key = strategy.key(point);

        // An unmasked point past the gap threshold always starts a fresh
        // run, even on a key change, so no line is bridged across the gap.
        let step = match runs.last() {
            None => Step::Start,
            Some(current) => {
                let gap_exceeded = current
                    .points
                    .last()
                    .is_some_and(|last| point.date_time - last.date_time > gap_threshold_ms);
                if !strategy.is_masked(&key) && gap_exceeded {
                    Step::SplitOnGap
                } else if current.key != key {
                    Step::KeyChange
                } else {
                    Step::Extend
                }
            }
        };

        match step {
            Step::Extend => {
                if let Some(current) = runs.last_mut() {
                    current.points.push(point.clone());
                }
            }
            Step::Start | Step::SplitOnGap => runs.push(Run {
                key,
                points: vec![point.clone()],
            }),
            Step::KeyChange => {
                let mut lead_in = Vec::new();
                if strategy.boundary_policy() == BoundaryPolicy::Bridged {
                    if let Some(current) = runs.last_mut() {
                        if strategy.is_masked(&current.key) {
                            current.points.push(point.clone());
                        } else if let Some(last) = current.points.last() {
                            lead_in.push(last.clone());
                        }
                    }
                }
                lead_in.push(point.clone());
                runs.push(Run { key, points: lead_in });
            }
        }
    }

    runs
}

// ---------------------------------------------------------------------------
// Line segments (four-facet classification)
// ---------------------------------------------------------------------------

/// Style facets shared by every point of a line segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineClasses {
    pub approved: bool,
    pub estimated: bool,
    pub current_method: bool,
    pub data_mask: Option<MaskCode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSegment {
    pub classes: LineClasses,
    pub points: Vec<Point>,
}

impl LineSegment {
    pub fn is_masked(&self) -> bool {
        self.classes.data_mask.is_some()
    }
}

struct LineFacets {
    is_current_method: bool,
}

impl SegmentStrategy for LineFacets {
    type Key = LineClasses;

    fn key(&self, point: &Point) -> LineClasses {
        let classes = classify_point(point, self.is_current_method);
        LineClasses {
            approved: classes.approved,
            estimated: classes.estimated,
            current_method: classes.current_method,
            data_mask: primary_mask(point.date_time, &classes.data_mask),
        }
    }

    fn is_masked(&self, key: &LineClasses) -> bool {
        key.data_mask.is_some()
    }

    fn boundary_policy(&self) -> BoundaryPolicy {
        BoundaryPolicy::Disjoint
    }
}

/// Partitions one series into styled line segments.
///
/// A new segment starts whenever approval, estimation, current-method or
/// mask changes, even between contiguous points, and on gaps longer than
/// `gap_threshold_ms` between unmasked points. Concatenating the segments'
/// points gives back `points` unchanged.
pub fn line_segments(points: &[Point], is_current_method: bool, gap_threshold_ms: i64) -> Vec<LineSegment> {
    segment_with(points, &LineFacets { is_current_method }, gap_threshold_ms)
        .into_iter()
        .map(|run| LineSegment {
            classes: run.key,
            points: run.points,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Display segments (single-label classification)
// ---------------------------------------------------------------------------

/// A point reduced to what tooltips and labels need.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuePoint {
    pub value: Option<f64>,
    pub date_time: i64,
}

impl From<&Point> for ValuePoint {
    fn from(point: &Point) -> Self {
        ValuePoint {
            value: point.value,
            date_time: point.date_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySegment {
    #[serde(skip)]
    pub kind: PointKind,
    pub label: &'static str,
    pub class: String,
    pub is_masked: bool,
    pub points: Vec<ValuePoint>,
}

struct DisplayLabels;

impl SegmentStrategy for DisplayLabels {
    type Key = PointKind;

    fn key(&self, point: &Point) -> PointKind {
        PointKind::of(point)
    }

    fn is_masked(&self, key: &PointKind) -> bool {
        key.is_masked()
    }

    fn boundary_policy(&self) -> BoundaryPolicy {
        BoundaryPolicy::Bridged
    }
}

/// Groups one series into labelled segments for tooltips and legends.
///
/// On a kind change the boundary point is duplicated so rendered lines
/// meet: a masked segment is extended to the first point of the next
/// segment, and a segment following unmasked data starts at that data's
/// last point. Gap splits never duplicate points.
pub fn display_segments(points: &[Point], gap_threshold_ms: i64) -> Vec<DisplaySegment> {
    segment_with(points, &DisplayLabels, gap_threshold_ms)
        .into_iter()
        .map(|run| DisplaySegment {
            kind: run.key,
            label: run.key.label(),
            class: run.key.css_class(),
            is_masked: run.key.is_masked(),
            points: run.points.iter().map(ValuePoint::from).collect(),
        })
        .collect()
}

/// The distinct kinds of data on display, in first-seen order.
pub fn displayed_kinds(segments: &[DisplaySegment]) -> Vec<PointKind> {
    let mut kinds: Vec<PointKind> = Vec::new();
    for segment in segments {
        if !kinds.contains(&segment.kind) {
            kinds.push(segment.kind);
        }
    }
    kinds
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
