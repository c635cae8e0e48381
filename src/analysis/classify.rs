/// Per-point quality classification.
///
/// Two views of the same qualifiers are provided:
/// - `PointClasses`: independent facets (approved, estimated, current method,
///   masks), used to style hydrograph lines.
/// - `PointKind`: a single category with a label, used for tooltips and the
///   legend of data kinds on display.

use serde::Serialize;

use crate::logging;
use crate::model::Point;
use crate::qualifiers::{mask_codes_in, MaskCode, QUALIFIER_APPROVED, QUALIFIER_ESTIMATED};

// ---------------------------------------------------------------------------
// Facet classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointClasses {
    pub approved: bool,
    pub estimated: bool,
    pub current_method: bool,
    /// Masking qualifiers in vocabulary order. Only populated when the
    /// point's value is missing; normally holds zero or one code.
    pub data_mask: Vec<MaskCode>,
}

/// Computes the classification facets of one point.
///
/// Masks are only reported for points without a value: a numeric reading
/// that still carries a masking qualifier is drawn as ordinary data.
pub fn classify_point(point: &Point, is_current_method: bool) -> PointClasses {
    let data_mask = if point.value.is_none() {
        mask_codes_in(&point.qualifiers)
    } else {
        Vec::new()
    };

    PointClasses {
        approved: point.has_qualifier(QUALIFIER_APPROVED),
        estimated: QUALIFIER_ESTIMATED.iter().any(|code| point.has_qualifier(code)),
        current_method: is_current_method,
        data_mask,
    }
}

/// Picks the mask a point is drawn with.
///
/// Returns the first code in vocabulary order. Points are expected to carry
/// at most one mask; when several are present the choice is logged.
pub fn primary_mask(date_time: i64, masks: &[MaskCode]) -> Option<MaskCode> {
    let chosen = masks.first().copied()?;
    if masks.len() > 1 {
        logging::log_mask_conflict(date_time, masks, chosen);
    }
    Some(chosen)
}

// ---------------------------------------------------------------------------
// Single-category classification
// ---------------------------------------------------------------------------

/// The one category a point is labelled with in tooltips and legends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PointKind {
    Approved,
    Estimated,
    Provisional,
    Masked(MaskCode),
}

impl PointKind {
    /// Categorizes a point. A missing value is always masked; when no
    /// masking qualifier explains it, it is reported as `Unavailable`.
    /// Approval wins over estimation when both qualifiers are present.
    pub fn of(point: &Point) -> PointKind {
        if point.value.is_none() {
            let classes = classify_point(point, true);
            let mask = primary_mask(point.date_time, &classes.data_mask).unwrap_or(MaskCode::Unavailable);
            return PointKind::Masked(mask);
        }
        if point.has_qualifier(QUALIFIER_APPROVED) {
            PointKind::Approved
        } else if QUALIFIER_ESTIMATED.iter().any(|code| point.has_qualifier(code)) {
            PointKind::Estimated
        } else {
            PointKind::Provisional
        }
    }

    pub fn is_masked(self) -> bool {
        matches!(self, PointKind::Masked(_))
    }

    pub fn label(self) -> &'static str {
        match self {
            PointKind::Approved => "Approved",
            PointKind::Estimated => "Estimated",
            PointKind::Provisional => "Provisional",
            PointKind::Masked(mask) => mask.description(),
        }
    }

    /// Style class for the rendering layer, e.g. `"approved"` or
    /// `"ice-affected-mask"`.
    pub fn css_class(self) -> String {
        match self {
            PointKind::Approved => "approved".to_string(),
            PointKind::Estimated => "estimated".to_string(),
            PointKind::Provisional => "provisional".to_string(),
            PointKind::Masked(mask) => {
                format!("{}-mask", mask.description().to_lowercase().replace(' ', "-"))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
