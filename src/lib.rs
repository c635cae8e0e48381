/// hydrograph_segments: classification and line segmentation for USGS
/// hydrograph time series.
///
/// # Module structure
///
/// ```text
/// hydrograph_segments
/// ├── model       : shared data types (Point, TimeSeries, HydroError, parameter codes)
/// ├── qualifiers  : approval and masking qualifier vocabulary
/// ├── config      : TOML configuration (gap threshold, accumulating parameters, logging)
/// ├── logging     : leveled, component-tagged logging
/// ├── ingest
/// │   ├── usgs    : NWIS IV JSON parsing
/// │   └── fixtures (test only) : representative API response payloads
/// └── analysis
///     ├── classify   : per-point facets and kinds
///     ├── cumulative : running totals for precipitation
///     ├── segments   : line and display segmentation
///     ├── series     : per-series preparation and multi-series segmentation
///     └── cursor     : nearest-point lookup
/// ```

pub mod analysis;
pub mod config;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod qualifiers;

pub use analysis::classify::{classify_point, primary_mask, PointClasses, PointKind};
pub use analysis::cumulative::accumulate;
pub use analysis::cursor::nearest_point;
pub use analysis::segments::{
    display_segments, displayed_kinds, line_segments, DisplaySegment, LineClasses, LineSegment,
    ValuePoint,
};
pub use analysis::series::{line_segments_by_series, line_segments_for_series, prepare_points};
pub use config::{SegmentConfig, GAP_THRESHOLD_MS};
pub use model::{HydroError, Point, TimeSeries};
pub use qualifiers::MaskCode;
