/// Segmentation and classification of hydrograph time series.
///
/// Everything here is a pure function over sorted point slices; results
/// are recomputed on every call and never cached.
///
/// Submodules:
/// - `classify`: per-point quality facets and single-label kinds.
/// - `cumulative`: running totals for accumulating parameters.
/// - `segments`: line and display segmentation over one shared walk.
/// - `series`: applies the above to `TimeSeries` with their metadata.
/// - `cursor`: nearest-point lookup for tooltips.

pub mod classify;
pub mod cumulative;
pub mod cursor;
pub mod segments;
pub mod series;
