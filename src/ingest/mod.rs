/// Ingestion of USGS water-data payloads into the crate's model types.
///
/// Submodules:
/// - `usgs`: NWIS IV JSON parsing.
/// - `fixtures` (test only): representative API response payloads.

pub mod usgs;

#[cfg(test)]
pub(crate) mod fixtures;
