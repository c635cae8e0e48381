/// Qualifier vocabulary for USGS instantaneous-value data.
///
/// Qualifier codes are effectively a wire contract with the water-data
/// service: approval-family codes mark the review status of a reading, and
/// masking codes explain why a reading is missing. This module is the single
/// source of truth for both; other modules should never match on raw
/// qualifier strings themselves.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Approval-family codes
// ---------------------------------------------------------------------------

/// Approved for publication. Matched case-sensitively.
pub const QUALIFIER_APPROVED: &str = "A";

/// Estimated value. Both cases appear in service data.
pub const QUALIFIER_ESTIMATED: &[&str] = &["E", "e"];

// ---------------------------------------------------------------------------
// Masking codes
// ---------------------------------------------------------------------------

/// A physical or operational condition that prevented a measurement.
///
/// Variants are declared in vocabulary order. When a point carries more
/// than one masking qualifier, this order decides which one is primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaskCode {
    #[serde(rename = "ice")]
    Ice,
    #[serde(rename = "fld")]
    Flood,
    #[serde(rename = "bkw")]
    Backwater,
    #[serde(rename = "zfl")]
    Zeroflow,
    #[serde(rename = "dry")]
    Dry,
    #[serde(rename = "ssn")]
    Seasonal,
    #[serde(rename = "pr")]
    PartialRecord,
    #[serde(rename = "rat")]
    RatingDevelopment,
    #[serde(rename = "eqp")]
    EquipmentMalfunction,
    #[serde(rename = "mnt")]
    Maintenance,
    #[serde(rename = "dis")]
    Discontinued,
    #[serde(rename = "tst")]
    Test,
    #[serde(rename = "pmp")]
    Pump,
    #[serde(rename = "***")]
    Unavailable,
}

impl MaskCode {
    /// Every mask code, in vocabulary order.
    pub const ALL: [MaskCode; 14] = [
        MaskCode::Ice,
        MaskCode::Flood,
        MaskCode::Backwater,
        MaskCode::Zeroflow,
        MaskCode::Dry,
        MaskCode::Seasonal,
        MaskCode::PartialRecord,
        MaskCode::RatingDevelopment,
        MaskCode::EquipmentMalfunction,
        MaskCode::Maintenance,
        MaskCode::Discontinued,
        MaskCode::Test,
        MaskCode::Pump,
        MaskCode::Unavailable,
    ];

    /// Lower-case wire code, e.g. `"ice"`.
    pub fn code(self) -> &'static str {
        match self {
            MaskCode::Ice => "ice",
            MaskCode::Flood => "fld",
            MaskCode::Backwater => "bkw",
            MaskCode::Zeroflow => "zfl",
            MaskCode::Dry => "dry",
            MaskCode::Seasonal => "ssn",
            MaskCode::PartialRecord => "pr",
            MaskCode::RatingDevelopment => "rat",
            MaskCode::EquipmentMalfunction => "eqp",
            MaskCode::Maintenance => "mnt",
            MaskCode::Discontinued => "dis",
            MaskCode::Test => "tst",
            MaskCode::Pump => "pmp",
            MaskCode::Unavailable => "***",
        }
    }

    /// Human-readable description used for legends and tooltips.
    pub fn description(self) -> &'static str {
        match self {
            MaskCode::Ice => "Ice-Affected",
            MaskCode::Flood => "Flood-Affected",
            MaskCode::Backwater => "Backwater",
            MaskCode::Zeroflow => "Zeroflow",
            MaskCode::Dry => "Dry",
            MaskCode::Seasonal => "Seasonal",
            MaskCode::PartialRecord => "Partial Record",
            MaskCode::RatingDevelopment => "Rating Development",
            MaskCode::EquipmentMalfunction => "Equipment Malfunction",
            MaskCode::Maintenance => "Maintenance",
            MaskCode::Discontinued => "Discontinued",
            MaskCode::Test => "Test",
            MaskCode::Pump => "Pump",
            MaskCode::Unavailable => "Unavailable",
        }
    }

    /// Looks up a qualifier case-insensitively. Returns `None` for
    /// approval-family codes and anything outside the vocabulary.
    pub fn from_qualifier(qualifier: &str) -> Option<MaskCode> {
        let lowered = qualifier.to_lowercase();
        MaskCode::ALL.into_iter().find(|m| m.code() == lowered)
    }
}

impl std::fmt::Display for MaskCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Returns the masking codes present in `qualifiers`, in vocabulary order
/// and without duplicates.
pub fn mask_codes_in(qualifiers: &[String]) -> Vec<MaskCode> {
    let lowered: Vec<String> = qualifiers.iter().map(|q| q.to_lowercase()).collect();
    MaskCode::ALL
        .into_iter()
        .filter(|m| lowered.iter().any(|q| q == m.code()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn quals(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_no_duplicate_mask_codes() {
        let mut seen = std::collections::HashSet::new();
        for mask in MaskCode::ALL {
            assert!(seen.insert(mask.code()), "duplicate mask code '{}'", mask.code());
        }
    }

    #[test]
    fn test_mask_codes_are_lowercase() {
        for mask in MaskCode::ALL {
            assert_eq!(mask.code(), mask.code().to_lowercase());
        }
    }

    #[test]
    fn test_from_qualifier_is_case_insensitive() {
        assert_eq!(MaskCode::from_qualifier("ICE"), Some(MaskCode::Ice));
        assert_eq!(MaskCode::from_qualifier("Ice"), Some(MaskCode::Ice));
        assert_eq!(MaskCode::from_qualifier("Eqp"), Some(MaskCode::EquipmentMalfunction));
        assert_eq!(MaskCode::from_qualifier("***"), Some(MaskCode::Unavailable));
    }

    #[test]
    fn test_approval_codes_are_not_masks() {
        assert_eq!(MaskCode::from_qualifier(QUALIFIER_APPROVED), None);
        for code in QUALIFIER_ESTIMATED {
            assert_eq!(MaskCode::from_qualifier(code), None);
        }
        assert_eq!(MaskCode::from_qualifier("P"), None);
    }

    #[test]
    fn test_mask_codes_in_follows_vocabulary_order() {
        // Qualifier order is FLD then ICE, vocabulary order is ice then fld.
        let found = mask_codes_in(&quals(&["P", "FLD", "ICE"]));
        assert_eq!(found, vec![MaskCode::Ice, MaskCode::Flood]);
    }

    #[test]
    fn test_mask_codes_in_ignores_duplicates() {
        let found = mask_codes_in(&quals(&["Ice", "ICE", "ice"]));
        assert_eq!(found, vec![MaskCode::Ice]);
    }

    #[test]
    fn test_mask_code_serializes_as_wire_code() {
        assert_eq!(serde_json::to_string(&MaskCode::Flood).unwrap(), "\"fld\"");
        assert_eq!(serde_json::to_string(&MaskCode::Unavailable).unwrap(), "\"***\"");
        let parsed: MaskCode = serde_json::from_str("\"pmp\"").unwrap();
        assert_eq!(parsed, MaskCode::Pump);
    }
}
