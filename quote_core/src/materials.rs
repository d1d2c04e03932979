//! # Filament Materials
//!
//! Catalog of the filament labels offered when describing a job. The label
//! is display-only: every material is priced from the same spool economics
//! in [`GlobalConfig`](crate::config::GlobalConfig), so choosing "Nylon"
//! over "PLA" does not change the quote.

use serde::{Deserialize, Serialize};

/// Filament families offered in the job form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilamentMaterial {
    #[serde(rename = "PLA")]
    Pla,
    #[serde(rename = "PETG")]
    Petg,
    #[serde(rename = "ABS")]
    Abs,
    #[serde(rename = "TPU")]
    Tpu,
    #[serde(rename = "ASA")]
    Asa,
    /// Photopolymer resin
    Resina,
    Nylon,
    /// Polycarbonate
    #[serde(rename = "PC")]
    Pc,
    #[serde(rename = "HIPS")]
    Hips,
    /// Anything else
    Otro,
}

impl FilamentMaterial {
    /// All catalog entries, in menu order
    pub const ALL: [FilamentMaterial; 10] = [
        FilamentMaterial::Pla,
        FilamentMaterial::Petg,
        FilamentMaterial::Abs,
        FilamentMaterial::Tpu,
        FilamentMaterial::Asa,
        FilamentMaterial::Resina,
        FilamentMaterial::Nylon,
        FilamentMaterial::Pc,
        FilamentMaterial::Hips,
        FilamentMaterial::Otro,
    ];

    /// Label stored in `JobDetails::material`
    pub fn label(&self) -> &'static str {
        match self {
            FilamentMaterial::Pla => "PLA",
            FilamentMaterial::Petg => "PETG",
            FilamentMaterial::Abs => "ABS",
            FilamentMaterial::Tpu => "TPU",
            FilamentMaterial::Asa => "ASA",
            FilamentMaterial::Resina => "Resina",
            FilamentMaterial::Nylon => "Nylon",
            FilamentMaterial::Pc => "PC",
            FilamentMaterial::Hips => "HIPS",
            FilamentMaterial::Otro => "Otro",
        }
    }

    /// Match a free-text label against the catalog (case-insensitive)
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        FilamentMaterial::ALL
            .iter()
            .copied()
            .find(|m| m.label().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for FilamentMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label() {
        assert_eq!(FilamentMaterial::from_label("petg"), Some(FilamentMaterial::Petg));
        assert_eq!(FilamentMaterial::from_label(" Resina "), Some(FilamentMaterial::Resina));
        assert_eq!(FilamentMaterial::from_label("PEEK"), None);
    }

    #[test]
    fn test_labels_round_trip() {
        for material in FilamentMaterial::ALL {
            assert_eq!(FilamentMaterial::from_label(material.label()), Some(material));
        }
    }

    #[test]
    fn test_serialization_uses_label() {
        let json = serde_json::to_string(&FilamentMaterial::Pla).unwrap();
        assert_eq!(json, "\"PLA\"");
        let nylon: FilamentMaterial = serde_json::from_str("\"Nylon\"").unwrap();
        assert_eq!(nylon, FilamentMaterial::Nylon);
    }
}
