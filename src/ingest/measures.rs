use std::sync::LazyLock;

use regex::Regex;

use super::sheet::Sheet;
use crate::{error::IngestError, models::Measure};

pub(crate) static RE_PARENTHESIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*?)\)").expect("Invalid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Gram,
    Milligram,
    Kilojoule,
    Microgram,
    Kilocalorie,
}

impl Unit {
    /// Parses a unit as it appears in a normalized header.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "g" => Some(Unit::Gram),
            "mg" => Some(Unit::Milligram),
            "kj" => Some(Unit::Kilojoule),
            "ug" | "µg" => Some(Unit::Microgram),
            "kcal" => Some(Unit::Kilocalorie),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Milligram => "mg",
            Unit::Kilojoule => "kj",
            Unit::Microgram => "µg",
            Unit::Kilocalorie => "kcal",
        }
    }

    pub fn conversion(self) -> f64 {
        match self {
            Unit::Gram => 1.0,
            Unit::Milligram => 0.001,
            Unit::Kilojoule => 1000.0,
            Unit::Microgram => 0.000001,
            Unit::Kilocalorie => 1000.0,
        }
    }
}

/// Column name without its parenthetical groups, e.g. `proteines_(g)` → `proteines`.
pub fn base_name(header: &str) -> String {
    RE_PARENTHESIS
        .replace_all(header, "")
        .trim_matches('_')
        .to_string()
}

/// One measure per column whose normalized header still carries a unit.
pub fn derive_measures(sheet: &Sheet) -> Result<Vec<Measure>, IngestError> {
    sheet
        .headers
        .iter()
        .filter_map(|header| {
            RE_PARENTHESIS
                .captures(header)
                .map(|captures| (header, captures[1].to_string()))
        })
        .map(|(header, label)| -> Result<Measure, IngestError> {
            let unit = Unit::from_label(&label).ok_or_else(|| IngestError::UnknownUnit {
                column: header.clone(),
                unit: label.clone(),
            })?;

            Ok(Measure {
                name: base_name(header),
                unit: unit.label().to_string(),
                conversion: unit.conversion(),
            })
        })
        .collect()
}
