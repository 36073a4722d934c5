use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Site catalog
// ---------------------------------------------------------------------------

/// The fixed set of launch-site identifiers appearing in the dataset.
/// Filtering matches these exactly (case-sensitive, no normalization).
pub const SITE_CATALOG: [&str; 4] = [
    "CCAFS LC-40",
    "VAFB SLC-4E",
    "KSC LC-39A",
    "CCAFS SLC-40",
];

// ---------------------------------------------------------------------------
// Outcome – binary launch outcome class
// ---------------------------------------------------------------------------

/// Launch outcome: the dataset encodes this as a 0/1 `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub enum Outcome {
    Failure,
    Success,
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(format!("outcome class must be 0 or 1, got {other}")),
        }
    }
}

impl Outcome {
    /// The 0/1 encoding used by the dataset and the scatter y-axis.
    pub fn class_value(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "Failure"),
            Outcome::Success => write!(f, "Success"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single historical launch (one row of the source table).
/// Field renames match the source CSV headers; extra columns are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Launch Site")]
    pub site: String,

    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,

    #[serde(rename = "class")]
    pub outcome: Outcome,

    /// Categorical label used only for scatter colouring, never filtering.
    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
}

// ---------------------------------------------------------------------------
// PayloadBounds – data-derived (min, max) payload mass
// ---------------------------------------------------------------------------

/// Minimum and maximum payload mass over the loaded table.  Computed once at
/// load time; used only to seed the initial range-control value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

// ---------------------------------------------------------------------------
// LaunchTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset.  Loaded once, read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    /// All launches (rows), in file order.
    pub records: Vec<LaunchRecord>,
    /// Sorted set of unique booster version categories, for colour mapping.
    pub booster_categories: BTreeSet<String>,
}

impl LaunchTable {
    /// Build the booster-category index from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let booster_categories = records
            .iter()
            .map(|r| r.booster_category.clone())
            .collect();
        LaunchTable {
            records,
            booster_categories,
        }
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Min/max payload mass over the table.  (0, 0) for an empty table.
    pub fn payload_bounds(&self) -> PayloadBounds {
        if self.records.is_empty() {
            return PayloadBounds { min: 0.0, max: 0.0 };
        }
        let mut bounds = PayloadBounds {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        };
        for rec in &self.records {
            bounds.min = bounds.min.min(rec.payload_mass_kg);
            bounds.max = bounds.max.max(rec.payload_mass_kg);
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(site: &str, payload: f64, outcome: Outcome, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            outcome,
            booster_category: booster.to_string(),
        }
    }

    #[test]
    fn outcome_rejects_values_other_than_zero_and_one() {
        assert_eq!(Outcome::try_from(0), Ok(Outcome::Failure));
        assert_eq!(Outcome::try_from(1), Ok(Outcome::Success));
        assert!(Outcome::try_from(2).is_err());
    }

    #[test]
    fn payload_bounds_span_the_table() {
        let table = LaunchTable::from_records(vec![
            rec("KSC LC-39A", 500.0, Outcome::Success, "v1.0"),
            rec("CCAFS LC-40", 9600.0, Outcome::Failure, "FT"),
            rec("VAFB SLC-4E", 2200.0, Outcome::Success, "v1.1"),
        ]);
        let bounds = table.payload_bounds();
        assert_eq!(bounds.min, 500.0);
        assert_eq!(bounds.max, 9600.0);
    }

    #[test]
    fn empty_table_has_zero_bounds() {
        let table = LaunchTable::from_records(Vec::new());
        assert_eq!(table.payload_bounds(), PayloadBounds { min: 0.0, max: 0.0 });
    }

    #[test]
    fn booster_categories_are_unique_and_sorted() {
        let table = LaunchTable::from_records(vec![
            rec("KSC LC-39A", 500.0, Outcome::Success, "v1.1"),
            rec("KSC LC-39A", 600.0, Outcome::Failure, "FT"),
            rec("CCAFS LC-40", 700.0, Outcome::Success, "v1.1"),
        ]);
        let cats: Vec<&str> = table.booster_categories.iter().map(String::as_str).collect();
        assert_eq!(cats, vec!["FT", "v1.1"]);
    }
}
