use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

/// Landing outcome of a launch, coerced from the dataset's integer `class`
/// column (1 = success, 0 = failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

/// Raised when the `class` column holds anything other than 0 or 1.
#[derive(Debug, Clone, Error)]
#[error("invalid outcome class {0}: expected 0 or 1")]
pub struct OutcomeError(pub i64);

impl Outcome {
    /// Coerce an integer class value. No missing or fractional values are
    /// tolerated upstream, so anything but 0/1 is an error.
    pub fn from_class(class: i64) -> Result<Self, OutcomeError> {
        match class {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(OutcomeError(other)),
        }
    }

    /// The integer class value, also the scatter plot's y coordinate.
    pub fn class(self) -> i64 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone)]
pub struct LaunchRecord {
    /// Launch site name, e.g. "KSC LC-39A".
    pub site: String,
    /// Payload mass in kilograms.
    pub payload_mass_kg: f64,
    /// Booster version category, e.g. "FT" – used for scatter colouring.
    pub booster_category: String,
    /// Landing outcome.
    pub outcome: Outcome,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed category indices. Immutable
/// after load; loading a new file replaces it wholesale.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launches (rows).
    pub records: Vec<LaunchRecord>,
    /// Sorted distinct launch sites.
    pub sites: BTreeSet<String>,
    /// Sorted distinct booster version categories.
    pub booster_categories: BTreeSet<String>,
    /// Observed payload mass (min, max); `None` for an empty dataset.
    pub payload_extent: Option<(f64, f64)>,
}

impl LaunchDataset {
    /// Build the category indices from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites = BTreeSet::new();
        let mut booster_categories = BTreeSet::new();
        let mut payload_extent: Option<(f64, f64)> = None;

        for rec in &records {
            sites.insert(rec.site.clone());
            booster_categories.insert(rec.booster_category.clone());
            payload_extent = Some(match payload_extent {
                None => (rec.payload_mass_kg, rec.payload_mass_kg),
                Some((lo, hi)) => (lo.min(rec.payload_mass_kg), hi.max(rec.payload_mass_kg)),
            });
        }

        LaunchDataset {
            records,
            sites,
            booster_categories,
            payload_extent,
        }
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, payload: f64, category: &str, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            booster_category: category.to_string(),
            outcome,
        }
    }

    #[test]
    fn coerces_class_to_outcome() {
        assert_eq!(Outcome::from_class(0).unwrap(), Outcome::Failure);
        assert_eq!(Outcome::from_class(1).unwrap(), Outcome::Success);
        assert!(Outcome::from_class(2).is_err());
        assert!(Outcome::from_class(-1).is_err());
    }

    #[test]
    fn outcome_round_trips_to_class() {
        assert_eq!(Outcome::Failure.class(), 0);
        assert_eq!(Outcome::Success.class(), 1);
    }

    #[test]
    fn builds_category_indices() {
        let ds = LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 500.0, "v1.0", Outcome::Failure),
            record("KSC LC-39A", 4990.0, "FT", Outcome::Success),
            record("CCAFS LC-40", 2500.0, "v1.1", Outcome::Success),
        ]);

        assert_eq!(ds.len(), 3);
        assert_eq!(
            ds.sites.iter().collect::<Vec<_>>(),
            ["CCAFS LC-40", "KSC LC-39A"]
        );
        assert_eq!(
            ds.booster_categories.iter().collect::<Vec<_>>(),
            ["FT", "v1.0", "v1.1"]
        );
        assert_eq!(ds.payload_extent, Some((500.0, 4990.0)));
    }

    #[test]
    fn empty_dataset_has_no_extent() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.payload_extent, None);
    }
}
