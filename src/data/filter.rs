use std::collections::BTreeMap;

use super::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Control state: site selection and payload range
// ---------------------------------------------------------------------------

/// Dropdown state: the "All Sites" sentinel or one literal site name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    AllSites,
    Site(String),
}

impl SiteSelection {
    /// Text shown in the dropdown for the current selection.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::AllSites => "All Sites",
            SiteSelection::Site(name) => name,
        }
    }

    /// Whether a record at `site` passes the current selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::AllSites => true,
            SiteSelection::Site(name) => name == site,
        }
    }
}

/// Payload-mass window selected by the range sliders.
///
/// Filtering is exclusive on both ends: a record whose payload mass equals
/// `low` or `high` exactly is left out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    /// Open-interval membership test.
    pub fn contains(&self, mass_kg: f64) -> bool {
        mass_kg > self.low && mass_kg < self.high
    }
}

// ---------------------------------------------------------------------------
// Chart queries – pure functions over the immutable dataset
// ---------------------------------------------------------------------------

/// Indices of records inside the payload window that match the site
/// selection – the scatter chart's rows.
pub fn scatter_indices(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selection.matches(&rec.site) && range.contains(rec.payload_mass_kg))
        .map(|(i, _)| i)
        .collect()
}

/// Per-site record counts in site order – the "All Sites" pie. The counts
/// sum to the dataset's row count.
pub fn site_counts(dataset: &LaunchDataset) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for rec in &dataset.records {
        *counts.entry(rec.site.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(site, n)| (site.to_string(), n))
        .collect()
}

/// Success/failure totals for one site – the single-site pie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutcomeCounts {
    pub success: usize,
    pub failure: usize,
}

impl OutcomeCounts {
    pub fn total(&self) -> usize {
        self.success + self.failure
    }
}

/// Count outcomes among the records of `site`.
pub fn outcome_counts(dataset: &LaunchDataset, site: &str) -> OutcomeCounts {
    let mut counts = OutcomeCounts::default();
    for rec in dataset.records.iter().filter(|r| r.site == site) {
        match rec.outcome {
            Outcome::Success => counts.success += 1,
            Outcome::Failure => counts.failure += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    /// Helper: a small dataset over two sites.
    fn sample_dataset() -> LaunchDataset {
        let rows = [
            ("CCAFS LC-40", 500.0, "v1.0", 0),
            ("CCAFS LC-40", 2000.0, "v1.1", 1),
            ("CCAFS LC-40", 4000.0, "FT", 1),
            ("KSC LC-39A", 2000.0, "FT", 1),
            ("KSC LC-39A", 9600.0, "B5", 0),
        ];
        LaunchDataset::from_records(
            rows.iter()
                .map(|&(site, payload, category, class)| LaunchRecord {
                    site: site.to_string(),
                    payload_mass_kg: payload,
                    booster_category: category.to_string(),
                    outcome: Outcome::from_class(class).unwrap(),
                })
                .collect(),
        )
    }

    #[test]
    fn all_sites_counts_sum_to_row_count() {
        let ds = sample_dataset();
        let counts = site_counts(&ds);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), ds.len());
        assert_eq!(counts[0], ("CCAFS LC-40".to_string(), 3));
        assert_eq!(counts[1], ("KSC LC-39A".to_string(), 2));
    }

    #[test]
    fn outcome_counts_cover_one_site_only() {
        let ds = sample_dataset();
        let counts = outcome_counts(&ds, "CCAFS LC-40");
        assert_eq!(counts.success, 2);
        assert_eq!(counts.failure, 1);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn outcome_counts_for_unknown_site_are_zero() {
        let ds = sample_dataset();
        assert_eq!(outcome_counts(&ds, "VAFB SLC-4E").total(), 0);
    }

    #[test]
    fn payload_bounds_are_exclusive() {
        let ds = sample_dataset();
        // Records at exactly 2000 kg sit on the boundary and must be excluded.
        let rows = scatter_indices(&ds, &SiteSelection::AllSites, PayloadRange::new(2000.0, 9600.0));
        assert_eq!(rows, [2]); // only the 4000 kg launch
        for &i in &rows {
            let mass = ds.records[i].payload_mass_kg;
            assert!(mass > 2000.0 && mass < 9600.0);
        }
    }

    #[test]
    fn site_selection_restricts_scatter_rows() {
        let ds = sample_dataset();
        let range = PayloadRange::new(0.0, 10_000.0);
        let all = scatter_indices(&ds, &SiteSelection::AllSites, range);
        assert_eq!(all.len(), 5);

        let ksc = scatter_indices(&ds, &SiteSelection::Site("KSC LC-39A".into()), range);
        assert_eq!(ksc, [3, 4]);
    }

    #[test]
    fn empty_window_yields_no_rows() {
        let ds = sample_dataset();
        let rows = scatter_indices(
            &ds,
            &SiteSelection::Site("KSC LC-39A".into()),
            PayloadRange::new(3000.0, 4000.0),
        );
        assert!(rows.is_empty());
    }
}
