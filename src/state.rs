use crate::color::ColorMap;
use crate::data::filter::{scatter_indices, PayloadRange, SiteSelection};
use crate::data::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Range-slider bounds, fixed regardless of the data.
pub const PAYLOAD_MIN_KG: f64 = 0.0;
pub const PAYLOAD_MAX_KG: f64 = 10_000.0;
pub const PAYLOAD_STEP_KG: f64 = 1_000.0;

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<LaunchDataset>,

    /// Dropdown state: "All Sites" or one launch site.
    pub site_selection: SiteSelection,

    /// Payload window selected by the sliders.
    pub payload_range: PayloadRange,

    /// Indices of records passing the current filters (cached) – the
    /// scatter chart's rows.
    pub scatter_rows: Vec<usize>,

    /// Colours for the "All Sites" pie slices (per launch site).
    pub site_colors: Option<ColorMap>,

    /// Colours for the scatter points (per booster version category).
    pub booster_colors: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            site_selection: SiteSelection::AllSites,
            payload_range: PayloadRange::new(PAYLOAD_MIN_KG, PAYLOAD_MAX_KG),
            scatter_rows: Vec::new(),
            site_colors: None,
            booster_colors: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: reset both controls to their defaults
    /// and rebuild the colour maps.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        self.site_selection = SiteSelection::AllSites;
        self.payload_range = default_range(&dataset);
        self.site_colors = Some(ColorMap::new(&dataset.sites));
        self.booster_colors = Some(ColorMap::new(&dataset.booster_categories));

        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `scatter_rows` after a control change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.scatter_rows = scatter_indices(ds, &self.site_selection, self.payload_range);
        }
    }

    /// Change the dropdown selection.  The payload range is untouched.
    pub fn set_site(&mut self, selection: SiteSelection) {
        self.site_selection = selection;
        self.refilter();
    }

    /// Restore the sliders to the dataset's observed payload min/max.  The
    /// site selection is untouched.
    pub fn reset_payload_range(&mut self) {
        if let Some(ds) = &self.dataset {
            self.payload_range = default_range(ds);
            self.refilter();
        }
    }
}

/// Slider default: the observed payload extent, falling back to the fixed
/// bounds for an empty dataset.
fn default_range(dataset: &LaunchDataset) -> PayloadRange {
    match dataset.payload_extent {
        Some((lo, hi)) => PayloadRange::new(lo, hi),
        None => PayloadRange::new(PAYLOAD_MIN_KG, PAYLOAD_MAX_KG),
    }
}
