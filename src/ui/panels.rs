use std::path::Path;

use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::data::filter::SiteSelection;
use crate::state::{AppState, PAYLOAD_MAX_KG, PAYLOAD_MIN_KG, PAYLOAD_STEP_KG};

// ---------------------------------------------------------------------------
// Left side panel – dashboard controls
// ---------------------------------------------------------------------------

/// Render the left control panel: site dropdown and payload range sliders.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    let sites: Vec<String> = dataset.sites.iter().cloned().collect();
    let total = dataset.len();

    // ---- Launch-site dropdown ----
    ui.strong("Launch site");
    let mut new_selection: Option<SiteSelection> = None;
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(state.site_selection.label().to_string())
        .show_ui(ui, |ui: &mut Ui| {
            let all_selected = state.site_selection == SiteSelection::AllSites;
            if ui.selectable_label(all_selected, "All Sites").clicked() {
                new_selection = Some(SiteSelection::AllSites);
            }
            for site in &sites {
                let selected =
                    matches!(&state.site_selection, SiteSelection::Site(s) if s == site);
                if ui.selectable_label(selected, site).clicked() {
                    new_selection = Some(SiteSelection::Site(site.clone()));
                }
            }
        });
    if let Some(selection) = new_selection {
        state.set_site(selection);
    }

    ui.separator();

    // ---- Payload range sliders ----
    ui.strong("Payload range (kg)");
    let mut range = state.payload_range;
    let low_changed = ui
        .add(
            Slider::new(&mut range.low, PAYLOAD_MIN_KG..=PAYLOAD_MAX_KG)
                .step_by(PAYLOAD_STEP_KG)
                .text("min"),
        )
        .changed();
    let high_changed = ui
        .add(
            Slider::new(&mut range.high, PAYLOAD_MIN_KG..=PAYLOAD_MAX_KG)
                .step_by(PAYLOAD_STEP_KG)
                .text("max"),
        )
        .changed();

    // Dragging one bound past the other pushes the other along.
    if low_changed && range.low > range.high {
        range.high = range.low;
    }
    if high_changed && range.high < range.low {
        range.low = range.high;
    }
    if range != state.payload_range {
        state.payload_range = range;
        state.refilter();
    }

    if ui.small_button("Reset").clicked() {
        state.reset_payload_range();
    }

    ui.separator();
    ui.label(format!(
        "{} of {total} launches in view",
        state.scatter_rows.len()
    ));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} launches loaded, {} in view",
                ds.len(),
                state.scatter_rows.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        load_into_state(state, &path);
    }
}

/// Load a dataset file into the app state.  Shared by the startup path and
/// the File → Open dialog.  A failed load keeps the previous dataset and
/// surfaces the error in the status line.
pub fn load_into_state(state: &mut AppState, path: &Path) {
    match crate::data::loader::load_file(path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} launch records from {} ({} sites)",
                dataset.len(),
                path.display(),
                dataset.sites.len()
            );
            state.set_dataset(dataset);
        }
        Err(e) => {
            log::error!("Failed to load {}: {e:#}", path.display());
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
