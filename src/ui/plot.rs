use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points, Polygon};

use crate::data::filter::{outcome_counts, site_counts, SiteSelection};
use crate::state::AppState;

const SUCCESS_COLOR: Color32 = Color32::from_rgb(46, 160, 67);
const FAILURE_COLOR: Color32 = Color32::from_rgb(218, 54, 51);

// ---------------------------------------------------------------------------
// Site/outcome pie (upper half of the central panel)
// ---------------------------------------------------------------------------

/// Render the pie chart.  Depends on the dropdown only, never on the
/// payload range:
/// * All Sites – one slice per site, value = record count
/// * one site  – Success/Failure slices, zero-count slices omitted
pub fn success_pie(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    let (title, slices): (String, Vec<(String, usize, Color32)>) = match &state.site_selection {
        SiteSelection::AllSites => (
            "Launches by site".to_string(),
            site_counts(dataset)
                .into_iter()
                .map(|(site, n)| {
                    let color = state
                        .site_colors
                        .as_ref()
                        .map(|cm| cm.color_for(&site))
                        .unwrap_or(Color32::GRAY);
                    (site, n, color)
                })
                .collect(),
        ),
        SiteSelection::Site(site) => {
            let counts = outcome_counts(dataset, site);
            let slices = [
                ("Success".to_string(), counts.success, SUCCESS_COLOR),
                ("Failure".to_string(), counts.failure, FAILURE_COLOR),
            ]
            .into_iter()
            .filter(|(_, n, _)| *n > 0)
            .collect();
            (format!("Outcomes at {site}"), slices)
        }
    };

    let total: usize = slices.iter().map(|(_, n, _)| *n).sum();

    ui.strong(title);
    Plot::new("success_pie")
        .legend(Legend::default())
        .height(ui.available_height() * 0.5)
        .data_aspect(1.0)
        .show_axes([false, false])
        .show_grid([false, false])
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            // An empty selection draws an empty chart.
            if total == 0 {
                return;
            }
            let mut start = 0.0;
            for (label, count, color) in &slices {
                let frac = *count as f64 / total as f64;
                let sector: PlotPoints = sector_points(start, frac).into();
                plot_ui.polygon(
                    Polygon::new(sector)
                        .name(format!("{label} ({count})"))
                        .fill_color(*color)
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );
                start += frac;
            }
        });
}

/// Unit-circle sector spanning `frac` of the turn, starting at `start`
/// (both fractions of a full revolution, clockwise from 12 o'clock).  The
/// centre point comes first; the polygon closes back to it.
fn sector_points(start: f64, frac: f64) -> Vec<[f64; 2]> {
    // Enough arc segments to keep small slices smooth.
    let steps = ((frac * 64.0).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let t = start + frac * i as f64 / steps as f64;
        let angle = FRAC_PI_2 - t * TAU;
        points.push([angle.cos(), angle.sin()]);
    }
    points
}

// ---------------------------------------------------------------------------
// Payload/outcome scatter (lower half of the central panel)
// ---------------------------------------------------------------------------

/// Render the scatter chart: payload mass on x, binary outcome on y,
/// coloured by booster version category.  Rows come from the cached
/// filter result in `state.scatter_rows`.
pub fn payload_scatter(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    // One series per booster category so the legend groups by colour.
    let mut by_category: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for &idx in &state.scatter_rows {
        let rec = &dataset.records[idx];
        by_category
            .entry(rec.booster_category.as_str())
            .or_default()
            .push([rec.payload_mass_kg, rec.outcome.class() as f64]);
    }

    ui.strong("Payload vs. outcome");
    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Landing outcome")
        .include_y(-0.2)
        .include_y(1.2)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (category, pts) in by_category {
                let color = state
                    .booster_colors
                    .as_ref()
                    .map(|cm| cm.color_for(category))
                    .unwrap_or(Color32::LIGHT_BLUE);

                plot_ui.points(
                    Points::new(PlotPoints::from(pts))
                        .name(category)
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(4.0),
                );
            }
        });
}
