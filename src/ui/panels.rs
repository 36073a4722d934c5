use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::SiteSelection;
use crate::data::model::SITE_CATALOG;
use crate::state::AppState;

/// Fixed slider domain in kilograms; the data-derived default value may lie
/// anywhere inside (or, for unusual datasets, outside) this display range.
pub const PAYLOAD_DOMAIN: std::ops::RangeInclusive<f64> = 0.0..=10000.0;
pub const PAYLOAD_STEP: f64 = 1000.0;
const PAYLOAD_TICKS: [f64; 5] = [0.0, 2500.0, 5000.0, 7500.0, 10000.0];

// ---------------------------------------------------------------------------
// Left side panel – selection controls
// ---------------------------------------------------------------------------

/// Render the control panel: site dropdown and payload range sliders.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Launch Records");
    ui.separator();

    // ---- Site dropdown ----
    ui.strong("Launch Site");
    let current = state.selection.site.clone();
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(current.label())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current == SiteSelection::All, "All Sites")
                .clicked()
            {
                state.set_site(SiteSelection::All);
            }
            for site in SITE_CATALOG {
                let selected = current == SiteSelection::Site(site.to_string());
                if ui.selectable_label(selected, site).clicked() {
                    state.set_site(SiteSelection::Site(site.to_string()));
                }
            }
        });

    ui.separator();

    // ---- Payload range sliders ----
    ui.strong("Payload range (kg)");
    let mut low = state.selection.payload.low;
    let mut high = state.selection.payload.high;

    let low_changed = ui
        .add(
            egui::Slider::new(&mut low, PAYLOAD_DOMAIN)
                .step_by(PAYLOAD_STEP)
                .text("Min"),
        )
        .changed();
    let high_changed = ui
        .add(
            egui::Slider::new(&mut high, PAYLOAD_DOMAIN)
                .step_by(PAYLOAD_STEP)
                .text("Max"),
        )
        .changed();

    // Keep low <= high: the handle being dragged pushes the other one along.
    if low_changed && low > high {
        high = low;
    }
    if high_changed && high < low {
        low = high;
    }
    if low_changed || high_changed {
        state.set_payload_range(low, high);
    }

    // Tick labels matching the fixed domain.
    ui.horizontal(|ui: &mut Ui| {
        for tick in PAYLOAD_TICKS {
            ui.weak(format!("{tick:.0}"));
        }
    });

    ui.separator();
    ui.label(format!(
        "{} of {} launches match",
        state.visible_indices.len(),
        state.table.len()
    ));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} — {} launches loaded",
            state.dataset_path.display(),
            state.table.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Let the user swap in a different launch dataset.  A failed load keeps the
/// current table and surfaces the error in the top bar.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} launches from {} (sites: {:?})",
                    table.len(),
                    path.display(),
                    SITE_CATALOG
                );
                state.replace_table(path, table);
            }
            Err(e) => {
                log::error!("Failed to load dataset: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
