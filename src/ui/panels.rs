use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::{overlay_color, to_color32};
use crate::data::model::SpectralType;
use crate::state::{AppState, Picker};

// ---------------------------------------------------------------------------
// Left side panel – type, pickers and search window
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Spectral type");
    let mut spectral_type = state.inputs.spectral_type;
    ui.horizontal(|ui: &mut Ui| {
        for t in SpectralType::ALL {
            ui.radio_value(&mut spectral_type, t, t.to_string());
        }
    });
    state.set_spectral_type(spectral_type);
    ui.separator();

    let unit = spectral_type.unit();
    let (max_half_width, speed) = state.half_width_limits();
    ui.label(format!("Search around {unit}:"));
    ui.add(egui::DragValue::new(&mut state.inputs.search_center).speed(speed));
    ui.label(format!("Search plus minus {unit}:"));
    ui.add(
        egui::DragValue::new(&mut state.inputs.search_half_width)
            .range(0.0..=max_half_width)
            .speed(speed),
    );
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            picker(
                ui,
                state,
                Picker::Groups,
                "Select Functional Groups by bond (up to 5)",
            );
            picker(
                ui,
                state,
                Picker::Names,
                "Select Functional Groups by description (up to 5)",
            );
        });
}

/// A collapsible checkbox list.  Selected labels are tinted with the colour
/// their overlay will be drawn in.
fn picker(ui: &mut Ui, state: &mut AppState, which: Picker, title: &str) {
    let labels = match which {
        Picker::Groups => state.group_labels.clone(),
        Picker::Names => state.name_labels.clone(),
    };
    let n_selected = match which {
        Picker::Groups => state.inputs.selected_groups.len(),
        Picker::Names => state.inputs.selected_names.len(),
    };
    let header_text = format!("{title}  ({n_selected}/{})", labels.len());

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(title)
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all(which);
                }
                if ui.small_button("None").clicked() {
                    state.select_none(which);
                }
            });

            for label in &labels {
                let index = state.selection_index(which, label);
                let mut checked = index.is_some();
                let mut text = RichText::new(label);
                if let Some(i) = index {
                    text = text.color(to_color32(overlay_color(i)));
                }
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_label(which, label);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Add spectrum files…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Clear spectra").clicked() {
                state.clear_uploads();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} spectrum file(s) added",
            state.inputs.uploads.len()
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

pub fn open_file_dialog(state: &mut AppState) {
    let unit = state.inputs.spectral_type.unit();
    let files = rfd::FileDialog::new()
        .set_title(format!(
            "Choose spectrum file(s) in two-column format ({unit}, intensity between 0 and 1)"
        ))
        .add_filter("Spectrum files", &["txt", "dat", "xy", "prn", "csv"])
        .pick_files();

    if let Some(paths) = files {
        state.add_uploads(paths);
    }
}
