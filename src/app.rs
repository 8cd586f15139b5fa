use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::config::ViewerConfig;
use crate::state::AppState;
use crate::ui::{panels, plot, tables};

/// Height of each reference table before it scrolls.
const TABLE_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FunctionalGroupFinderApp {
    pub state: AppState,
}

impl FunctionalGroupFinderApp {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for FunctionalGroupFinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: type, pickers, search ----
        egui::SidePanel::left("control_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // Widgets above may have changed the inputs.
        self.state.refresh();

        // ---- Right side panel: reference tables ----
        egui::SidePanel::right("table_panel")
            .default_width(460.0)
            .resizable(true)
            .show(ctx, |ui| {
                table_panel(ui, &self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Functional group finder");
            let Some(view) = &self.state.view else {
                ui.centered_and_justified(|ui: &mut Ui| {
                    ui.heading("No reference table loaded for this spectral type.");
                });
                return;
            };

            if view.used_default {
                ui.label("Loading default spectrum.");
            }
            for failure in &view.failures {
                ui.label(
                    RichText::new(format!("{}: not parseable ({})", failure.name, failure.message))
                        .color(Color32::RED),
                );
            }

            ui.strong("Experimental Spectrum");
            plot::spectral_plot(ui, view);
        });
    }
}

fn table_panel(ui: &mut Ui, state: &AppState) {
    let view = match (&state.view, &state.reference) {
        (Some(view), _) => view,
        (None, Err(e)) => {
            ui.label(RichText::new(format!("Error: {e}")).color(Color32::RED));
            return;
        }
        (None, Ok(_)) => return,
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("List of all functional groups.");
            tables::reference_table(ui, "full_table", &view.full_table, TABLE_HEIGHT);
            ui.separator();

            ui.heading(format!(
                "Functional groups between {} and {} {}",
                view.window.lower(),
                view.window.upper(),
                view.full_table.unit()
            ));
            tables::reference_table(ui, "filtered_table", &view.filtered_table, TABLE_HEIGHT);
        });
}
