use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::ReferenceTable;

const ROW_HEIGHT: f32 = 18.0;

/// Render a reference table.  `id` keeps the scroll state of several tables
/// apart.
pub fn reference_table(ui: &mut Ui, id: &str, table: &ReferenceTable, max_height: f32) {
    if table.is_empty() {
        ui.label("No functional groups.");
        return;
    }

    let unit = table.unit();
    let headers = [
        String::new(),
        "Group".to_string(),
        "Name".to_string(),
        format!("min {unit}"),
        format!("max {unit}"),
    ];
    let records = table.records();

    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(30.0))
            .column(Column::auto().at_least(60.0))
            .column(Column::auto().at_least(140.0))
            .columns(Column::auto().at_least(70.0), 2)
            .max_scroll_height(max_height)
            .header(20.0, |mut header| {
                for h in &headers {
                    header.col(|ui: &mut Ui| {
                        ui.strong(h);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, records.len(), |mut row| {
                    let r = &records[row.index()];
                    row.col(|ui: &mut Ui| {
                        ui.label(&r.key);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&r.group);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&r.name);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{}", r.min_bound));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{}", r.max_bound));
                    });
                });
            });
    });
}
