use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::color::{spectrum_color, to_color32};
use crate::view::View;

/// Line width of the overlay bars.
const OVERLAY_WIDTH: f32 = 5.0;

/// A single overlay bar as handed to the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLine<'a> {
    pub name: &'a str,
    pub color: Color32,
    pub points: [[f64; 2]; 2],
}

/// One two-point line per overlay segment, group traces first.  Separate
/// bands of a label are never joined; the shared name folds them into a
/// single legend entry.
pub fn overlay_lines(view: &View) -> Vec<OverlayLine<'_>> {
    view.chart
        .traces()
        .flat_map(|trace| {
            let color = to_color32(trace.color);
            trace.segments.iter().map(move |seg| OverlayLine {
                name: &seg.label,
                color,
                points: [[seg.x_start, seg.y_level], [seg.x_end, seg.y_level]],
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Spectrum plot with functional group overlays
// ---------------------------------------------------------------------------

/// Render the spectra and overlay bars.
pub fn spectral_plot(ui: &mut Ui, view: &View) {
    let unit = view.full_table.unit();
    let samples = &view.chart.samples;

    Plot::new("spectral_plot")
        .legend(Legend::default())
        .x_axis_label(unit)
        .y_axis_label("Intensity")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (i, sample) in samples.iter().enumerate() {
                let points: PlotPoints = sample
                    .x
                    .iter()
                    .zip(sample.y.iter())
                    .map(|(&xi, &yi)| [xi, yi])
                    .collect();

                let line = Line::new(points)
                    .name(&sample.label)
                    .color(spectrum_color(i, samples.len()))
                    .width(1.5);

                plot_ui.line(line);
            }

            for bar in overlay_lines(view) {
                plot_ui.line(
                    Line::new(PlotPoints::new(bar.points.to_vec()))
                        .name(bar.name)
                        .color(bar.color)
                        .width(OVERLAY_WIDTH),
                );
            }
        });
}
