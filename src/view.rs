use crate::data::filter::{filter_by_window, SearchWindow};
use crate::data::model::{ReferenceTable, SpectralType, SpectrumSet};
use crate::data::overlay::{build_overlays, y_reference, OverlayKind, OverlayTrace};
use crate::data::spectrum::{collect_samples, Upload, UploadFailure};

// ---------------------------------------------------------------------------
// Render inputs – widget values captured once per interaction
// ---------------------------------------------------------------------------

/// Everything the widgets contribute to one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderInputs {
    pub spectral_type: SpectralType,
    /// Bond labels, in the order they were picked.
    pub selected_groups: Vec<String>,
    /// Descriptive labels, in the order they were picked.
    pub selected_names: Vec<String>,
    pub search_center: f64,
    pub search_half_width: f64,
    pub uploads: Vec<Upload>,
}

impl RenderInputs {
    pub fn new(spectral_type: SpectralType, search_center: f64, search_half_width: f64) -> Self {
        Self {
            spectral_type,
            selected_groups: Vec::new(),
            selected_names: Vec::new(),
            search_center,
            search_half_width,
            uploads: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// View – what the presenter shows
// ---------------------------------------------------------------------------

/// Spectra plus the overlay traces for both pickers.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub samples: SpectrumSet,
    pub group_traces: Vec<OverlayTrace>,
    pub name_traces: Vec<OverlayTrace>,
}

impl Chart {
    /// Group traces followed by name traces.
    pub fn traces(&self) -> impl Iterator<Item = &OverlayTrace> {
        self.group_traces.iter().chain(self.name_traces.iter())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub full_table: ReferenceTable,
    pub filtered_table: ReferenceTable,
    pub window: SearchWindow,
    pub chart: Chart,
    pub failures: Vec<UploadFailure>,
    /// True when no upload parsed and the flat placeholder is shown.
    pub used_default: bool,
}

/// Run the whole pipeline for one set of inputs.
pub fn render(inputs: &RenderInputs, table: &ReferenceTable) -> View {
    let window = SearchWindow::new(inputs.search_center, inputs.search_half_width);
    let filtered_table = filter_by_window(table, window.center, window.half_width);

    let (samples, failures) = collect_samples(inputs.spectral_type, &inputs.uploads);
    let used_default = failures.len() == inputs.uploads.len();

    let y_ref = y_reference(&samples);
    let group_traces = build_overlays(table, &inputs.selected_groups, OverlayKind::ByGroup, y_ref);
    let name_traces = build_overlays(table, &inputs.selected_names, OverlayKind::ByName, y_ref);

    log::debug!(
        "Rendered {}: {} of {} groups in window, {} spectra, {} overlays",
        inputs.spectral_type,
        filtered_table.len(),
        table.len(),
        samples.len(),
        group_traces.len() + name_traces.len()
    );

    View {
        full_table: table.clone(),
        filtered_table,
        window,
        chart: Chart {
            samples,
            group_traces,
            name_traces,
        },
        failures,
        used_default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::OVERLAY_PALETTE;
    use crate::data::model::FunctionalGroupRecord;
    use crate::data::spectrum::DEFAULT_LABEL;

    fn ir_table() -> ReferenceTable {
        let record = |group: &str, name: &str, min: f64, max: f64| FunctionalGroupRecord {
            key: group.to_string(),
            group: group.to_string(),
            name: name.to_string(),
            min_bound: min,
            max_bound: max,
        };
        ReferenceTable::new(
            SpectralType::Ir,
            vec![
                record("C=O", "Ketone", 1650.0, 1750.0),
                record("O-H", "Alcohol", 3200.0, 3550.0),
            ],
        )
    }

    fn upload(name: &str, contents: &str) -> Upload {
        Upload {
            name: name.to_string(),
            contents: contents.to_string(),
        }
    }

    #[test]
    fn default_render_shows_placeholder() {
        let inputs = RenderInputs::new(SpectralType::Ir, 10.0, 10.0);
        let view = render(&inputs, &ir_table());
        assert!(view.used_default);
        assert_eq!(view.chart.samples.len(), 1);
        assert!(view.chart.samples.get(DEFAULT_LABEL).is_some());
        assert_eq!(view.full_table.len(), 2);
        assert!(view.filtered_table.is_empty());
        assert_eq!(view.chart.traces().count(), 0);
    }

    #[test]
    fn carbonyl_scenario() {
        let mut inputs = RenderInputs::new(SpectralType::Ir, 1700.0, 60.0);
        inputs.selected_groups = vec!["C=O".to_string()];
        inputs.uploads = vec![upload("film.txt", "cm-1 I\n1600 0.3\n1700 1.0\n1800 0.2\n")];
        let view = render(&inputs, &ir_table());

        assert!(!view.used_default);
        assert_eq!(view.filtered_table.len(), 1);
        assert_eq!(view.filtered_table.records()[0].group, "C=O");
        assert_eq!((view.window.lower(), view.window.upper()), (1640.0, 1760.0));

        let seg = &view.chart.group_traces[0].segments[0];
        assert_eq!((seg.x_start, seg.x_end, seg.y_level), (1650.0, 1750.0, 0.0));
        assert_eq!(seg.color, OVERLAY_PALETTE[0]);
    }

    #[test]
    fn comma_upload_fails_alone() {
        let mut inputs = RenderInputs::new(SpectralType::Ir, 10.0, 10.0);
        inputs.uploads = vec![
            upload("comma.csv", "cm-1,I\n1000,0.5\n"),
            upload("ok.txt", "cm-1 I\n1000 0.5\n"),
        ];
        let view = render(&inputs, &ir_table());
        assert!(!view.used_default);
        assert_eq!(view.failures.len(), 1);
        assert_eq!(view.failures[0].name, "comma.csv");
        let labels: Vec<&str> = view.chart.samples.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["ok.txt"]);
    }

    #[test]
    fn overlay_height_follows_tallest_spectrum() {
        let mut inputs = RenderInputs::new(SpectralType::Ir, 10.0, 10.0);
        inputs.selected_groups = vec!["C=O".to_string()];
        inputs.uploads = vec![
            upload("tall.txt", "cm-1 I\n1600 0.2\n1700 3.0\n"),
            upload("short.txt", "cm-1 I\n1600 0.1\n1700 0.5\n"),
        ];
        let view = render(&inputs, &ir_table());
        assert_eq!(view.chart.samples.len(), 2);
        // the last plotted spectrum peaks at 0.5; the tallest one wins
        assert_eq!(view.chart.group_traces[0].segments[0].y_level, 2.0);

        inputs.uploads.reverse();
        let reversed = render(&inputs, &ir_table());
        assert_eq!(reversed.chart.group_traces[0].segments[0].y_level, 2.0);
    }

    #[test]
    fn group_and_name_selections_stack_independently() {
        let mut inputs = RenderInputs::new(SpectralType::Ir, 10.0, 10.0);
        inputs.selected_groups = vec!["O-H".to_string()];
        inputs.selected_names = vec!["Ketone".to_string()];
        let view = render(&inputs, &ir_table());
        // flat default spectrum: max intensity 0, both at index 0
        assert_eq!(view.chart.group_traces[0].segments[0].y_level, -1.0);
        assert_eq!(view.chart.name_traces[0].segments[0].y_level, -1.0);
        assert_eq!(view.chart.traces().count(), 2);
    }
}
