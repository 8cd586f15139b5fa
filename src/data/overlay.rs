use palette::Srgb;

use super::model::{FunctionalGroupRecord, ReferenceTable, SpectrumSet};
use crate::color::overlay_color;

/// Half-width given to point features selected by description.  Bond
/// selections use [`SpectralType::minimum_feature_width`] instead.
///
/// [`SpectralType::minimum_feature_width`]: super::model::SpectralType::minimum_feature_width
pub const NAME_POINT_HALF_WIDTH: f64 = 10.0;

/// Successive selections are lowered by `1 / STACK_DIVISOR` each.
const STACK_DIVISOR: f64 = 10.0;

// ---------------------------------------------------------------------------
// Overlay types
// ---------------------------------------------------------------------------

/// Which record attribute a selection is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    ByGroup,
    ByName,
}

impl OverlayKind {
    fn label_of(self, record: &FunctionalGroupRecord) -> &str {
        match self {
            OverlayKind::ByGroup => &record.group,
            OverlayKind::ByName => &record.name,
        }
    }

    fn point_half_width(self, table: &ReferenceTable) -> f64 {
        match self {
            OverlayKind::ByGroup => table.spectral_type.minimum_feature_width(),
            OverlayKind::ByName => NAME_POINT_HALF_WIDTH,
        }
    }
}

/// One horizontal marker bar.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySegment {
    pub x_start: f64,
    pub x_end: f64,
    pub y_level: f64,
    pub color: Srgb<u8>,
    pub label: String,
}

/// All bars for one selected label, drawn as a single styled trace.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayTrace {
    pub label: String,
    pub kind: OverlayKind,
    pub color: Srgb<u8>,
    pub segments: Vec<OverlaySegment>,
}

// ---------------------------------------------------------------------------
// Overlay builder
// ---------------------------------------------------------------------------

/// Height the overlay stack is measured from: the largest finite intensity
/// over all plotted samples, or `0.0` when there is none.
pub fn y_reference(samples: &SpectrumSet) -> f64 {
    samples
        .iter()
        .filter_map(|s| s.max_intensity())
        .reduce(f64::max)
        .unwrap_or(0.0)
}

/// Build one trace per selected label, in selection order.
///
/// The label at index `i` sits at `y_reference - 1 - i/10` and takes the
/// `i mod 5`-th palette colour.  A label without matching records yields a
/// trace with no segments.
pub fn build_overlays(
    table: &ReferenceTable,
    selected: &[String],
    kind: OverlayKind,
    y_reference: f64,
) -> Vec<OverlayTrace> {
    let half_width = kind.point_half_width(table);

    selected
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let color = overlay_color(i);
            let y_level = y_reference - 1.0 - i as f64 / STACK_DIVISOR;
            let segments = table
                .records()
                .iter()
                .filter(|r| kind.label_of(r) == label.as_str())
                .map(|r| {
                    let (x_start, x_end) = if r.is_point_feature() {
                        (r.min_bound - half_width, r.min_bound + half_width)
                    } else {
                        (r.min_bound, r.max_bound)
                    };
                    OverlaySegment {
                        x_start,
                        x_end,
                        y_level,
                        color,
                        label: label.clone(),
                    }
                })
                .collect();
            OverlayTrace {
                label: label.clone(),
                kind,
                color,
                segments,
            }
        })
        .collect()
}
