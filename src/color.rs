use eframe::egui::Color32;
use palette::{named, Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Overlay palette
// ---------------------------------------------------------------------------

/// Colours cycled through by successive selections.
pub const OVERLAY_PALETTE: [Srgb<u8>; 5] = [
    named::RED,
    named::GREEN,
    named::ORANGE,
    named::PURPLE,
    named::GRAY,
];

/// Colour for the selection at `index`; the 6th selection reuses the 1st.
pub fn overlay_color(index: usize) -> Srgb<u8> {
    OVERLAY_PALETTE[index % OVERLAY_PALETTE.len()]
}

/// Convert a palette colour into the egui representation.
pub fn to_color32(color: Srgb<u8>) -> Color32 {
    Color32::from_rgb(color.red, color.green, color.blue)
}

/// Colour of the `index`-th spectrum trace.  Hues are spread evenly and
/// offset so they stay clear of the overlay reds.
pub fn spectrum_color(index: usize, count: usize) -> Color32 {
    if count <= 1 {
        return Color32::LIGHT_BLUE;
    }
    let hue = 180.0 + (index as f32 / count as f32) * 120.0;
    let hsl = Hsl::new(hue, 0.65, 0.6);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}
