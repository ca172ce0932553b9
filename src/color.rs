use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Lighten, Srgb};

use crate::data::segment::Side;

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// Scatter markers for every observation.
pub const SCATTER: Color32 = Color32::from_rgb(31, 119, 180);

/// Opacity of the confidence band fill.
const BAND_ALPHA: u8 = 48;

/// Line colour of the fit for one side of the boundary.
pub fn fit_color(side: Side) -> Color32 {
    match side {
        Side::AtOrBelow => Color32::from_rgb(214, 39, 40),
        Side::Above => Color32::from_rgb(44, 160, 44),
    }
}

/// Translucent, lightened variant of `base` used to shade a band.
pub fn band_fill(base: Color32) -> Color32 {
    let [r, g, b, _] = base.to_array();
    let rgb = Srgb::new(r, g, b).into_format::<f32>();
    let hsl: Hsl = rgb.into_color();
    let light: Srgb = hsl.lighten(0.35).into_color();
    let light = light.into_format::<u8>();
    Color32::from_rgba_unmultiplied(light.red, light.green, light.blue, BAND_ALPHA)
}
