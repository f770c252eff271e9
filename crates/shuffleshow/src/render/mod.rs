pub mod overlay;
pub mod stage;

use eframe::egui;

/// Pixel size the displayed image is fitted to: the monitor if known,
/// otherwise the area we are drawing into.
pub fn display_bounds(ctx: &egui::Context, fallback: egui::Rect) -> [u32; 2] {
    let ppp = ctx.pixels_per_point();
    let size = ctx
        .input(|i| i.viewport().monitor_size)
        .unwrap_or(fallback.size())
        * ppp;
    [
        size.x.round().max(1.0) as u32,
        size.y.round().max(1.0) as u32,
    ]
}
