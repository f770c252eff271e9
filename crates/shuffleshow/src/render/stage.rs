use std::path::{Path, PathBuf};

use eframe::egui;
use image::imageops::FilterType;

use crate::error::LoadError;

/// Largest size with the same aspect ratio that fits in `bounds`.
/// Never scales up.
pub fn fit_within(size: [u32; 2], bounds: [u32; 2]) -> [u32; 2] {
    let [w, h] = size;
    let [max_w, max_h] = bounds;
    if w == 0 || h == 0 || (w <= max_w && h <= max_h) {
        return size;
    }
    let scale = (max_w as f64 / w as f64).min(max_h as f64 / h as f64);
    [
        ((w as f64 * scale).round() as u32).max(1),
        ((h as f64 * scale).round() as u32).max(1),
    ]
}

/// Decode an image and shrink it to fit `bounds` with Lanczos resampling.
pub fn load_fitted(path: &Path, bounds: [u32; 2]) -> Result<image::RgbaImage, LoadError> {
    let img = image::open(path).map_err(|source| LoadError {
        path: path.to_path_buf(),
        source,
    })?;
    let [w, h] = fit_within([img.width(), img.height()], bounds);
    let img = if [w, h] != [img.width(), img.height()] {
        img.resize_exact(w, h, FilterType::Lanczos3)
    } else {
        img
    };
    Ok(img.into_rgba8())
}

/// Where to draw a texture of `tex_size` points: centered in `available`,
/// shrunk if it would overflow.
pub fn centered_rect(tex_size: egui::Vec2, available: egui::Rect) -> egui::Rect {
    let scale = (available.width() / tex_size.x)
        .min(available.height() / tex_size.y)
        .min(1.0);
    egui::Rect::from_center_size(available.center(), tex_size * scale)
}

struct Shown {
    path: PathBuf,
    texture: Option<egui::TextureHandle>,
}

/// The single image element on the presentation surface.
#[derive(Default)]
pub struct Stage {
    shown: Option<Shown>,
}

impl Stage {
    /// Replace the displayed image. The previous texture is released before
    /// the next one is decoded.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        path: &Path,
        bounds: [u32; 2],
    ) -> Result<(), LoadError> {
        self.shown = None;

        let result = load_fitted(path, bounds);
        let texture = match &result {
            Ok(rgba) => {
                let size = [rgba.width() as usize, rgba.height() as usize];
                let color = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
                Some(ctx.load_texture(
                    path.display().to_string(),
                    color,
                    egui::TextureOptions::LINEAR,
                ))
            }
            Err(_) => None,
        };
        self.shown = Some(Shown {
            path: path.to_path_buf(),
            texture,
        });
        result.map(|_| ())
    }

    pub fn clear(&mut self) {
        self.shown = None;
    }

    pub fn paint(&self, ui: &egui::Ui, rect: egui::Rect) {
        let Some(shown) = &self.shown else {
            return;
        };
        match &shown.texture {
            Some(texture) => {
                let size = texture.size_vec2() / ui.ctx().pixels_per_point();
                let draw_rect = centered_rect(size, rect);
                let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                ui.painter()
                    .image(texture.id(), draw_rect, uv, egui::Color32::WHITE);
            }
            None => {
                let name = shown
                    .path
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string();
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    name,
                    egui::FontId::proportional(24.0),
                    egui::Color32::from_gray(120),
                );
            }
        }
    }
}
