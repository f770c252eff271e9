use std::time::Instant;

use eframe::egui;

use crate::notice::{Level, Notice};

const TOAST_DURATION: f32 = 1.5;
const TOAST_FADE_START: f32 = 1.0;

/// A short-lived message over the slideshow.
pub struct Toast {
    notice: Notice,
    start: Instant,
}

impl Toast {
    pub fn new(notice: Notice) -> Self {
        Self {
            notice,
            start: Instant::now(),
        }
    }

    pub fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        let duration = self.duration();
        let fade_start = duration - (TOAST_DURATION - TOAST_FADE_START);
        if elapsed < fade_start {
            1.0
        } else if elapsed < duration {
            1.0 - (elapsed - fade_start) / (duration - fade_start)
        } else {
            0.0
        }
    }

    pub fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= self.duration()
    }

    // errors stay up long enough to read a path
    fn duration(&self) -> f32 {
        match self.notice.level {
            Level::Error => TOAST_DURATION * 3.0,
            _ => TOAST_DURATION,
        }
    }

    pub fn draw(&self, ui: &egui::Ui, rect: egui::Rect) {
        let opacity = self.opacity();
        if opacity <= 0.0 {
            return;
        }
        let text_color = with_opacity(level_color(self.notice.level), opacity * 0.9);
        let bg = with_opacity(egui::Color32::from_rgb(0x2D, 0x2D, 0x2D), opacity * 0.9);
        let galley = ui.painter().layout_no_wrap(
            self.notice.message.clone(),
            egui::FontId::proportional(20.0),
            text_color,
        );
        let padding = 16.0;
        let toast_rect = egui::Rect::from_min_size(
            egui::pos2(
                rect.center().x - galley.rect.width() / 2.0 - padding,
                rect.bottom() - 80.0,
            ),
            egui::vec2(
                galley.rect.width() + padding * 2.0,
                galley.rect.height() + padding * 2.0,
            ),
        );
        ui.painter().rect_filled(toast_rect, 8.0, bg);
        let text_pos = egui::pos2(toast_rect.left() + padding, toast_rect.top() + padding);
        ui.painter().galley(text_pos, galley, text_color);
    }
}

pub fn level_color(level: Level) -> egui::Color32 {
    match level {
        Level::Info => egui::Color32::from_rgb(0xC8, 0xC8, 0xC8),
        Level::Warn => egui::Color32::from_rgb(0xE5, 0xC0, 0x7B),
        Level::Error => egui::Color32::from_rgb(0xE0, 0x6C, 0x75),
    }
}

fn with_opacity(color: egui::Color32, opacity: f32) -> egui::Color32 {
    let [r, g, b, _] = color.to_array();
    egui::Color32::from_rgba_unmultiplied(r, g, b, (opacity.clamp(0.0, 1.0) * 255.0) as u8)
}

/// Keyboard help plus the current position, toggled with H.
pub fn draw_hud(ui: &egui::Ui, rect: egui::Rect, status: &str) {
    let shortcuts = [
        ("\u{2190}", "Previous image"),
        ("\u{2192}", "Next image"),
        ("Space", "Pause / resume"),
        ("Delete", "Delete image from disk"),
        ("H", "Toggle this HUD"),
        ("Esc", "Back to launcher"),
    ];

    let bg = with_opacity(egui::Color32::from_rgb(0x2D, 0x2D, 0x2D), 0.9);
    let text_color = with_opacity(egui::Color32::from_rgb(0xC8, 0xC8, 0xC8), 0.9);
    let key_color = with_opacity(egui::Color32::from_rgb(0x52, 0x94, 0xE2), 0.9);

    let padding = 24.0;
    let line_height = 32.0;
    let hud_height = shortcuts.len() as f32 * line_height + padding * 2.0 + 40.0;
    let hud_width = 380.0;

    let hud_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(hud_width, hud_height));
    ui.painter().rect_filled(hud_rect, 12.0, bg);

    let title_galley = ui.painter().layout_no_wrap(
        status.to_string(),
        egui::FontId::proportional(18.0),
        egui::Color32::WHITE,
    );
    let title_pos = egui::pos2(hud_rect.left() + padding, hud_rect.top() + padding);
    ui.painter().galley(title_pos, title_galley, text_color);

    let mut y = hud_rect.top() + padding + 40.0;
    for (key, desc) in &shortcuts {
        let key_galley =
            ui.painter()
                .layout_no_wrap(key.to_string(), egui::FontId::monospace(15.0), key_color);
        ui.painter().galley(
            egui::pos2(hud_rect.left() + padding, y),
            key_galley,
            key_color,
        );

        let desc_galley = ui.painter().layout_no_wrap(
            desc.to_string(),
            egui::FontId::proportional(15.0),
            text_color,
        );
        ui.painter().galley(
            egui::pos2(hud_rect.left() + padding + 120.0, y),
            desc_galley,
            text_color,
        );

        y += line_height;
    }
}
