use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

use crate::launcher::Launcher;
use crate::notice::{Level, Notice};
use crate::render;
use crate::render::overlay::{Toast, draw_hud, level_color};
use crate::render::stage::Stage;
use crate::slideshow::{ResumeBehavior, Slideshow};

const PRESENTATION_VIEWPORT: &str = "shuffleshow-presentation";

/// Command-line choices that shape the launcher.
pub struct LaunchOptions {
    pub directory: Option<PathBuf>,
    pub interval: String,
    pub start: bool,
    pub resume: ResumeBehavior,
    pub seed: Option<u64>,
}

struct ShuffleshowApp {
    launcher: Launcher,
    slideshow: Option<Slideshow>,
    stage: Stage,
    /// Last launcher notice, shown under the Start button.
    status: Option<Notice>,
    toast: Option<Toast>,
    show_hud: bool,
    focus_pending: bool,
    auto_start: bool,
}

impl ShuffleshowApp {
    fn new(options: LaunchOptions) -> Self {
        let auto_start = options.start && options.directory.is_some();
        Self {
            launcher: Launcher::new(
                options.directory,
                options.interval,
                options.resume,
                options.seed,
            ),
            slideshow: None,
            stage: Stage::default(),
            status: None,
            toast: None,
            show_hud: false,
            focus_pending: false,
            auto_start,
        }
    }

    fn browse(&mut self) {
        let mut dialog = rfd::FileDialog::new().set_title("Choose a folder of images");
        let current = PathBuf::from(self.launcher.directory.trim());
        if current.is_dir() {
            dialog = dialog.set_directory(&current);
        }
        if let Some(dir) = dialog.pick_folder() {
            self.launcher.set_directory(dir);
        }
    }

    fn start(&mut self) {
        self.stage.clear();
        self.toast = None;
        self.slideshow = self.launcher.start(Instant::now());
        if self.slideshow.is_some() {
            self.focus_pending = true;
        }
    }

    fn drain_launcher_notices(&mut self) {
        for notice in self.launcher.drain_notices() {
            notice.log();
            self.status = Some(notice);
        }
    }

    fn launcher_ui(&mut self, ctx: &egui::Context) {
        let mut browse_clicked = false;
        let mut start_clicked = false;
        let running = self.slideshow.is_some();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            ui.label("Image folder:");
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.launcher.directory).desired_width(320.0),
                );
                browse_clicked = ui.button("Browse\u{2026}").clicked();
            });

            ui.add_space(8.0);
            ui.label("Interval (ms):");
            ui.add(
                egui::TextEdit::singleline(&mut self.launcher.interval).desired_width(100.0),
            );

            ui.add_space(16.0);
            start_clicked = ui
                .add_enabled(!running, egui::Button::new("Start slideshow"))
                .clicked();
            if ui.input(|i| i.key_pressed(egui::Key::Enter)) && !running {
                start_clicked = true;
            }

            if let Some(status) = &self.status {
                ui.add_space(12.0);
                ui.colored_label(level_color_for_panel(status), &status.message);
            }
        });

        if browse_clicked {
            self.browse();
        }
        if start_clicked {
            self.start();
        }
    }

    fn presentation_ui(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let Some(show) = self.slideshow.as_mut() else {
            return;
        };
        show.set_interval_text(&self.launcher.interval);

        if self.focus_pending {
            ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
            self.focus_pending = false;
        }

        ctx.input(|i| {
            if i.viewport().close_requested() || i.key_pressed(egui::Key::Escape) {
                show.close();
                return;
            }
            if i.key_pressed(egui::Key::ArrowLeft) {
                show.previous(now);
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                show.next(now);
            }
            if i.key_pressed(egui::Key::Space) {
                show.toggle_pause(now);
            }
            if i.key_pressed(egui::Key::Delete) {
                show.delete_current(now);
            }
            if i.key_pressed(egui::Key::H) {
                self.show_hud = !self.show_hud;
            }
        });

        show.tick(now);

        if show.take_redraw() {
            if let Some(path) = show.current().map(|p| p.to_path_buf()) {
                let bounds = render::display_bounds(ctx, ctx.available_rect());
                if let Err(e) = self.stage.show(ctx, &path, bounds) {
                    show.report(Notice::error(e.to_string()));
                }
            }
        }

        let mut latest = None;
        for notice in show.drain_notices() {
            notice.log();
            latest = Some(notice);
        }

        if show.is_closed() {
            tracing::debug!("Presentation closed");
            // the launcher shows whatever ended the slideshow
            if latest.is_some() {
                self.status = latest;
            }
            self.toast = None;
            self.slideshow = None;
            self.stage.clear();
            return;
        }

        if let Some(notice) = latest {
            self.toast = Some(Toast::new(notice));
        }
        let status = self.show_hud.then(|| show.status_line());

        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }

        let bg = egui::Color32::BLACK;
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);
                self.stage.paint(ui, rect);

                if let Some(status) = &status {
                    draw_hud(ui, rect, status);
                }
                if let Some(toast) = &self.toast {
                    toast.draw(ui, rect);
                }
            });
    }
}

fn level_color_for_panel(notice: &Notice) -> egui::Color32 {
    match notice.level {
        Level::Info => egui::Color32::GRAY,
        level => level_color(level),
    }
}

impl eframe::App for ShuffleshowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.auto_start {
            self.auto_start = false;
            self.start();
        }

        self.drain_launcher_notices();
        self.launcher_ui(ctx);

        if self.slideshow.is_some() {
            let viewport = egui::ViewportBuilder::default()
                .with_title("shuffleshow")
                .with_fullscreen(true)
                .with_decorations(false);
            ctx.show_viewport_immediate(
                egui::ViewportId::from_hash_of(PRESENTATION_VIEWPORT),
                viewport,
                |ctx, _class| self.presentation_ui(ctx),
            );
        }

        // Immediate viewports only repaint with the root, so the root carries
        // the slideshow's timer.
        if let Some(due) = self.slideshow.as_ref().and_then(Slideshow::deadline) {
            ctx.request_repaint_after(due.saturating_duration_since(Instant::now()));
        }
        if self.toast.is_some() {
            ctx.request_repaint();
        }
    }
}

pub fn run(options: LaunchOptions) -> anyhow::Result<()> {
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([480.0, 260.0])
        .with_title("shuffleshow");

    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "shuffleshow",
        native,
        Box::new(move |_cc| Ok(Box::new(ShuffleshowApp::new(options)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
