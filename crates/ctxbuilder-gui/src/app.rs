/// Main `eframe::App` implementation for CtxBuilder.
///
/// Composes the toolbar, the two step panels, the dialogs and the status
/// bar into a single window.
use crate::panels;
use crate::state::{AppPhase, AppState};
use crate::widgets;

#[cfg(windows)]
const SEGOE_UI_PATH: &str = "C:\\Windows\\Fonts\\segoeui.ttf";

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so the first
/// frame renders immediately.
pub struct CtxBuilderState {
    pub(crate) inner: AppState,
}

impl CtxBuilderState {
    pub fn build() -> Self {
        let state = AppState::new();
        if let Some(notice) = ctxbuilder_core::platform::unsupported_notice() {
            tracing::warn!("{notice}");
        }
        Self { inner: state }
    }
}

/// The CtxBuilder application.
pub struct CtxBuilderApp {
    state: AppState,
}

impl CtxBuilderApp {
    /// Create a new application instance from pre-built state.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: CtxBuilderState) -> Self {
        #[cfg(windows)]
        load_segoe_ui(&cc.egui_ctx);

        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        Self { state: state.inner }
    }
}

/// Register Segoe UI as the highest-priority proportional font.
#[cfg(windows)]
fn load_segoe_ui(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    match std::fs::read(SEGOE_UI_PATH) {
        Ok(bytes) => {
            fonts.font_data.insert(
                "SegoeUI".to_owned(),
                egui::FontData::from_owned(bytes).into(),
            );
            fonts
                .families
                .entry(egui::FontFamily::Proportional)
                .or_default()
                .insert(0, "SegoeUI".to_owned());
            tracing::info!("Loaded Segoe UI from {}", SEGOE_UI_PATH);
        }
        Err(e) => {
            tracing::warn!(
                "Could not load Segoe UI from {}: {} -- using default font",
                SEGOE_UI_PATH,
                e
            );
        }
    }
    ctx.set_fonts(fonts);
}

impl eframe::App for CtxBuilderApp {
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        if self.state.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // ── Process worker messages ───────────────────────────────────────
        let _changed = self.state.process_build_messages();

        // Keep polling while the worker runs.
        if self.state.phase == AppPhase::Building {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        let enabled = !self.state.is_blocked();

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.add_enabled_ui(enabled, |ui| {
                    widgets::toolbar::toolbar(ui, &mut self.state);
                });
                ui.add_space(4.0);
            });

        // ── About dialog ──────────────────────────────────────────────────
        let mut show_about = self.state.show_about;
        egui::Window::new("About CtxBuilder")
            .open(&mut show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([340.0, 0.0])
            .show(ctx, |ui| {
                let accent = ui.visuals().hyperlink_color;
                let muted = ui.visuals().weak_text_color();
                let normal = ui.visuals().text_color();

                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("📦 CtxBuilder")
                            .size(24.0)
                            .strong()
                            .color(accent),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .size(13.0)
                            .color(muted),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(
                            "Packages a CyberTracker application, its element\n\
                             list and its sightings into a single .ctx file\n\
                             ready for database import.",
                        )
                        .size(12.0)
                        .color(normal),
                    );
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new("Requires makecab.exe (ships with Windows)")
                            .size(11.0)
                            .color(muted),
                    );
                    ui.add_space(2.0);
                    ui.label(
                        egui::RichText::new("Built with Rust & egui")
                            .size(11.0)
                            .color(muted),
                    );
                    ui.add_space(8.0);
                });
            });
        self.state.show_about = show_about;

        // ── Pending dialog ────────────────────────────────────────────────
        panels::dialogs::dialogs(ctx, &mut self.state);

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state);
                ui.add_space(2.0);
            });

        // ── Central panel (steps 1 and 2) ─────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                panels::directory_panel::directory_panel(ui, &mut self.state);
                ui.add_space(8.0);
                egui::ScrollArea::vertical().show(ui, |ui| {
                    panels::sets_panel::sets_panel(ui, &mut self.state);
                });
            });
        });
    }
}
