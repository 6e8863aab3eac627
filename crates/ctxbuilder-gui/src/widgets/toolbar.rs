/// Top action bar -- rescan and build controls, theme toggle, and branding.
use crate::state::{AppPhase, AppState};
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        // App title -- uses the egui accent/hyperlink colour so it adapts to
        // dark and light mode automatically.
        ui.label(
            egui::RichText::new("📦 CtxBuilder")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        // Build button.
        let build_btn = ui
            .add_enabled(
                state.can_build(),
                egui::Button::new("▶ Build CTX File").min_size(egui::vec2(120.0, 28.0)),
            )
            .on_disabled_hover_text(if state.phase == AppPhase::Building {
                "A build is already running"
            } else {
                "Select a file set first"
            });
        if build_btn.clicked() {
            state.start_build();
        }

        // Rescan -- picks up files added since the directory was chosen.
        let can_rescan = state.phase == AppPhase::Idle && state.directory.is_some();
        if ui
            .add_enabled(can_rescan, egui::Button::new("🔄 Rescan"))
            .on_hover_text("Scan the selected directory again")
            .clicked()
        {
            state.rescan();
        }

        // Right-aligned controls.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("ℹ").on_hover_text("About CtxBuilder").clicked() {
                state.show_about = true;
            }

            // ── Theme toggle (☀ light / 🌙 dark) ──────────────────
            let theme_label = if state.dark_mode { "☀" } else { "🌙" };
            let theme_tip = if state.dark_mode {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.dark_mode = !state.dark_mode;
            }

            if let Some(notice) = ctxbuilder_core::platform::unsupported_notice() {
                ui.separator();
                ui.label(
                    egui::RichText::new("⚠ Not Windows")
                        .size(11.0)
                        .color(egui::Color32::from_rgb(0xfa, 0xb3, 0x87)),
                )
                .on_hover_text(notice);
            }
        });
    });
}
