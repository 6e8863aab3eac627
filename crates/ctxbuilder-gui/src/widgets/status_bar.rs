/// Bottom status bar -- current step and last build.
use crate::state::{AppPhase, AppState};
use ctxbuilder_core::stager::BuildStage;
use egui::Ui;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    // Extract theme-adaptive colours once for this frame.
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let color_error = egui::Color32::from_rgb(0xf3, 0x8b, 0xa8);
    let color_warning = egui::Color32::from_rgb(0xfa, 0xb3, 0x87);
    let color_success = egui::Color32::from_rgb(0xa6, 0xe3, 0xa1);

    ui.horizontal(|ui| {
        if state.phase == AppPhase::Building {
            ui.spinner();
        }

        let status_color = match state.build_stage {
            BuildStage::Done => color_success,
            BuildStage::Failed => color_error,
            BuildStage::Cancelled => color_warning,
            _ => color_normal,
        };
        ui.label(
            egui::RichText::new(&state.status)
                .size(12.0)
                .color(status_color),
        );

        if let Some((path, at)) = &state.last_built {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                ui.label(
                    egui::RichText::new(format!("Last build: {} at {}", name, at.format("%H:%M:%S")))
                        .size(11.0)
                        .color(color_weak),
                );
            });
        }
    });
}
