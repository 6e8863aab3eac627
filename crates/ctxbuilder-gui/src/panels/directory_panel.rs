/// Step 1 panel: the selected directory and the folder picker.
use crate::state::{AppPhase, AppState};
use egui::Ui;

/// Draw the directory selection group.
pub fn directory_panel(ui: &mut Ui, state: &mut AppState) {
    let color_muted = ui.visuals().weak_text_color();

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new("Step 1: Select Directory").strong());
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            let browse = ui.add_enabled(
                state.phase == AppPhase::Idle,
                egui::Button::new("📂 Browse..."),
            );
            if browse.clicked() {
                browse_for_directory(state);
            }

            match &state.directory {
                Some(dir) => {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(dir.display().to_string()).monospace(),
                        )
                        .truncate(),
                    )
                    .on_hover_text(dir.display().to_string());
                }
                None => {
                    ui.label(egui::RichText::new("No directory selected").color(color_muted));
                }
            }
        });
    });
}

/// Open the native folder picker and scan the chosen directory.
pub fn browse_for_directory(state: &mut AppState) {
    let mut dialog =
        rfd::FileDialog::new().set_title("Select Directory Containing CTX Components");
    if let Some(dir) = &state.directory {
        dialog = dialog.set_directory(dir);
    }
    if let Some(dir) = dialog.pick_folder() {
        state.set_directory(dir);
    }
}
