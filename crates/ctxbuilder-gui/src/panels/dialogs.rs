/// Modal dialogs: errors, overwrite confirmation and build success.
///
/// Only one dialog is open at a time. While it is, `app.rs` disables the
/// rest of the window so the dialog behaves like a blocking message box.
use crate::state::{AppState, Dialog};

/// Show the pending dialog, if any.
pub fn dialogs(ctx: &egui::Context, state: &mut AppState) {
    let Some(dialog) = state.dialog.clone() else {
        return;
    };

    let title = match &dialog {
        Dialog::Error { title, .. } => title.as_str(),
        Dialog::ConfirmOverwrite { .. } => "File Exists",
        Dialog::Success { .. } => "Success",
    };

    egui::Window::new(title)
        .id(egui::Id::new("ctxbuilder_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([360.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(4.0);
            match &dialog {
                Dialog::Error { message, .. } => error_body(ui, state, message),
                Dialog::ConfirmOverwrite { path } => overwrite_body(ui, state, path),
                Dialog::Success { path } => success_body(ui, state, path),
            }
            ui.add_space(4.0);
        });
}

fn error_body(ui: &mut egui::Ui, state: &mut AppState, message: &str) {
    let color_error = egui::Color32::from_rgb(0xf3, 0x8b, 0xa8);
    ui.label(egui::RichText::new(message).color(color_error));
    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        if ui.button("OK").clicked() {
            state.dismiss_dialog();
        }
    });
}

fn overwrite_body(ui: &mut egui::Ui, state: &mut AppState, path: &std::path::Path) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    ui.label(format!("{name} already exists. Overwrite?"));
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("Yes").clicked() {
            state.answer_overwrite(true);
        }
        if ui.button("No").clicked() {
            state.answer_overwrite(false);
        }
    });
}

fn success_body(ui: &mut egui::Ui, state: &mut AppState, path: &std::path::Path) {
    let color_muted = ui.visuals().weak_text_color();
    ui.label("Done! The file is located here:");
    ui.label(egui::RichText::new(path.display().to_string()).monospace());
    ui.add_space(6.0);
    ui.label(
        egui::RichText::new("Import into the appropriate CyberTracker database.")
            .color(color_muted),
    );
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("OK").clicked() {
            state.dismiss_dialog();
        }
        #[cfg(windows)]
        {
            if ui.button("📂 Show in Explorer").clicked() {
                let _ = std::process::Command::new("explorer.exe")
                    .arg(format!("/select,{}", path.display()))
                    .spawn();
            }
        }
        if ui.button("📋 Copy Path").clicked() {
            ui.ctx().copy_text(path.display().to_string());
        }
    });
}
