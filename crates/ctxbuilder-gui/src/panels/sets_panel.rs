/// Step 2 panel: the matched file sets as a selectable table.
use crate::state::{AppPhase, AppState};
use egui::Ui;
use egui_extras::{Column, TableBuilder};

const ROW_HEIGHT: f32 = 20.0;

/// Draw the file set table and its summary line.
pub fn sets_panel(ui: &mut Ui, state: &mut AppState) {
    let color_muted = ui.visuals().weak_text_color();
    let color_warning = egui::Color32::from_rgb(0xfa, 0xb3, 0x87);

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new("Step 2: Select File Set").strong());
        ui.add_space(4.0);

        let Some(summary) = &state.scan else {
            ui.label(egui::RichText::new("No file sets found").color(color_muted));
            return;
        };

        // Summary line.
        if summary.is_empty() {
            ui.label(
                egui::RichText::new(
                    "No complete file sets found (need matching .xml, .txt, .dat files)",
                )
                .color(color_muted),
            );
        } else {
            ui.label(format!(
                "Found {} complete file set(s)",
                summary.sets.len()
            ));
        }
        if summary.incomplete > 0 {
            ui.label(
                egui::RichText::new(format!(
                    "{} .xml file(s) without a matching .txt and .dat",
                    summary.incomplete
                ))
                .size(11.0)
                .color(color_warning),
            );
        }
        if summary.is_empty() {
            return;
        }
        ui.add_space(4.0);

        let selected = state.selected_set;
        let interactive = state.phase == AppPhase::Idle;
        let mut clicked = None;

        TableBuilder::new(ui)
            .striped(true)
            .sense(egui::Sense::click())
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(120.0))
            .column(Column::auto().at_least(90.0))
            .column(Column::auto().at_least(90.0))
            .column(Column::remainder())
            .header(ROW_HEIGHT, |mut header| {
                for title in ["File set", "Info (.xml)", "Elements (.txt)", "Sightings (.dat)"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for (i, set) in summary.sets.iter().enumerate() {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.set_selected(selected == Some(i));
                        row.col(|ui| {
                            ui.add(egui::Label::new(&set.name).selectable(false));
                        });
                        for name in set.source_names() {
                            row.col(|ui| {
                                ui.add(
                                    egui::Label::new(
                                        egui::RichText::new(name).color(color_muted),
                                    )
                                    .selectable(false)
                                    .truncate(),
                                );
                            });
                        }
                        if interactive && row.response().clicked() {
                            clicked = Some(i);
                        }
                    });
                }
            });

        if let Some(i) = clicked {
            state.select_set(i);
        }
    });
}
