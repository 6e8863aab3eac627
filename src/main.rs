//! CtxBuilder -- packages CyberTracker components into a `.ctx` file.
//!
//! Thin binary entry point. All logic lives in the `ctxbuilder-core`
//! and `ctxbuilder-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("CtxBuilder starting");

    let icon = ctxbuilder_gui::icon::generate_icon(64);
    let state = ctxbuilder_gui::CtxBuilderState::build();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("CtxBuilder -- CyberTracker CTX Builder")
            .with_inner_size([640.0, 460.0])
            .with_min_inner_size([480.0, 360.0])
            .with_resizable(true)
            .with_icon(icon),
        ..Default::default()
    };

    eframe::run_native(
        "CtxBuilder",
        options,
        Box::new(|cc| {
            Ok(Box::new(ctxbuilder_gui::CtxBuilderApp::with_state(
                cc, state,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
