//! Top-level entry point for running the animation as a native window.

use eframe::egui;

use super::EpicycleApp;

/// Launch the epicycle animation in a native window.
///
/// Builds an [`EpicycleApp`] from `cfg`, opens a native window and enters the
/// eframe event loop. The call blocks until the window is closed.
pub fn run_epicycles(mut cfg: crate::config::EpicycleConfig) -> eframe::Result<()> {
    let app = EpicycleApp::new(&cfg);

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Wide enough for the chain plus the full trace.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1900.0, 700.0));
    }
    if opts.viewport.title.is_none() {
        opts.viewport = opts.viewport.clone().with_title(title.clone());
    }

    log::info!(
        "starting {} with {} {} terms",
        title,
        cfg.settings.params.term_count,
        cfg.settings.params.wave_kind
    );

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
