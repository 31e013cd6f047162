use eframe::egui;

use crate::color_scheme::ColorScheme;
use crate::config::EpicycleConfig;
use crate::data::animation::AnimationState;
use crate::data::trace::WaveTraceBuffer;
use crate::hotkeys::{handle_hotkeys, Hotkeys};
use crate::panels::{CanvasPanel, ControlsPanel, Panel};

/// Standalone eframe application: controls on top, animation below.
pub struct EpicycleApp {
    pub state: AnimationState,
    controls: ControlsPanel,
    canvas: CanvasPanel,
    hotkeys: Option<Hotkeys>,
    headline: Option<String>,
    show_controls: bool,
    color_scheme: ColorScheme,
    color_scheme_applied: bool,
}

impl EpicycleApp {
    pub fn new(cfg: &EpicycleConfig) -> Self {
        let settings = &cfg.settings;
        let state = AnimationState::new(
            settings.params,
            WaveTraceBuffer::new(settings.trace_capacity),
            settings.phase_step,
        );
        Self {
            state,
            controls: ControlsPanel::new(settings.hotkeys.clone().unwrap_or_default()),
            canvas: CanvasPanel::new(settings),
            hotkeys: settings.hotkeys.clone(),
            headline: cfg.headline.clone(),
            show_controls: settings.features.controls,
            color_scheme: settings.color_scheme,
            color_scheme_applied: false,
        }
    }

    fn render_scheme_selector(&mut self, ui: &mut egui::Ui) {
        let mut scheme = self.color_scheme;
        egui::ComboBox::from_label("Colors")
            .selected_text(scheme.label())
            .show_ui(ui, |ui| {
                for s in ColorScheme::all() {
                    ui.selectable_value(&mut scheme, *s, s.label());
                }
            });
        if scheme != self.color_scheme {
            self.color_scheme = scheme;
            scheme.apply(ui.ctx());
            self.canvas.set_palette(scheme.palette());
        }
    }
}

impl eframe::App for EpicycleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Visuals need a live context, so they are applied on the first frame.
        if !self.color_scheme_applied {
            self.color_scheme.apply(ctx);
            self.color_scheme_applied = true;
        }

        if let Some(hk) = &self.hotkeys {
            handle_hotkeys(hk, &mut self.state, ctx);
        }

        if self.show_controls || self.headline.is_some() {
            egui::TopBottomPanel::top("epicycles_controls").show(ctx, |ui| {
                if let Some(h) = &self.headline {
                    ui.heading(h);
                }
                if self.show_controls {
                    egui::CollapsingHeader::new(self.controls.title_and_icon())
                        .default_open(true)
                        .show(ui, |ui| {
                            self.controls.render_panel(ui, &mut self.state);
                            self.render_scheme_selector(ui);
                        });
                }
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.strong(self.canvas.title_and_icon());
            self.canvas.render_panel(ui, &mut self.state);
        });

        // Request continuous repainting (~60 fps).
        ctx.request_repaint_after(std::time::Duration::from_millis(16));
    }
}
