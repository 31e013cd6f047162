//! Canvas panel: the epicycle chain and its trace drawn in a plot.

use egui::Ui;
use egui_phosphor::regular::WAVE_SINE;
use egui_plot::Plot;

use super::panel_trait::Panel;
use crate::color_scheme::EpicyclePalette;
use crate::config::Settings;
use crate::data::animation::AnimationState;
use crate::data::wave::Amplitudes;
use crate::render::{draw_frame, DrawList, FrameLayout};

/// Plot area holding the epicycle chain on the left and the wave trace on the right.
pub struct CanvasPanel {
    amplitudes: Amplitudes,
    layout: FrameLayout,
    circle_segments: usize,
    line_width: f32,
    /// Horizontal extent of the trace, used to fix the plot bounds.
    trace_extent: f64,
}

impl CanvasPanel {
    pub fn new(settings: &Settings) -> Self {
        Self {
            amplitudes: settings.amplitudes,
            layout: FrameLayout {
                wave_offset: settings.wave_offset,
                palette: settings.color_scheme.palette(),
                features: settings.features.clone(),
            },
            circle_segments: settings.circle_segments,
            line_width: settings.line_width,
            trace_extent: settings.trace_capacity as f64,
        }
    }

    pub fn set_palette(&mut self, palette: EpicyclePalette) {
        self.layout.palette = palette;
    }

    /// Vertical half-extent of the plot: the largest amplitude plus room for
    /// the fundamental's circle.
    fn half_height(&self) -> f64 {
        let a = &self.amplitudes;
        a.square.max(a.sawtooth).max(a.triangle) * 1.6
    }
}

impl Panel for CanvasPanel {
    fn title(&self) -> &'static str {
        "Epicycles"
    }

    fn icon_only(&self) -> Option<&'static str> {
        Some(WAVE_SINE)
    }

    fn render_panel(&mut self, ui: &mut Ui, state: &mut AnimationState) {
        let mut list = DrawList::new();
        if let Err(e) = draw_frame(&mut list, state, &self.amplitudes, &self.layout) {
            log::error!("skipping frame: {e}");
        }

        let h = self.half_height();
        let plot = Plot::new("epicycles_plot")
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .include_x(-h)
            .include_x(self.layout.wave_offset + self.trace_extent)
            .include_y(-h)
            .include_y(h);

        let circle_segments = self.circle_segments;
        let line_width = self.line_width;
        plot.show(ui, |plot_ui| {
            list.paint(plot_ui, circle_segments, line_width);
        });
    }
}
