//! Controls panel: term count, waveform and playback.

use eframe::egui;
use egui::Ui;
use egui_phosphor::regular::{ARROW_COUNTER_CLOCKWISE, PAUSE, PLAY, SLIDERS_HORIZONTAL};

use super::panel_trait::Panel;
use crate::data::animation::AnimationState;
use crate::data::epicycle::{MAX_TERMS, MIN_TERMS};
use crate::data::wave::WaveKind;
use crate::hotkeys::{tooltip_for, HotkeyName, Hotkeys};

/// Term-count slider with its text mirror, waveform selector and playback buttons.
pub struct ControlsPanel {
    hotkeys: Hotkeys,
}

impl Default for ControlsPanel {
    fn default() -> Self {
        Self::new(Hotkeys::default())
    }
}

impl ControlsPanel {
    pub fn new(hotkeys: Hotkeys) -> Self {
        Self { hotkeys }
    }

    fn render_term_controls(&self, ui: &mut Ui, state: &mut AnimationState) {
        ui.label("Terms:");
        let mut count = state.params.term_count;
        let slider = ui.add(
            egui::Slider::new(&mut count, MIN_TERMS..=MAX_TERMS)
                .show_value(false)
                .clamping(egui::SliderClamping::Always),
        );
        if slider.changed() {
            state.on_slider_change(count);
        }
        slider.on_hover_text(format!(
            "Number of series terms\n{}\n{}",
            tooltip_for(&self.hotkeys, HotkeyName::FewerTerms),
            tooltip_for(&self.hotkeys, HotkeyName::MoreTerms),
        ));

        let mut text = state.term_text.clone();
        let edit = ui.add(egui::TextEdit::singleline(&mut text).desired_width(56.0));
        if edit.changed() {
            state.on_text_change(&text);
        }
        if edit.lost_focus() {
            state.sync_text();
        }
    }

    fn render_wave_selector(&self, ui: &mut Ui, state: &mut AnimationState) {
        let current = state.params.wave_kind;
        egui::ComboBox::from_label("Waveform")
            .selected_text(current.label())
            .show_ui(ui, |ui| {
                for kind in WaveKind::ALL {
                    if ui.selectable_label(current == kind, kind.label()).clicked() && current != kind {
                        state.set_wave_kind(kind);
                        log::info!("waveform switched to {}", kind);
                    }
                }
            })
            .response
            .on_hover_text(tooltip_for(&self.hotkeys, HotkeyName::NextWave));
    }

    fn render_playback(&self, ui: &mut Ui, state: &mut AnimationState) {
        let label = if state.paused {
            format!("{PLAY} Resume")
        } else {
            format!("{PAUSE} Pause")
        };
        let tt = tooltip_for(&self.hotkeys, HotkeyName::Pause);
        if ui.button(label).on_hover_text(tt).clicked() {
            state.toggle_pause();
        }

        let tt = tooltip_for(&self.hotkeys, HotkeyName::Reset);
        if ui
            .button(format!("{ARROW_COUNTER_CLOCKWISE} Reset"))
            .on_hover_text(tt)
            .clicked()
        {
            state.reset();
        }
    }
}

impl Panel for ControlsPanel {
    fn title(&self) -> &'static str {
        "Controls"
    }

    fn icon_only(&self) -> Option<&'static str> {
        Some(SLIDERS_HORIZONTAL)
    }

    fn render_panel(&mut self, ui: &mut Ui, state: &mut AnimationState) {
        ui.horizontal(|ui| {
            self.render_term_controls(ui, state);
            ui.separator();
            self.render_wave_selector(ui, state);
            ui.separator();
            self.render_playback(ui, state);
        });
        ui.horizontal(|ui| {
            ui.label(format!("Number of terms: {}", state.params.term_count));
            ui.separator();
            ui.label(format!("Largest n: {}", state.params.largest_harmonic()));
        });
    }
}
