//! Animation state owned by the app and the transitions applied to it by the controls.

use std::num::IntErrorKind;

use crate::data::epicycle::{clamp_term_count, SeriesParameters, MAX_TERMS, MIN_TERMS};
use crate::data::trace::WaveTraceBuffer;
use crate::data::wave::WaveKind;

/// Default phase increment per frame, in radians.
pub const DEFAULT_PHASE_STEP: f64 = 0.05;

/// Everything that changes between frames.
///
/// The phase advances by a fixed step per rendered frame, so playback speed
/// follows the frame rate.
#[derive(Clone, Debug)]
pub struct AnimationState {
    pub phase: f64,
    pub phase_step: f64,
    pub params: SeriesParameters,
    pub trace: WaveTraceBuffer,
    /// Contents of the term-count text field. May hold text that is not a
    /// valid number while the user is typing.
    pub term_text: String,
    pub paused: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(
            SeriesParameters::default(),
            WaveTraceBuffer::default(),
            DEFAULT_PHASE_STEP,
        )
    }
}

impl AnimationState {
    pub fn new(params: SeriesParameters, trace: WaveTraceBuffer, phase_step: f64) -> Self {
        let term_count = params.term_count.clamp(MIN_TERMS, MAX_TERMS);
        Self {
            phase: 0.0,
            phase_step,
            params: SeriesParameters {
                term_count,
                ..params
            },
            trace,
            term_text: term_count.to_string(),
            paused: false,
        }
    }

    /// Slider moved: clamp, store and mirror into the text field.
    pub fn on_slider_change(&mut self, value: usize) {
        let v = clamp_term_count(i64::try_from(value).unwrap_or(i64::MAX));
        self.params.term_count = v;
        self.term_text = v.to_string();
    }

    /// Text field edited. Integers are clamped into range, including ones too
    /// large to represent; anything else leaves the term count untouched.
    /// Returns `true` if the text was accepted.
    pub fn on_text_change(&mut self, text: &str) -> bool {
        self.term_text = text.to_string();
        match text.trim().parse::<i64>() {
            Ok(v) => {
                self.params.term_count = clamp_term_count(v);
                true
            }
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
                self.params.term_count = MAX_TERMS;
                true
            }
            Err(e) if *e.kind() == IntErrorKind::NegOverflow => {
                self.params.term_count = MIN_TERMS;
                true
            }
            Err(e) => {
                log::debug!("ignoring term count input {:?}: {}", text, e);
                false
            }
        }
    }

    /// Rewrite the text field from the effective term count, e.g. once the
    /// field loses focus.
    pub fn sync_text(&mut self) {
        self.term_text = self.params.term_count.to_string();
    }

    pub fn set_wave_kind(&mut self, kind: WaveKind) {
        self.params.wave_kind = kind;
    }

    pub fn next_wave_kind(&mut self) {
        self.params.wave_kind = self.params.wave_kind.next();
    }

    /// Add `delta` terms, clamped into range.
    pub fn step_terms(&mut self, delta: i64) {
        let current = self.params.term_count as i64;
        self.on_slider_change(clamp_term_count(current.saturating_add(delta)));
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Restart from phase zero with an empty trace.
    pub fn reset(&mut self) {
        self.phase = 0.0;
        self.trace.clear();
    }

    /// Move to the next frame's phase. No-op while paused.
    pub fn advance(&mut self) {
        if !self.paused {
            self.phase += self.phase_step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_initial_term_count() {
        let params = SeriesParameters {
            term_count: 0,
            wave_kind: WaveKind::Triangle,
        };
        let s = AnimationState::new(params, WaveTraceBuffer::new(8), 0.1);
        assert_eq!(s.params.term_count, 1);
        assert_eq!(s.term_text, "1");
    }

    #[test]
    fn step_terms_saturates_at_bounds() {
        let mut s = AnimationState::default();
        s.step_terms(-10);
        assert_eq!(s.params.term_count, 1);
        s.step_terms(i64::MAX);
        assert_eq!(s.params.term_count, MAX_TERMS);
        assert_eq!(s.term_text, "1000");
    }

    #[test]
    fn sync_text_replaces_rejected_input() {
        let mut s = AnimationState::default();
        s.on_slider_change(12);
        assert!(!s.on_text_change("12x"));
        assert_eq!(s.term_text, "12x");
        s.sync_text();
        assert_eq!(s.term_text, "12");
    }
}
