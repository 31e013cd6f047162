//! Configuration for the epicycle window.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color_scheme::ColorScheme;
use crate::data::epicycle::{check_term_count, SeriesParameters};
use crate::data::animation::DEFAULT_PHASE_STEP;
use crate::data::trace::{DEFAULT_TRACE_CAPACITY, MAX_TRACE_CAPACITY};
use crate::data::wave::{Amplitudes, WaveKind};
use crate::error::{ConfigError, EngineError};
use crate::hotkeys::Hotkeys;

/// Horizontal distance between the epicycle origin and the start of the wave trace.
pub const DEFAULT_WAVE_OFFSET: f64 = 200.0;

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual drawing layers and UI parts on or off.
///
/// All features default to `true` (enabled).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Draw the circle of every term.
    pub circles: bool,
    /// Draw the radius line of every term.
    pub radii: bool,
    /// Draw the segment joining the chain tip to the head of the wave.
    pub connector: bool,
    /// Draw the wave trace.
    pub wave: bool,
    /// Show the controls panel.
    pub controls: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            circles: true,
            radii: true,
            connector: true,
            wave: true,
            controls: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Animation settings
// ─────────────────────────────────────────────────────────────────────────────

/// The serializable part of the configuration, loadable from a YAML file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Initial term count and waveform.
    pub params: SeriesParameters,
    /// Per-waveform presentation scale.
    pub amplitudes: Amplitudes,
    /// Phase increment per frame, in radians.
    pub phase_step: f64,
    /// Number of samples kept in the wave trace.
    pub trace_capacity: usize,
    /// Horizontal gap between the epicycle origin and the wave origin.
    pub wave_offset: f64,
    /// Number of segments used to draw each circle.
    pub circle_segments: usize,
    /// Stroke width of all primitives, in points.
    pub line_width: f32,
    pub color_scheme: ColorScheme,
    pub features: FeatureFlags,
    pub hotkeys: Option<Hotkeys>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            params: SeriesParameters::default(),
            amplitudes: Amplitudes::default(),
            phase_step: DEFAULT_PHASE_STEP,
            trace_capacity: DEFAULT_TRACE_CAPACITY,
            wave_offset: DEFAULT_WAVE_OFFSET,
            circle_segments: 64,
            line_width: 1.0,
            color_scheme: ColorScheme::default(),
            features: FeatureFlags::default(),
            hotkeys: Some(Hotkeys::default()),
        }
    }
}

impl Settings {
    /// Parse settings from YAML. Missing fields take their defaults.
    pub fn from_yaml(s: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_yaml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the animation cannot run with: the phase must move
    /// forward every frame and every drawn coordinate must stay finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_term_count(self.params.term_count)?;
        if !(self.phase_step.is_finite() && self.phase_step > 0.0) {
            return Err(invalid(
                "phase_step",
                format!("{} is not a positive number", self.phase_step),
            ));
        }
        let a = &self.amplitudes;
        for (field, v) in [
            ("amplitudes.square", a.square),
            ("amplitudes.sawtooth", a.sawtooth),
            ("amplitudes.triangle", a.triangle),
        ] {
            if !v.is_finite() {
                return Err(invalid(field, format!("{v} is not finite")));
            }
        }
        if !self.wave_offset.is_finite() {
            return Err(invalid(
                "wave_offset",
                format!("{} is not finite", self.wave_offset),
            ));
        }
        if !(1..=MAX_TRACE_CAPACITY).contains(&self.trace_capacity) {
            return Err(invalid(
                "trace_capacity",
                format!("{} is outside [1, {}]", self.trace_capacity, MAX_TRACE_CAPACITY),
            ));
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&s)
    }

    /// Override the initial waveform and term count from string values, e.g.
    /// environment variables. Both values are validated before anything is
    /// changed.
    pub fn apply_overrides(
        &mut self,
        wave: Option<&str>,
        terms: Option<&str>,
    ) -> Result<(), EngineError> {
        let wave_kind = match wave {
            Some(w) => w.parse::<WaveKind>()?,
            None => self.params.wave_kind,
        };
        let term_count = match terms {
            Some(t) => t
                .trim()
                .parse::<usize>()
                .map_err(|_| EngineError::NotATermCount(t.to_string()))?,
            None => self.params.term_count,
        };
        self.params = SeriesParameters::new(term_count, wave_kind)?;
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

// ─────────────────────────────────────────────────────────────────────────────
// EpicycleConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the epicycle window.
#[derive(Clone)]
pub struct EpicycleConfig {
    /// Native window title.
    pub title: String,
    /// Optional headline rendered above the controls.
    pub headline: Option<String>,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
    /// Animation and drawing settings.
    pub settings: Settings,
}

impl Default for EpicycleConfig {
    fn default() -> Self {
        Self {
            title: "Fourier Epicycles".to_string(),
            headline: None,
            native_options: None,
            settings: Settings::default(),
        }
    }
}
