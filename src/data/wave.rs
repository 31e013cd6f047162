//! Waveform kinds and their Fourier coefficients.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Periodic waveform approximated by the epicycle chain.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaveKind {
    #[default]
    Square,
    Sawtooth,
    Triangle,
}

impl WaveKind {
    /// All kinds in dropdown order.
    pub const ALL: [WaveKind; 3] = [WaveKind::Square, WaveKind::Sawtooth, WaveKind::Triangle];

    pub fn label(&self) -> &'static str {
        match self {
            WaveKind::Square => "Square",
            WaveKind::Sawtooth => "Sawtooth",
            WaveKind::Triangle => "Triangle",
        }
    }

    /// The kind after this one in [`WaveKind::ALL`], wrapping around.
    pub fn next(&self) -> WaveKind {
        match self {
            WaveKind::Square => WaveKind::Sawtooth,
            WaveKind::Sawtooth => WaveKind::Triangle,
            WaveKind::Triangle => WaveKind::Square,
        }
    }

    /// Harmonic index of the term at zero-based position `i`.
    ///
    /// Square and triangle waves only contain odd harmonics (1, 3, 5, ...),
    /// the sawtooth contains all of them (1, 2, 3, ...). Both sequences start
    /// at 1, so no coefficient formula ever divides by zero.
    pub fn harmonic(&self, i: usize) -> u32 {
        let n = match self {
            WaveKind::Square | WaveKind::Triangle => 2 * i + 1,
            WaveKind::Sawtooth => i + 1,
        };
        n as u32
    }

    /// Signed radius of harmonic `n`, scaled by this kind's amplitude.
    pub fn radius(&self, n: u32, amplitudes: &Amplitudes) -> f64 {
        let nf = f64::from(n);
        match self {
            WaveKind::Square => amplitudes.square * 4.0 / (nf * PI),
            WaveKind::Sawtooth => {
                let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
                amplitudes.sawtooth * 2.0 * sign / (nf * PI)
            }
            WaveKind::Triangle => {
                let sign = if (n.saturating_sub(1) / 2) % 2 == 0 { 1.0 } else { -1.0 };
                amplitudes.triangle * (8.0 / (PI * PI)) * sign / (nf * nf)
            }
        }
    }
}

impl fmt::Display for WaveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WaveKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "square" => Ok(WaveKind::Square),
            "sawtooth" | "saw" => Ok(WaveKind::Sawtooth),
            "triangle" => Ok(WaveKind::Triangle),
            _ => Err(EngineError::UnknownWaveKind(s.to_string())),
        }
    }
}

/// Presentation scale of each waveform, in plot units.
///
/// The values are picked so the three waveforms render at a comparable
/// height; they carry no mathematical meaning.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Amplitudes {
    pub square: f64,
    pub sawtooth: f64,
    pub triangle: f64,
}

impl Default for Amplitudes {
    fn default() -> Self {
        Self {
            square: 75.0,
            sawtooth: 100.0,
            triangle: 158.0,
        }
    }
}
