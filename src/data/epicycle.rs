//! Epicycle engine: one rotating vector per Fourier term.

use serde::{Deserialize, Serialize};

use crate::data::wave::{Amplitudes, WaveKind};
use crate::error::EngineError;

/// Smallest accepted number of series terms.
pub const MIN_TERMS: usize = 1;
/// Largest accepted number of series terms. Bounds the per-frame cost.
pub const MAX_TERMS: usize = 1000;

/// Parameters chosen by the user, read once per frame.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesParameters {
    pub term_count: usize,
    pub wave_kind: WaveKind,
}

impl Default for SeriesParameters {
    fn default() -> Self {
        Self {
            term_count: MIN_TERMS,
            wave_kind: WaveKind::Square,
        }
    }
}

impl SeriesParameters {
    /// Build parameters, rejecting term counts outside `[MIN_TERMS, MAX_TERMS]`.
    pub fn new(term_count: usize, wave_kind: WaveKind) -> Result<Self, EngineError> {
        check_term_count(term_count)?;
        Ok(Self {
            term_count,
            wave_kind,
        })
    }

    /// Largest harmonic index currently in the series.
    pub fn largest_harmonic(&self) -> u32 {
        self.wave_kind.harmonic(self.term_count.max(MIN_TERMS) - 1)
    }
}

/// Clamp an arbitrary integer into the accepted term range.
pub fn clamp_term_count(value: i64) -> usize {
    value.clamp(MIN_TERMS as i64, MAX_TERMS as i64) as usize
}

pub fn check_term_count(term_count: usize) -> Result<(), EngineError> {
    if (MIN_TERMS..=MAX_TERMS).contains(&term_count) {
        Ok(())
    } else {
        Err(EngineError::InvalidTermCount {
            got: term_count,
            min: MIN_TERMS,
            max: MAX_TERMS,
        })
    }
}

/// One rotating vector of the chain.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Term {
    pub harmonic: u32,
    /// Signed coefficient; the drawn circle uses its magnitude.
    pub radius: f64,
    /// Circle center, i.e. the tip of the previous term.
    pub center: [f64; 2],
    /// End of this term's radius line.
    pub tip: [f64; 2],
}

impl Term {
    pub fn diameter(&self) -> f64 {
        self.radius.abs() * 2.0
    }
}

/// Result of one engine run.
#[derive(Clone, Debug, PartialEq)]
pub struct Epicycles {
    pub terms: Vec<Term>,
    /// Cumulative tip of the whole chain.
    pub endpoint: [f64; 2],
}

/// Compute the epicycle chain for `term_count` terms of `wave_kind` at `phase`.
///
/// The chain starts at the origin; every term rotates at its harmonic's
/// angular speed and is attached to the tip of the previous one. The result
/// depends only on the arguments.
pub fn compute(
    term_count: usize,
    wave_kind: WaveKind,
    phase: f64,
    amplitudes: &Amplitudes,
) -> Result<Epicycles, EngineError> {
    check_term_count(term_count)?;

    let mut terms = Vec::with_capacity(term_count);
    let (mut x, mut y) = (0.0_f64, 0.0_f64);
    for i in 0..term_count {
        let center = [x, y];
        let harmonic = wave_kind.harmonic(i);
        let radius = wave_kind.radius(harmonic, amplitudes);
        let angle = f64::from(harmonic) * phase;
        x += radius * angle.cos();
        y += radius * angle.sin();
        terms.push(Term {
            harmonic,
            radius,
            center,
            tip: [x, y],
        });
    }

    Ok(Epicycles {
        terms,
        endpoint: [x, y],
    })
}

/// Convenience wrapper over [`compute`] for a [`SeriesParameters`] value.
pub fn compute_for(
    params: &SeriesParameters,
    phase: f64,
    amplitudes: &Amplitudes,
) -> Result<Epicycles, EngineError> {
    compute(params.term_count, params.wave_kind, phase, amplitudes)
}
