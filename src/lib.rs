//! Epicycles crate root: re-exports and module wiring.
//!
//! Animated Fourier series approximation built on egui/eframe: a chain of
//! rotating circles whose tip traces a square, sawtooth or triangle wave,
//! plotted next to a scrolling graph of the traced signal.
//!
//! - `data`: epicycle engine, wave trace buffer and animation state
//! - `render`: drawing surface abstraction and the per-frame routine
//! - `panels`: controls and canvas UI
//! - `config`: window and animation configuration
//! - `app`: eframe application and run helper

pub mod app;
pub mod color_scheme;
pub mod config;
pub mod data;
pub mod error;
pub mod hotkeys;
pub mod panels;
pub mod render;

pub use app::{run_epicycles, EpicycleApp};
pub use color_scheme::{ColorScheme, EpicyclePalette};
pub use config::{EpicycleConfig, FeatureFlags, Settings};
pub use data::animation::AnimationState;
pub use data::epicycle::{compute, Epicycles, SeriesParameters, Term, MAX_TERMS, MIN_TERMS};
pub use data::trace::WaveTraceBuffer;
pub use data::wave::{Amplitudes, WaveKind};
pub use error::{ConfigError, EngineError};
