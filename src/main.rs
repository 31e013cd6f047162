//! Native launcher.
//!
//! Environment variables:
//! - `EPICYCLES_CONFIG`: path to a YAML settings file
//! - `EPICYCLES_WAVE`: initial waveform (`square`, `sawtooth`, `triangle`)
//! - `EPICYCLES_TERMS`: initial number of terms (1..=1000)

use epicycles::{run_epicycles, EpicycleConfig, Settings};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let mut cfg = EpicycleConfig::default();

    if let Ok(path) = std::env::var("EPICYCLES_CONFIG") {
        match Settings::load(std::path::Path::new(&path)) {
            Ok(settings) => cfg.settings = settings,
            Err(e) => log::error!("ignoring settings file {path}: {e}"),
        }
    }

    let wave = std::env::var("EPICYCLES_WAVE").ok();
    let terms = std::env::var("EPICYCLES_TERMS").ok();
    if let Err(e) = cfg
        .settings
        .apply_overrides(wave.as_deref(), terms.as_deref())
    {
        log::error!("ignoring initial parameters: {e}");
    }

    run_epicycles(cfg)
}
