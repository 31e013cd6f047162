//! Main application module.
//!
//! | Sub-module          | Responsibility |
//! | ------------------- | -------------- |
//! | [`epicycle_app`]    | [`EpicycleApp`] (eframe) owning the animation state and panels |
//! | [`run`]             | Top-level [`run_epicycles()`] entry point |

mod epicycle_app;
mod run;

pub use epicycle_app::EpicycleApp;
pub use run::run_epicycles;
