//! UI panels shown by the app.

pub mod canvas_ui;
pub mod controls_ui;
pub mod panel_trait;

pub use canvas_ui::CanvasPanel;
pub use controls_ui::ControlsPanel;
pub use panel_trait::Panel;
