//! Common interface of the UI panels.

use egui::Ui;

use crate::data::animation::AnimationState;

pub trait Panel {
    fn title(&self) -> &'static str;

    /// Phosphor glyph shown next to (or instead of) the title.
    fn icon_only(&self) -> Option<&'static str> {
        None
    }

    fn title_and_icon(&self) -> String {
        match self.icon_only() {
            Some(icon) => format!("{icon} {}", self.title()),
            None => self.title().to_string(),
        }
    }

    fn render_panel(&mut self, ui: &mut Ui, state: &mut AnimationState);
}
