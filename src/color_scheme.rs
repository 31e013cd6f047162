//! Color scheme definitions for the epicycle window.
//!
//! A scheme supplies both the egui [`Visuals`] for the surrounding UI and the
//! [`EpicyclePalette`] used for the circles, radius lines and wave trace.

use eframe::egui::{Color32, Context, Visuals};
use serde::{Deserialize, Serialize};

/// Stroke colors for the animation primitives.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EpicyclePalette {
    pub background: Color32,
    pub circle: Color32,
    pub radius: Color32,
    pub connector: Color32,
    pub wave: Color32,
}

/// Visual theme for the window.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    /// Black canvas with green circles and yellow radius lines.
    #[default]
    Dark,
    /// Light theme.
    Light,
    /// Solarized Dark.
    SolarizedDark,
    /// Nord: blue-grey dark theme.
    Nord,
    /// High-contrast: pure-black background with maximally-saturated colours.
    HighContrast,
}

impl ColorScheme {
    /// All built-in schemes (useful for combo-box UIs).
    pub fn all() -> &'static [ColorScheme] {
        &[
            ColorScheme::Dark,
            ColorScheme::Light,
            ColorScheme::SolarizedDark,
            ColorScheme::Nord,
            ColorScheme::HighContrast,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Dark => "Dark",
            ColorScheme::Light => "Light",
            ColorScheme::SolarizedDark => "Solarized Dark",
            ColorScheme::Nord => "Nord",
            ColorScheme::HighContrast => "High Contrast",
        }
    }

    /// Apply this scheme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        ctx.set_visuals(self.visuals());
    }

    pub fn visuals(&self) -> Visuals {
        let p = self.palette();
        match self {
            ColorScheme::Dark => {
                let mut v = Visuals::dark();
                v.extreme_bg_color = p.background;
                v
            }
            ColorScheme::Light => Visuals::light(),
            ColorScheme::SolarizedDark => {
                let mut v = Visuals::dark();
                let base02 = Color32::from_rgb(7, 54, 66);
                let base01 = Color32::from_rgb(88, 110, 117);
                let base0 = Color32::from_rgb(131, 148, 150);
                v.panel_fill = p.background;
                v.window_fill = base02;
                v.extreme_bg_color = p.background;
                v.faint_bg_color = base02;
                v.override_text_color = Some(base0);
                v.widgets.noninteractive.bg_fill = base02;
                v.widgets.inactive.bg_fill = base02;
                v.widgets.inactive.fg_stroke.color = base01;
                v.widgets.hovered.bg_fill = base01;
                v
            }
            ColorScheme::Nord => {
                let mut v = Visuals::dark();
                let polar1 = Color32::from_rgb(59, 66, 82);
                let snow0 = Color32::from_rgb(216, 222, 233);
                v.panel_fill = p.background;
                v.window_fill = polar1;
                v.extreme_bg_color = p.background;
                v.faint_bg_color = polar1;
                v.override_text_color = Some(snow0);
                v.widgets.hovered.bg_fill = Color32::from_rgb(76, 86, 106);
                v
            }
            ColorScheme::HighContrast => {
                let mut v = Visuals::dark();
                v.panel_fill = Color32::BLACK;
                v.window_fill = Color32::from_rgb(10, 10, 10);
                v.extreme_bg_color = Color32::BLACK;
                v.faint_bg_color = Color32::from_rgb(20, 20, 20);
                v.override_text_color = Some(Color32::WHITE);
                v
            }
        }
    }

    pub fn palette(&self) -> EpicyclePalette {
        match self {
            ColorScheme::Dark => EpicyclePalette {
                background: Color32::BLACK,
                circle: Color32::from_rgb(0, 255, 0),
                radius: Color32::from_rgb(255, 255, 0),
                connector: Color32::from_rgb(255, 255, 0),
                wave: Color32::WHITE,
            },
            ColorScheme::Light => EpicyclePalette {
                background: Color32::from_rgb(248, 248, 248),
                circle: Color32::from_rgb(77, 175, 74),
                radius: Color32::from_rgb(255, 127, 0),
                connector: Color32::from_rgb(153, 153, 153),
                wave: Color32::from_rgb(55, 126, 184),
            },
            ColorScheme::SolarizedDark => EpicyclePalette {
                background: Color32::from_rgb(0, 43, 54),
                circle: Color32::from_rgb(42, 161, 152),
                radius: Color32::from_rgb(181, 137, 0),
                connector: Color32::from_rgb(203, 75, 22),
                wave: Color32::from_rgb(38, 139, 210),
            },
            ColorScheme::Nord => EpicyclePalette {
                background: Color32::from_rgb(46, 52, 64),
                circle: Color32::from_rgb(163, 190, 140),
                radius: Color32::from_rgb(235, 203, 139),
                connector: Color32::from_rgb(208, 135, 112),
                wave: Color32::from_rgb(136, 192, 208),
            },
            ColorScheme::HighContrast => EpicyclePalette {
                background: Color32::BLACK,
                circle: Color32::from_rgb(0, 255, 0),
                radius: Color32::from_rgb(255, 255, 0),
                connector: Color32::from_rgb(255, 0, 255),
                wave: Color32::WHITE,
            },
        }
    }
}
