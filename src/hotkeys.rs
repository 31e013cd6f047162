//! Keyboard bindings for the animation controls.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use eframe::egui;

use crate::data::animation::AnimationState;
use crate::error::EngineError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    None,
    Ctrl,
    Alt,
    Shift,
    CtrlShift,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Modifier::None => "",
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::CtrlShift => "Ctrl+Shift",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotkey {
    pub modifier: Modifier,
    pub key: char,
}

impl Hotkey {
    pub fn new(modifier: Modifier, key: char) -> Self {
        Self { modifier, key }
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self.key {
            ' ' => "Space".to_string(),
            other => other.to_string(),
        };

        if self.modifier == Modifier::None {
            write!(f, "{}", key)
        } else {
            write!(f, "{}+{}", self.modifier, key)
        }
    }
}

impl FromStr for Hotkey {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(EngineError::InvalidHotkey("empty hotkey".to_string()));
        }
        let parts: Vec<&str> = s.split('+').map(|p| p.trim()).collect();
        let (last, mods) = match parts.split_last() {
            Some((last, mods)) if !last.is_empty() => (*last, mods),
            _ => return Err(EngineError::InvalidHotkey(format!("no key in '{}'", s))),
        };
        let key = if last.eq_ignore_ascii_case("space") {
            ' '
        } else {
            let mut chars = last.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => c.to_ascii_uppercase(),
                _ => return Err(EngineError::InvalidHotkey(format!("unknown key '{}'", last))),
            }
        };
        if key_from_char(key).is_none() {
            return Err(EngineError::InvalidHotkey(format!("unsupported key '{}'", last)));
        }
        let mut lowers: Vec<String> = mods.iter().map(|m| m.to_lowercase()).collect();
        lowers.sort();
        let modifier = match lowers.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
            [] => Modifier::None,
            ["ctrl"] | ["control"] => Modifier::Ctrl,
            ["alt"] => Modifier::Alt,
            ["shift"] => Modifier::Shift,
            ["ctrl", "shift"] => Modifier::CtrlShift,
            other => {
                return Err(EngineError::InvalidHotkey(format!(
                    "unknown modifier combo '{:?}'",
                    other
                )))
            }
        };
        Ok(Hotkey { modifier, key })
    }
}

/// Key bindings for the animation controls. `None` disables a binding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotkeys {
    pub pause: Option<Hotkey>,
    pub reset: Option<Hotkey>,
    pub next_wave: Option<Hotkey>,
    pub more_terms: Option<Hotkey>,
    pub fewer_terms: Option<Hotkey>,
}

impl Default for Hotkeys {
    fn default() -> Self {
        Self {
            pause: Some(Hotkey::new(Modifier::None, 'P')),
            reset: Some(Hotkey::new(Modifier::None, 'R')),
            next_wave: Some(Hotkey::new(Modifier::None, 'W')),
            more_terms: Some(Hotkey::new(Modifier::None, '=')),
            fewer_terms: Some(Hotkey::new(Modifier::None, '-')),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HotkeyName {
    Pause,
    Reset,
    NextWave,
    MoreTerms,
    FewerTerms,
}

impl HotkeyName {
    pub const ALL: [HotkeyName; 5] = [
        HotkeyName::Pause,
        HotkeyName::Reset,
        HotkeyName::NextWave,
        HotkeyName::MoreTerms,
        HotkeyName::FewerTerms,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            HotkeyName::Pause => "Pause / Resume",
            HotkeyName::Reset => "Reset",
            HotkeyName::NextWave => "Next waveform",
            HotkeyName::MoreTerms => "More terms",
            HotkeyName::FewerTerms => "Fewer terms",
        }
    }
}

pub fn get_hotkey_for_name(hotkeys: &Hotkeys, name: HotkeyName) -> Option<Hotkey> {
    match name {
        HotkeyName::Pause => hotkeys.pause,
        HotkeyName::Reset => hotkeys.reset,
        HotkeyName::NextWave => hotkeys.next_wave,
        HotkeyName::MoreTerms => hotkeys.more_terms,
        HotkeyName::FewerTerms => hotkeys.fewer_terms,
    }
}

/// "Description [Key]" when a hotkey is bound, the bare description otherwise.
pub fn format_button_tooltip(description: &str, hotkey: Option<&Hotkey>) -> String {
    match hotkey {
        Some(hk) => format!("{} [{}]", description, hk),
        None => description.to_string(),
    }
}

/// Tooltip for the control bound to `name`, e.g. "Reset [R]".
pub fn tooltip_for(hotkeys: &Hotkeys, name: HotkeyName) -> String {
    format_button_tooltip(name.description(), get_hotkey_for_name(hotkeys, name).as_ref())
}

fn key_from_char(c: char) -> Option<egui::Key> {
    match c {
        ' ' => Some(egui::Key::Space),
        c => egui::Key::from_name(&c.to_ascii_uppercase().to_string()),
    }
}

impl Hotkey {
    /// Whether the held modifiers satisfy this binding. Cmd counts as Ctrl, and
    /// an unmodified binding still fires with Shift held.
    pub fn accepts_modifiers(&self, mods: egui::Modifiers) -> bool {
        let ctrl = mods.ctrl || mods.command;
        let held = match (ctrl, mods.alt, mods.shift) {
            (false, false, false) => Modifier::None,
            (true, false, false) => Modifier::Ctrl,
            (false, true, false) => Modifier::Alt,
            (false, false, true) => Modifier::Shift,
            (true, false, true) => Modifier::CtrlShift,
            _ => return false,
        };
        held == self.modifier || (self.modifier == Modifier::None && held == Modifier::Shift)
    }

    fn pressed(&self, input: &egui::InputState) -> bool {
        key_from_char(self.key)
            .is_some_and(|key| self.accepts_modifiers(input.modifiers) && input.key_pressed(key))
    }
}

/// Apply a triggered binding to the animation state.
pub fn apply_hotkey(name: HotkeyName, state: &mut AnimationState) {
    match name {
        HotkeyName::Pause => state.toggle_pause(),
        HotkeyName::Reset => state.reset(),
        HotkeyName::NextWave => {
            state.next_wave_kind();
            log::info!("waveform switched to {}", state.params.wave_kind);
        }
        HotkeyName::MoreTerms => state.step_terms(1),
        HotkeyName::FewerTerms => state.step_terms(-1),
    }
}

/// Check all bindings against this frame's input and apply the pressed ones.
///
/// Skipped while a text field has keyboard focus so typing a term count does
/// not trigger bindings.
pub fn handle_hotkeys(hotkeys: &Hotkeys, state: &mut AnimationState, ctx: &egui::Context) {
    if ctx.wants_keyboard_input() {
        return;
    }
    let pressed: Vec<HotkeyName> = ctx.input(|i| {
        HotkeyName::ALL
            .into_iter()
            .filter(|name| get_hotkey_for_name(hotkeys, *name).is_some_and(|hk| hk.pressed(i)))
            .collect()
    });
    for name in pressed {
        apply_hotkey(name, state);
    }
}
