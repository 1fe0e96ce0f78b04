//! Preferences the surrounding app feeds back into input handling
//!
//! Camera state lives outside the core, but the mapping from keys to steering
//! depends on it: overhead cameras send absolute cardinals, a first-person
//! camera sends turns relative to the snake's heading. `ControlScheme` names
//! that choice so the app can store it alongside its camera mode.

use serde::{Deserialize, Serialize};

/// How directional input is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ControlScheme {
    /// Keys map straight to grid cardinals (third-person/top-down/free cameras)
    #[default]
    Absolute,
    /// Keys turn left/right relative to the snake's heading (first-person)
    HeadingRelative,
}

impl ControlScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlScheme::Absolute => "Absolute",
            ControlScheme::HeadingRelative => "HeadingRelative",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "absolute" | "abs" => Some(ControlScheme::Absolute),
            "headingrelative" | "relative" | "rel" => Some(ControlScheme::HeadingRelative),
            _ => None,
        }
    }

    /// Whether steering must be resolved against the snake's heading
    pub fn is_relative(&self) -> bool {
        matches!(self, ControlScheme::HeadingRelative)
    }
}

/// App-facing preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Active input mapping
    pub control: ControlScheme,
    /// Show the frame counter in the HUD
    pub show_fps: bool,
    /// Minimize pulsing/flashing presentation effects
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            control: ControlScheme::Absolute,
            show_fps: false,
            reduced_motion: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_scheme_round_trip() {
        for scheme in [ControlScheme::Absolute, ControlScheme::HeadingRelative] {
            assert_eq!(ControlScheme::from_str(scheme.as_str()), Some(scheme));
        }
        assert_eq!(ControlScheme::from_str("rel"), Some(ControlScheme::HeadingRelative));
        assert_eq!(ControlScheme::from_str("mouse"), None);
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.control, ControlScheme::Absolute);
        assert!(!settings.control.is_relative());
    }
}
