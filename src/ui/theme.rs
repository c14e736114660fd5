//! Theme preference and the color palettes derived from it.
//!
//! The preference is passed to the renderer explicitly; there is no global
//! theme state.

use super::view::Role;
use clap::ValueEnum;
use crossterm::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Header indicator for the theme toggle.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Light => "☀ light",
            Self::Dark => "☾ dark",
        }
    }
}

/// Colors used to paint a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub brand: Color,
    pub tab_active: Color,
    pub title: Color,
    pub display: Color,
    pub error: Color,
    pub digit: Color,
    pub operator: Color,
    pub function: Color,
}

impl Palette {
    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Dark => Self::dark(),
            ThemePreference::Light => Self::light(),
        }
    }

    fn dark() -> Self {
        Self {
            background: Color::Rgb { r: 24, g: 24, b: 27 },
            text: Color::Rgb { r: 244, g: 244, b: 245 },
            muted: Color::Rgb { r: 161, g: 161, b: 170 },
            border: Color::Rgb { r: 63, g: 63, b: 70 },
            brand: Color::Rgb { r: 167, g: 139, b: 250 },
            tab_active: Color::Rgb { r: 250, g: 250, b: 250 },
            title: Color::Rgb { r: 250, g: 250, b: 250 },
            display: Color::Rgb { r: 250, g: 250, b: 250 },
            // Orange/red-ish
            error: Color::Rgb { r: 248, g: 113, b: 113 },
            digit: Color::Rgb { r: 228, g: 228, b: 231 },
            operator: Color::Rgb { r: 96, g: 165, b: 250 },
            function: Color::Rgb { r: 52, g: 211, b: 153 },
        }
    }

    fn light() -> Self {
        Self {
            background: Color::Rgb { r: 255, g: 255, b: 255 },
            text: Color::Rgb { r: 24, g: 24, b: 27 },
            muted: Color::Rgb { r: 113, g: 113, b: 122 },
            border: Color::Rgb { r: 212, g: 212, b: 216 },
            brand: Color::Rgb { r: 124, g: 58, b: 237 },
            tab_active: Color::Rgb { r: 9, g: 9, b: 11 },
            title: Color::Rgb { r: 9, g: 9, b: 11 },
            display: Color::Rgb { r: 9, g: 9, b: 11 },
            error: Color::Rgb { r: 220, g: 38, b: 38 },
            digit: Color::Rgb { r: 39, g: 39, b: 42 },
            operator: Color::Rgb { r: 37, g: 99, b: 235 },
            function: Color::Rgb { r: 5, g: 150, b: 105 },
        }
    }

    /// Foreground color for a span role.
    pub fn color(&self, role: Role) -> Color {
        match role {
            Role::Text | Role::Status => self.text,
            Role::Muted | Role::Tab => self.muted,
            Role::Border => self.border,
            Role::Brand => self.brand,
            Role::TabActive => self.tab_active,
            Role::Title => self.title,
            Role::Display => self.display,
            Role::Error => self.error,
            Role::Digit => self.digit,
            Role::Operator => self.operator,
            Role::Function => self.function,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.toggled().toggled(), ThemePreference::Light);
    }

    #[test]
    fn test_palettes_differ() {
        let dark = Palette::for_preference(ThemePreference::Dark);
        let light = Palette::for_preference(ThemePreference::Light);
        assert_ne!(dark.background, light.background);
        assert_eq!(dark.color(Role::Error), dark.error);
    }
}
