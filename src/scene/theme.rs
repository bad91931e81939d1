use std::str::FromStr;

use crate::foundation::{
    color::Color,
    error::{DiagmockError, DiagmockResult},
};

/// Named palette selector. The only styling parameter exposed to callers.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors derived from a [`Theme`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Body text.
    pub text: Color,
    /// Header band, default button fill, default rectangle outline.
    pub accent: Color,
    /// Default button outline.
    pub accent_dark: Color,
    /// Default rectangle fill and even menu rows.
    pub secondary_bg: Color,
    /// Title and button labels, drawn over the accent color.
    pub inverse_text: Color,
}

impl Theme {
    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                text: Color::rgb(0x33, 0x33, 0x33),
                accent: Color::rgb(0x2c, 0x7b, 0xe5),
                accent_dark: Color::rgb(0x1a, 0x5c, 0xb0),
                secondary_bg: Color::rgb(0xe9, 0xec, 0xef),
                inverse_text: Color::WHITE,
            },
            Self::Dark => Palette {
                text: Color::WHITE,
                accent: Color::rgb(0x42, 0x87, 0xf5),
                accent_dark: Color::rgb(0x27, 0x5f, 0xb8),
                secondary_bg: Color::rgb(0x2c, 0x3e, 0x50),
                inverse_text: Color::WHITE,
            },
        }
    }

    /// Canvas fill used when a scene does not name its own background.
    pub fn default_background(self) -> Color {
        match self {
            Self::Light => Color::rgb(0xf0, 0xf2, 0xf6),
            Self::Dark => Color::rgb(0x1b, 0x1f, 0x27),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = DiagmockError;

    fn from_str(s: &str) -> DiagmockResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(DiagmockError::Other(anyhow::anyhow!(
                "unknown theme '{other}' (expected 'light' or 'dark')"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/theme.rs"]
mod tests;
