use std::{fmt, str::FromStr};

use crate::foundation::error::{DiagmockError, DiagmockResult};

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB`, `#RRGGBBAA` (the `#` is optional) or a named color.
    pub fn parse(s: &str) -> DiagmockResult<Self> {
        let s = s.trim();
        if let Some(c) = named(s) {
            return Ok(c);
        }
        parse_hex(s).map_err(DiagmockError::color)
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    pub(crate) fn to_cpu(self) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = DiagmockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if !digits.is_ascii() {
        return Err(format!("unknown color \"{s}\""));
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    match digits.len() {
        6 => Ok(Color::rgb(
            hex_byte(&digits[0..2])?,
            hex_byte(&digits[2..4])?,
            hex_byte(&digits[4..6])?,
        )),
        8 => Ok(Color::rgba(
            hex_byte(&digits[0..2])?,
            hex_byte(&digits[2..4])?,
            hex_byte(&digits[4..6])?,
            hex_byte(&digits[6..8])?,
        )),
        _ => Err(format!(
            "unknown color \"{s}\" (expected #RRGGBB, #RRGGBBAA or a color name)"
        )),
    }
}

fn named(s: &str) -> Option<Color> {
    let c = match s.to_ascii_lowercase().as_str() {
        "white" => Color::WHITE,
        "black" => Color::BLACK,
        "red" => Color::rgb(0xff, 0x00, 0x00),
        "green" => Color::rgb(0x00, 0x80, 0x00),
        "lime" => Color::rgb(0x00, 0xff, 0x00),
        "blue" => Color::rgb(0x00, 0x00, 0xff),
        "navy" => Color::rgb(0x00, 0x00, 0x80),
        "teal" => Color::rgb(0x00, 0x80, 0x80),
        "aqua" | "cyan" => Color::rgb(0x00, 0xff, 0xff),
        "fuchsia" | "magenta" => Color::rgb(0xff, 0x00, 0xff),
        "purple" => Color::rgb(0x80, 0x00, 0x80),
        "maroon" => Color::rgb(0x80, 0x00, 0x00),
        "olive" => Color::rgb(0x80, 0x80, 0x00),
        "yellow" => Color::rgb(0xff, 0xff, 0x00),
        "orange" => Color::rgb(0xff, 0xa5, 0x00),
        "silver" => Color::rgb(0xc0, 0xc0, 0xc0),
        "gray" | "grey" => Color::rgb(0x80, 0x80, 0x80),
        "lightgray" | "lightgrey" => Color::rgb(0xd3, 0xd3, 0xd3),
        "darkgray" | "darkgrey" => Color::rgb(0xa9, 0xa9, 0xa9),
        "dimgray" | "dimgrey" => Color::rgb(0x69, 0x69, 0x69),
        "gainsboro" => Color::rgb(0xdc, 0xdc, 0xdc),
        "whitesmoke" => Color::rgb(0xf5, 0xf5, 0xf5),
        "steelblue" => Color::rgb(0x46, 0x82, 0xb4),
        "royalblue" => Color::rgb(0x41, 0x69, 0xe1),
        "transparent" => Color::rgba(0, 0, 0, 0),
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
