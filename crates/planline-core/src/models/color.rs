//! RGB color values.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An opaque RGB color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Color of task bars whose resource does not exist.
    pub const FALLBACK: Color = Color::rgb(0xcc, 0xcc, 0xcc);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = String;

    /// Parses `#rrggbb` or the short `#rgb` form, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| format!("Invalid color: {s}"))?;
        if !hex.is_ascii() {
            return Err(format!("Invalid color: {s}"));
        }

        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|_| format!("Invalid color: {s}"))
        };

        match hex.len() {
            6 => Ok(Color::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
                Ok(Color::rgb(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(format!("Invalid color: {s}")),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_forms() {
        assert_eq!("#f1aad0".parse::<Color>(), Ok(Color::rgb(0xf1, 0xaa, 0xd0)));
        assert_eq!("#BCE295".parse::<Color>(), Ok(Color::rgb(0xbc, 0xe2, 0x95)));
        assert_eq!("#ccc".parse::<Color>(), Ok(Color::FALLBACK));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("f1aad0".parse::<Color>().is_err());
        assert!("#f1aad".parse::<Color>().is_err());
        assert!("#zzzzzz".parse::<Color>().is_err());
        assert!("#éé".parse::<Color>().is_err());
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Color::rgb(0x4a, 0x4a, 0x4a).to_string(), "#4a4a4a");
        assert_eq!(Color::BLACK.to_string(), "#000000");
    }
}
