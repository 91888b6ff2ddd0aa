//! RGB color values
//!
//! Colors are stored as 8-bit RGB and always written as lowercase `#rrggbb`,
//! which is the form used by `.gtxt` files and the color picker.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when a color string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("expected 3 or 6 hex digits: {0:?}")]
    InvalidLength(String),
    #[error("invalid hex digit in color: {0:?}")]
    InvalidDigit(String),
}

/// RGB color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create a new color from RGB values
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from "#RRGGBB" or "#RGB" hex string (case-insensitive)
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;

        // from_str_radix would accept a leading '+'
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }

        let channel = |hex: &str| {
            u8::from_str_radix(hex, 16).map_err(|_| ColorParseError::InvalidDigit(s.to_string()))
        };

        match digits.len() {
            6 => Ok(Color {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
            }),
            // Short form: each digit is doubled (#f80 == #ff8800)
            3 => Ok(Color {
                r: channel(&digits[0..1])? * 0x11,
                g: channel(&digits[1..2])? * 0x11,
                b: channel(&digits[2..3])? * 0x11,
            }),
            _ => Err(ColorParseError::InvalidLength(s.to_string())),
        }
    }

    /// Format as lowercase "#rrggbb"
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Relative luminance in 0.0..=1.0 (Rec. 709 coefficients)
    pub fn luminance(&self) -> f64 {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Black or white, whichever reads better on top of this color
    pub fn contrasting_text(&self) -> Color {
        if self.luminance() > 0.6 {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }

    /// 24-bit ANSI foreground escape for terminal output
    pub fn ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// 24-bit ANSI background escape for terminal output
    pub fn ansi_bg(&self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_long_form() {
        let color = Color::from_hex("#FBF4E6").unwrap();
        assert_eq!(color, Color::rgb(0xfb, 0xf4, 0xe6));
    }

    #[test]
    fn test_from_hex_short_form() {
        assert_eq!(Color::from_hex("#f80").unwrap(), Color::rgb(0xff, 0x88, 0x00));
    }

    #[test]
    fn test_from_hex_rejects_missing_hash() {
        assert!(matches!(
            Color::from_hex("ff0000"),
            Err(ColorParseError::MissingHash(_))
        ));
    }

    #[test]
    fn test_from_hex_rejects_bad_length_and_digits() {
        assert!(matches!(
            Color::from_hex("#ff00"),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            Color::from_hex("#gg0000"),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(Color::from_hex("#ééé").is_err());
        assert!(Color::from_hex("#+f0000").is_err());
    }

    #[test]
    fn test_to_hex_is_lowercase() {
        assert_eq!(Color::rgb(255, 0, 128).to_hex(), "#ff0080");
        assert_eq!(Color::BLACK.to_string(), "#000000");
    }

    #[test]
    fn test_contrasting_text() {
        assert_eq!(Color::WHITE.contrasting_text(), Color::BLACK);
        assert_eq!(Color::BLACK.contrasting_text(), Color::WHITE);
        // Pure red is dark enough for white text (luminance ~0.21)
        assert_eq!(Color::rgb(255, 0, 0).contrasting_text(), Color::WHITE);
        // Pure green is bright (luminance ~0.72)
        assert_eq!(Color::rgb(0, 255, 0).contrasting_text(), Color::BLACK);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Color::rgb(1, 2, 3)).unwrap();
        assert_eq!(json, "\"#010203\"");
        let back: Color = serde_json::from_str("\"#ABCDEF\"").unwrap();
        assert_eq!(back, Color::rgb(0xab, 0xcd, 0xef));
        assert!(serde_json::from_str::<Color>("\"red\"").is_err());
    }
}
