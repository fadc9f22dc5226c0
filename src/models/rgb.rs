//! RGB color handling with hex parsing and blending.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color value with hex string representation.
///
/// Content files store colors as `"#RRGGBB"` strings; serde goes through
/// the hex form in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#4F46E5").unwrap();
    /// assert_eq!(color, RgbColor::new(79, 70, 229));
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.is_ascii() {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .with_context(|| format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .with_context(|| format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .with_context(|| format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// Linear blend towards `other`.
    ///
    /// `t` is clamped to `0.0..=1.0`; 0 returns `self`, 1 returns `other`.
    ///
    /// ```
    /// use folio::models::RgbColor;
    ///
    /// let black = RgbColor::new(0, 0, 0);
    /// let white = RgbColor::new(255, 255, 255);
    /// assert_eq!(black.mix(white, 0.5), RgbColor::new(128, 128, 128));
    /// ```
    #[must_use]
    pub fn mix(&self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| -> u8 {
            let a = f32::from(a);
            let b = f32::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl TryFrom<String> for RgbColor {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_variants() {
        assert_eq!(RgbColor::from_hex("#ff0000").unwrap(), RgbColor::new(255, 0, 0));
        assert_eq!(RgbColor::from_hex("00FF00").unwrap(), RgbColor::new(0, 255, 0));
        assert_eq!(RgbColor::from_hex("  #0000ff ").unwrap(), RgbColor::new(0, 0, 255));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#GG0000").is_err());
        assert!(RgbColor::from_hex("").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080FF");
    }

    #[test]
    fn test_mix_endpoints_and_clamp() {
        let a = RgbColor::new(10, 20, 30);
        let b = RgbColor::new(110, 220, 130);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
        assert_eq!(a.mix(b, -3.0), a);
        assert_eq!(a.mix(b, 7.0), b);
        assert_eq!(a.mix(b, 0.5), RgbColor::new(60, 120, 80));
    }

    #[test]
    fn test_serde_hex_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            color: RgbColor,
        }
        let parsed: Wrapper = toml::from_str("color = \"#e44d26\"").unwrap();
        assert_eq!(parsed.color, RgbColor::new(0xe4, 0x4d, 0x26));

        assert!(toml::from_str::<Wrapper>("color = \"nope\"").is_err());
    }
}
