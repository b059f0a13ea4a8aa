//! RGB colors and the named brand palette.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An sRGB color triple.
///
/// Serialized as a `#RRGGBB` hex string so theme files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Create a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Hex form without the leading `#` (e.g. `0070AD`), as used by
    /// cell shading attributes.
    pub fn hex_digits(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    /// CSS hex form (e.g. `#0070AD`).
    pub fn to_hex(&self) -> String {
        format!("#{}", self.hex_digits())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(Error::Theme(format!("invalid color '{}'", s)));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| Error::Theme(format!("invalid color '{}'", s)))
        };
        Ok(Self(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

/// Named role of a palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    Primary,
    Secondary,
    Dark,
    Text,
    Light,
    Medium,
    White,
    Accent,
    Success,
    Warning,
    HeaderGray,
}

/// The brand palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Primary brand blue (headings, table headers)
    pub primary: Rgb,
    /// Secondary teal (code and quote accents)
    pub secondary: Rgb,
    /// Dark blue (second-level headings)
    pub dark: Rgb,
    /// Body text gray
    pub text: Rgb,
    /// Light background gray (striped rows, code)
    pub light: Rgb,
    /// Medium gray (borders, TOC leaders)
    pub medium: Rgb,
    /// Inverse text on brand backgrounds
    pub white: Rgb,
    pub accent: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    /// Section header gray used by SOW documents
    pub header_gray: Rgb,
}

impl Palette {
    /// Look up a color by role.
    pub fn get(&self, role: ColorRole) -> Rgb {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::Dark => self.dark,
            ColorRole::Text => self.text,
            ColorRole::Light => self.light,
            ColorRole::Medium => self.medium,
            ColorRole::White => self.white,
            ColorRole::Accent => self.accent,
            ColorRole::Success => self.success,
            ColorRole::Warning => self.warning,
            ColorRole::HeaderGray => self.header_gray,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Rgb::new(0, 112, 173),
            secondary: Rgb::new(18, 171, 219),
            dark: Rgb::new(0, 51, 161),
            text: Rgb::new(51, 51, 51),
            light: Rgb::new(245, 245, 245),
            medium: Rgb::new(128, 128, 128),
            white: Rgb::new(255, 255, 255),
            accent: Rgb::new(255, 102, 0),
            success: Rgb::new(76, 175, 80),
            warning: Rgb::new(255, 193, 7),
            header_gray: Rgb::new(68, 68, 68),
        }
    }
}
