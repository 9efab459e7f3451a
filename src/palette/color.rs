//! Hex colors and channel shifting

use std::fmt;
use std::str::FromStr;

use crate::error::{DocsError, Result};

/// An RGB color with optional alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha channel, present only when parsed from `#rrggbbaa`
    pub a: Option<u8>,
}

impl Color {
    /// Create an opaque color from RGB values
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    /// Create a color with an explicit alpha channel
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a: Some(a) }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" (either case)
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || DocsError::InvalidColorFormat(s.to_string());

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        // Checked up front so the slicing below stays on char boundaries
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(invalid()),
        }
    }

    /// Shift every channel toward 255, dropping alpha
    pub fn lighten(self, amount: u32) -> Self {
        let up = |v: u8| (v as u32).saturating_add(amount).min(255) as u8;
        Color::rgb(up(self.r), up(self.g), up(self.b))
    }

    /// Shift every channel toward 0, dropping alpha
    pub fn darken(self, amount: u32) -> Self {
        let down = |v: u8| (v as u32).saturating_sub(amount) as u8;
        Color::rgb(down(self.r), down(self.g), down(self.b))
    }
}

impl FromStr for Color {
    type Err = DocsError;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if let Some(a) = self.a {
            write!(f, "{:02x}", a)?;
        }
        Ok(())
    }
}

/// Lighten a hex color by `amount` per channel, returning `#rrggbb`
pub fn lighten(color: &str, amount: u32) -> Result<String> {
    Ok(Color::parse(color)?.lighten(amount).to_string())
}

/// Darken a hex color by `amount` per channel, returning `#rrggbb`
pub fn darken(color: &str, amount: u32) -> Result<String> {
    Ok(Color::parse(color)?.darken(amount).to_string())
}
