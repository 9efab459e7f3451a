//! Theme modes and the accent palette derived from them

use std::fmt;
use std::str::FromStr;

use super::color::Color;
use crate::error::{DocsError, Result};

/// Accent color used until the reader picks another
pub const DEFAULT_ACCENT: &str = "#0f6cbd";

/// Darkening applied to the accent for the strong variant
const STRONG_SHIFT: u32 = 18;

/// Lightening applied to the accent for the soft variant in light mode
const SOFT_LIGHT_SHIFT: u32 = 210;

/// Soft variant in dark mode: a translucent overlay, whatever the accent
const SOFT_DARK: Color = Color::rgba(15, 108, 189, 0x33);

/// Theme selection offered to the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the platform's color scheme preference
    #[default]
    System,
}

impl ThemeMode {
    /// All modes, in the order they are offered
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Stored identifier of this mode
    pub fn id(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Resolve to the effective light or dark mode
    pub fn resolve(self, prefers_dark: bool) -> ThemeMode {
        match self {
            ThemeMode::System if prefers_dark => ThemeMode::Dark,
            ThemeMode::System => ThemeMode::Light,
            mode => mode,
        }
    }

    /// Whether the effective mode is dark
    pub fn is_dark(self, prefers_dark: bool) -> bool {
        self.resolve(prefers_dark) == ThemeMode::Dark
    }
}

impl FromStr for ThemeMode {
    type Err = DocsError;

    fn from_str(s: &str) -> Result<Self> {
        ThemeMode::ALL
            .into_iter()
            .find(|mode| mode.id() == s)
            .ok_or_else(|| DocsError::UnknownTheme(s.to_string()))
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Low-emphasis variant of `color` for the active theme
///
/// Dark themes ignore the accent and use a fixed translucent overlay;
/// light themes get a pastel tint of the accent.
pub fn soft_variant(color: Color, is_dark: bool) -> Color {
    if is_dark {
        SOFT_DARK
    } else {
        color.lighten(SOFT_LIGHT_SHIFT)
    }
}

/// String form of [`soft_variant`]
pub fn derive_soft_variant(color: &str, is_dark: bool) -> Result<String> {
    Ok(soft_variant(Color::parse(color)?, is_dark).to_string())
}

/// Colors derived from one accent for one effective theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentPalette {
    pub brand: Color,
    pub brand_strong: Color,
    pub brand_soft: Color,
    pub accent: Color,
}

impl AccentPalette {
    /// Derive the palette for `accent`
    pub fn derive(accent: &str, is_dark: bool) -> Result<Self> {
        let base = Color::parse(accent)?;
        Ok(Self {
            brand: base,
            brand_strong: base.darken(STRONG_SHIFT),
            brand_soft: soft_variant(base, is_dark),
            accent: base,
        })
    }

    /// Stylesheet custom properties, in a stable order
    pub fn css_variables(&self) -> [(&'static str, String); 4] {
        [
            ("--brand", self.brand.to_string()),
            ("--brand-strong", self.brand_strong.to_string()),
            ("--brand-soft", self.brand_soft.to_string()),
            ("--accent", self.accent.to_string()),
        ]
    }

    /// Render the custom properties as a CSS declaration block body
    pub fn to_css(&self) -> String {
        self.css_variables()
            .iter()
            .map(|(name, value)| format!("{}: {};\n", name, value))
            .collect()
    }
}
