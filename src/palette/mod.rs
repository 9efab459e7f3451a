//! Accent palette derivation
//!
//! Pure numeric transforms on hex colors: lighten and darken by a
//! per-channel amount, and the theme-dependent soft variant used for
//! subtle backgrounds.

mod color;
mod named;
mod theme;

pub use color::{darken, lighten, Color};
pub use named::{named_color, swatch_for, NamedColor, NAMED_COLORS};
pub use theme::{derive_soft_variant, soft_variant, AccentPalette, ThemeMode, DEFAULT_ACCENT};
