//! rtdocs - code highlighting and accent palettes for documentation pages
//!
//! Two independent, stateless pieces:
//! - [`syntax`]: classifies code block text into token spans and renders
//!   them as HTML (or terminal styles) without ever losing source text
//! - [`palette`]: lightens and darkens hex colors to derive the page's
//!   accent palette for the active theme
//!
//! [`config`] stores the reader's theme and accent selection.

pub mod config;
pub mod error;
pub mod logging;
pub mod palette;
pub mod syntax;

pub use error::{DocsError, Result};
pub use palette::{darken, derive_soft_variant, lighten, AccentPalette, ThemeMode};
pub use syntax::{highlight, Highlighter};
