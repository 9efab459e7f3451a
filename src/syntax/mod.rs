//! Syntax highlighting for documentation code blocks
//!
//! Source text is classified by an ordered list of regex rules per
//! language family. Rules claim byte ranges of the original text; a
//! later rule never sees text an earlier rule claimed. The claimed
//! spans are then rendered as HTML token elements or terminal styles.

mod builtin;
mod language;
mod manager;
mod markup;
mod rules;
mod style;
mod tokens;

pub use language::{Family, Grammar};
pub use manager::{
    highlight, language_from_class, language_from_path, Highlighter, DEFAULT_LANGUAGE,
};
pub use markup::{escape_html, render_ansi, render_html};
pub use rules::{ClaimSet, PatternRule};
pub use style::{Color, Style};
pub use tokens::{Classification, Span};
