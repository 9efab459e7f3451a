//! Token classifications for syntax highlighting
//!
//! This module defines the lexical categories the highlighter assigns
//! to source text, the spans that carry them, and their default
//! terminal styles.

use super::style::{Color, Style};

/// Lexical categories recognized by the highlighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Line and block comments
    Comment,
    /// String and character literals
    String,
    /// Integer or decimal literals
    Number,
    /// Reserved words
    Keyword,
    /// Primitive and common library type names
    Type,
    /// Boolean and null literals
    Literal,
    /// Identifiers immediately followed by `(`
    Function,
    /// Preprocessor directive lines
    Preproc,
}

impl Classification {
    /// All classifications, in no particular priority
    pub const ALL: [Classification; 8] = [
        Classification::Comment,
        Classification::String,
        Classification::Number,
        Classification::Keyword,
        Classification::Type,
        Classification::Literal,
        Classification::Function,
        Classification::Preproc,
    ];

    /// Get the markup class name for this classification
    ///
    /// These names are consumed verbatim by page stylesheets.
    pub fn class_name(&self) -> &'static str {
        match self {
            Classification::Comment => "comment",
            Classification::String => "string",
            Classification::Number => "number",
            Classification::Keyword => "keyword",
            Classification::Type => "type",
            Classification::Literal => "literal",
            Classification::Function => "function",
            Classification::Preproc => "preproc",
        }
    }

    /// Get the default terminal style for this classification
    pub fn default_style(&self) -> Style {
        match self {
            Classification::Comment => Style::fg(Color::BrightBlack).with_italic(),
            Classification::String => Style::fg(Color::Green),
            Classification::Number => Style::fg(Color::Cyan),
            Classification::Keyword => Style::fg(Color::Magenta).with_bold(),
            Classification::Type => Style::fg(Color::Yellow),
            Classification::Literal => Style::fg(Color::BrightRed),
            Classification::Function => Style::fg(Color::Blue),
            Classification::Preproc => Style::fg(Color::BrightMagenta),
        }
    }
}

/// A classified range of source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    /// Category of the covered text
    pub class: Classification,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, class: Classification) -> Self {
        Self { start, end, class }
    }
}
