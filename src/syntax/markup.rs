//! Rendering classified spans
//!
//! Spans address the raw source text. Rendering walks the source once,
//! escaping each character exactly once whether or not it is inside a
//! span, so nothing in the source can be mistaken for markup.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Print, PrintStyledContent, StyledContent};

use crate::error::Result;

use super::tokens::Span;

/// Escape the markup-significant characters `&`, `<` and `>`
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

/// Render source text as HTML, wrapping each span in a token element
///
/// `spans` must be sorted and disjoint, as produced by a grammar.
pub fn render_html(source: &str, spans: &[Span]) -> String {
    let mut out = String::with_capacity(source.len() + spans.len() * 32);
    let mut pos = 0;

    for span in spans {
        push_escaped(&mut out, &source[pos..span.start]);
        out.push_str("<span class=\"token ");
        out.push_str(span.class.class_name());
        out.push_str("\">");
        push_escaped(&mut out, &source[span.start..span.end]);
        out.push_str("</span>");
        pos = span.end;
    }
    push_escaped(&mut out, &source[pos..]);

    out
}

/// Render source text with terminal escape sequences
pub fn render_ansi(source: &str, spans: &[Span]) -> Result<String> {
    let mut out: Vec<u8> = Vec::with_capacity(source.len() * 2);
    let mut pos = 0;

    for span in spans {
        queue!(out, Print(&source[pos..span.start]))?;
        let style = span.class.default_style().to_content_style();
        queue!(
            out,
            PrintStyledContent(StyledContent::new(style, &source[span.start..span.end]))
        )?;
        pos = span.end;
    }
    queue!(out, Print(&source[pos..]))?;
    out.flush()?;

    Ok(String::from_utf8_lossy(&out).into_owned())
}
