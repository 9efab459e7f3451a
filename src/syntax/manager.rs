//! Syntax highlighting manager
//!
//! This module provides the [`Highlighter`] that maps language tags to
//! grammars and drives tokenizing and rendering.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use super::builtin;
use super::language::{Family, Grammar};
use super::markup;
use super::tokens::Span;
use crate::error::Result;

/// Language tags that select a non-generic family
const FAMILY_TAGS: &[(&str, Family)] = &[
    ("c", Family::CFamily),
    ("h", Family::CFamily),
    ("cpp", Family::CFamily),
    ("c++", Family::CFamily),
    ("cc", Family::CFamily),
    ("cxx", Family::CFamily),
    ("hpp", Family::CFamily),
    ("glsl", Family::CFamily),
    ("hlsl", Family::CFamily),
    ("shader", Family::CFamily),
    ("vert", Family::CFamily),
    ("frag", Family::CFamily),
    ("bash", Family::ShellFamily),
    ("sh", Family::ShellFamily),
    ("shell", Family::ShellFamily),
    ("zsh", Family::ShellFamily),
    ("batch", Family::ShellFamily),
    ("bat", Family::ShellFamily),
    ("cmd", Family::ShellFamily),
];

/// Language tag used when a code block declares none
pub const DEFAULT_LANGUAGE: &str = "text";

/// Main syntax highlighter
///
/// Holds compiled grammars only; every call allocates its own spans,
/// so one instance can be shared freely between threads.
pub struct Highlighter {
    /// Compiled grammar per family
    grammars: HashMap<Family, Grammar>,
    /// Lowercase language tag to family mapping
    tag_map: HashMap<&'static str, Family>,
    /// Whether classification is enabled (disabled = escape only)
    pub enabled: bool,
}

impl Highlighter {
    /// Create a new highlighter with the built-in grammars
    pub fn new() -> Self {
        let mut highlighter = Self {
            grammars: HashMap::new(),
            tag_map: FAMILY_TAGS.iter().copied().collect(),
            enabled: true,
        };

        for grammar in builtin::all_grammars() {
            highlighter.add_grammar(grammar);
        }

        highlighter
    }

    /// Add or replace the grammar for its family
    pub fn add_grammar(&mut self, grammar: Grammar) {
        self.grammars.insert(grammar.family, grammar);
    }

    /// Resolve a language tag to its family
    ///
    /// Tags are case-insensitive. Unknown tags are not an error: they
    /// fall back to the generic family.
    pub fn family_for(&self, tag: &str) -> Family {
        let tag = tag.trim().to_ascii_lowercase();
        self.tag_map
            .get(tag.as_str())
            .copied()
            .unwrap_or(Family::Generic)
    }

    /// Classify `source` for the given language tag
    ///
    /// Returns spans sorted by start offset, pairwise disjoint. Empty
    /// when highlighting is disabled.
    pub fn tokenize(&self, source: &str, tag: &str) -> Vec<Span> {
        if !self.enabled {
            return Vec::new();
        }

        let family = self.family_for(tag);
        let spans = match self.grammars.get(&family) {
            Some(grammar) => grammar.tokenize(source),
            None => Vec::new(),
        };

        tracing::debug!(
            language = tag,
            family = family.name(),
            spans = spans.len(),
            "highlighted code block"
        );
        spans
    }

    /// Highlight `source` as HTML markup
    ///
    /// Never fails: any input yields escaped text with token elements
    /// around the classified spans.
    pub fn highlight(&self, source: &str, tag: &str) -> String {
        let spans = self.tokenize(source, tag);
        markup::render_html(source, &spans)
    }

    /// Highlight `source` for display in a terminal
    pub fn highlight_ansi(&self, source: &str, tag: &str) -> Result<String> {
        let spans = self.tokenize(source, tag);
        markup::render_ansi(source, &spans)
    }

    /// List known language tags
    pub fn list_languages(&self) -> Vec<&str> {
        let mut tags: Vec<_> = self.tag_map.keys().copied().collect();
        tags.sort();
        tags
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Highlight `source` as HTML with a shared built-in highlighter
pub fn highlight(source: &str, tag: &str) -> String {
    static SHARED: OnceLock<Highlighter> = OnceLock::new();
    SHARED.get_or_init(Highlighter::new).highlight(source, tag)
}

/// Extract the language tag from a code element's class attribute
///
/// Looks for a `language-xxx` class; blocks without one are plain text.
pub fn language_from_class(class_attr: &str) -> String {
    static LANGUAGE_CLASS: OnceLock<Option<Regex>> = OnceLock::new();
    LANGUAGE_CLASS
        .get_or_init(|| Regex::new(r"(?i)language-([a-z0-9]+)").ok())
        .as_ref()
        .and_then(|re| re.captures(class_attr))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_ascii_lowercase())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// Detect a language tag from a file name
pub fn language_from_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    FAMILY_TAGS
        .iter()
        .map(|(tag, _)| *tag)
        .find(|tag| *tag == ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_for() {
        let hl = Highlighter::new();
        assert_eq!(hl.family_for("cpp"), Family::CFamily);
        assert_eq!(hl.family_for("GLSL"), Family::CFamily);
        assert_eq!(hl.family_for("c"), Family::CFamily);
        assert_eq!(hl.family_for("bash"), Family::ShellFamily);
        assert_eq!(hl.family_for("Batch"), Family::ShellFamily);
        assert_eq!(hl.family_for("python"), Family::Generic);
        assert_eq!(hl.family_for("text"), Family::Generic);
        assert_eq!(hl.family_for(""), Family::Generic);
    }

    #[test]
    fn test_highlight_c_family() {
        let html = highlight("// hi\nint x = 5;", "cpp");
        assert_eq!(
            html,
            "<span class=\"token comment\">// hi</span>\n\
             <span class=\"token type\">int</span> x = \
             <span class=\"token number\">5</span>;"
        );
    }

    #[test]
    fn test_hash_comment_depends_on_family() {
        let shell = highlight("price = 5 # note", "shell");
        assert!(shell.contains("<span class=\"token comment\"># note</span>"));
        assert!(shell.contains("<span class=\"token number\">5</span>"));

        let generic = highlight("price = 5 # note", "text");
        assert!(!generic.contains("token comment"));
        assert_eq!(generic, "price = <span class=\"token number\">5</span> # note");
    }

    #[test]
    fn test_shell_keywords_case_insensitive() {
        let html = highlight("@ECHO off\nSetLocal\nexit /b 1", "batch");
        assert!(html.contains("<span class=\"token keyword\">ECHO</span>"));
        assert!(html.contains("<span class=\"token keyword\">SetLocal</span>"));
        assert!(html.contains("<span class=\"token keyword\">exit</span>"));
        assert!(html.contains("<span class=\"token number\">1</span>"));
    }

    #[test]
    fn test_generic_has_no_keywords() {
        let html = highlight("if (x) return true;", "python");
        assert_eq!(html, "if (x) return true;");
    }

    #[test]
    fn test_unclassified_text_is_only_escaped() {
        let text = "a < b && c > d";
        assert_eq!(highlight(text, "cpp"), "a &lt; b &amp;&amp; c &gt; d");
    }

    #[test]
    fn test_markup_in_source_is_neutralized() {
        let html = highlight("std::string s = \"<b>\";", "cpp");
        assert!(html.contains("<span class=\"token string\">\"&lt;b&gt;\"</span>"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_placeholder_lookalikes_pass_through() {
        let text = "@@RTPH_0@@ \"s\" @@RTPH_1@@";
        let html = highlight(text, "text");
        assert_eq!(
            html,
            "@@RTPH_0@@ <span class=\"token string\">\"s\"</span> @@RTPH_1@@"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(highlight("", "cpp"), "");
        assert!(Highlighter::new().tokenize("", "bash").is_empty());
    }

    #[test]
    fn test_disabled_highlighter_escapes_only() {
        let mut hl = Highlighter::new();
        hl.enabled = false;
        assert_eq!(hl.highlight("int x = 1; // <", "c"), "int x = 1; // &lt;");
    }

    #[test]
    fn test_language_from_class() {
        assert_eq!(language_from_class("language-cpp"), "cpp");
        assert_eq!(language_from_class("hljs Language-GLSL wide"), "glsl");
        assert_eq!(language_from_class(""), "text");
        assert_eq!(language_from_class("code-block"), "text");
    }

    #[test]
    fn test_language_from_path() {
        assert_eq!(language_from_path(Path::new("main.cpp")), Some("cpp"));
        assert_eq!(language_from_path(Path::new("build.SH")), Some("sh"));
        assert_eq!(language_from_path(Path::new("notes.txt")), None);
        assert_eq!(language_from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn test_list_languages_sorted() {
        let hl = Highlighter::new();
        let tags = hl.list_languages();
        assert!(tags.contains(&"glsl"));
        assert!(tags.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_angle_bracket_char_literal_is_escaped_inside_span() {
        let html = highlight("char c = '<';", "cpp");
        assert!(html.contains("<span class=\"token string\">'&lt;'</span>"));
        assert!(html.starts_with("<span class=\"token type\">char</span>"));
    }

    #[test]
    fn test_crlf_line_endings_are_preserved() {
        let source = "#include <a>\r\n// note\r\nint x;\r\n";
        let html = highlight(source, "c");
        assert_eq!(
            html,
            "<span class=\"token preproc\">#include &lt;a&gt;\r</span>\n\
             <span class=\"token comment\">// note\r</span>\n\
             <span class=\"token type\">int</span> x;\r\n"
        );
    }

    #[test]
    fn test_non_ascii_digits_are_not_numbers() {
        assert_eq!(highlight("x = \u{663}\u{664};", "text"), "x = \u{663}\u{664};");
    }
}
