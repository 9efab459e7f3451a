//! Pattern rules and span claiming
//!
//! A grammar is an ordered list of [`PatternRule`]s. Each rule only sees
//! the parts of the source that no earlier rule has claimed, which is
//! tracked by [`ClaimSet`].

use std::ops::Range;

use regex::Regex;

use super::tokens::{Classification, Span};

/// A single pattern rule
///
/// Matches a regex pattern and assigns a classification to the match.
/// Rules are applied in grammar order; earlier rules claim text first.
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Classification to assign to matches
    pub class: Classification,
    /// Capture group that forms the span (0 = whole match)
    pub group: usize,
}

impl PatternRule {
    /// Create a new pattern rule
    pub fn new(name: &str, pattern: &str, class: Classification) -> Option<Self> {
        match Regex::new(pattern) {
            Ok(regex) => Some(Self {
                name: name.to_string(),
                pattern: regex,
                class,
                group: 0,
            }),
            Err(e) => {
                tracing::warn!("Skipping rule {}: {}", name, e);
                None
            }
        }
    }

    /// Builder: classify only the given capture group of each match
    pub fn with_group(mut self, group: usize) -> Self {
        self.group = group;
        self
    }

    /// Find all non-empty matches in `haystack`
    ///
    /// Returned ranges are shifted by `offset` so they address the full
    /// source text the haystack was sliced from.
    pub fn find_all<'a>(
        &'a self,
        haystack: &'a str,
        offset: usize,
    ) -> impl Iterator<Item = (usize, usize)> + 'a {
        self.pattern
            .captures_iter(haystack)
            .filter_map(move |caps| caps.get(self.group))
            .filter(|m| !m.is_empty())
            .map(move |m| (offset + m.start(), offset + m.end()))
    }
}

/// Spans claimed so far during one tokenize call
///
/// Spans are kept sorted by start offset and never overlap.
#[derive(Debug, Default)]
pub struct ClaimSet {
    spans: Vec<Span>,
}

impl ClaimSet {
    /// Create an empty claim set
    pub fn new() -> Self {
        Self::default()
    }

    /// Unclaimed ranges of a text of length `len`, in order
    pub fn gaps(&self, len: usize) -> Vec<Range<usize>> {
        let mut gaps = Vec::with_capacity(self.spans.len() + 1);
        let mut pos = 0;
        for span in &self.spans {
            if span.start > pos {
                gaps.push(pos..span.start);
            }
            pos = span.end;
        }
        if pos < len {
            gaps.push(pos..len);
        }
        gaps
    }

    /// Run a rule over every unclaimed gap and claim its matches
    ///
    /// Each gap is scanned as a separate haystack, so a claimed span
    /// separates the text around it: a later match can never start
    /// before a claimed span and end after it. Returns the number of
    /// new spans.
    pub fn apply(&mut self, rule: &PatternRule, text: &str) -> usize {
        let mut found = Vec::new();
        for gap in self.gaps(text.len()) {
            found.extend(
                rule.find_all(&text[gap.clone()], gap.start)
                    .map(|(start, end)| Span::new(start, end, rule.class)),
            );
        }

        let count = found.len();
        if count > 0 {
            self.spans.extend(found);
            self.spans.sort_by_key(|s| s.start);
        }
        count
    }

    /// Consume the set, returning spans sorted by start offset
    pub fn into_spans(self) -> Vec<Span> {
        self.spans
    }
}
