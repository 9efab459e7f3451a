//! Grammars for syntax highlighting
//!
//! A [`Grammar`] combines a language family with the ordered pattern
//! rules used to classify that family's source text.

use super::rules::{ClaimSet, PatternRule};
use super::tokens::Span;

/// Language families sharing one rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// C, C++ and shader sources
    CFamily,
    /// Shell scripts and batch files
    ShellFamily,
    /// Everything else, including plain text
    Generic,
}

impl Family {
    /// Get a human-readable name for this family
    pub fn name(&self) -> &'static str {
        match self {
            Family::CFamily => "c-family",
            Family::ShellFamily => "shell-family",
            Family::Generic => "generic",
        }
    }
}

/// A complete grammar: family plus ordered rules
pub struct Grammar {
    /// Family this grammar classifies
    pub family: Family,
    /// Rules in priority order (earlier rules claim text first)
    pub rules: Vec<PatternRule>,
}

impl Grammar {
    /// Create a new empty grammar
    pub fn new(family: Family) -> Self {
        Self {
            family,
            rules: Vec::new(),
        }
    }

    /// Append a rule after all existing rules
    pub fn add_rule(&mut self, rule: PatternRule) {
        self.rules.push(rule);
    }

    /// Append every rule that compiled
    pub fn extend(&mut self, rules: impl IntoIterator<Item = Option<PatternRule>>) {
        self.rules.extend(rules.into_iter().flatten());
    }

    /// Classify `text`
    ///
    /// Returns spans sorted by start offset. Spans never overlap, and a
    /// span claimed by an earlier rule is invisible to later rules.
    pub fn tokenize(&self, text: &str) -> Vec<Span> {
        let mut claims = ClaimSet::new();
        for rule in &self.rules {
            let count = claims.apply(rule, text);
            if count > 0 {
                tracing::trace!(rule = %rule.name, count, "rule claimed spans");
            }
        }
        claims.into_spans()
    }
}
