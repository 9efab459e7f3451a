//! Fallback grammar for unknown languages and plain text

use crate::syntax::language::{Family, Grammar};

use super::common_rules;

/// Create the generic grammar: comments, quoted literals and numbers only
pub fn generic_grammar() -> Grammar {
    let mut grammar = Grammar::new(Family::Generic);
    grammar.extend(common_rules());
    grammar
}
