//! Built-in grammars
//!
//! One grammar per language family. The comment, string and number
//! rules shared by the C family and the generic fallback live here.

mod c;
mod generic;
mod shell;

use super::language::Grammar;
use super::rules::PatternRule;
use super::tokens::Classification;

/// Rules common to C-like sources: comments, quoted literals, numbers
///
/// Line and block comments share one rule so whichever opens first
/// wins: `//` inside a block comment stays part of the block.
///
/// Word boundaries and digits are ASCII-only.
pub(crate) fn common_rules() -> Vec<Option<PatternRule>> {
    vec![
        PatternRule::new("comment", r"//.*|/\*(?s:.*?)\*/", Classification::Comment),
        PatternRule::new("string", r#""(?:\\.|[^"\\\n])*""#, Classification::String),
        PatternRule::new("char", r"'(?:\\.|[^'\\])'", Classification::String),
        // No exponents, signs or radix prefixes: `0x1F` yields `0` only.
        PatternRule::new("number", r"(?-u)\b[0-9]+(?:\.[0-9]+)?\b", Classification::Number),
    ]
}

/// Get all built-in grammars
pub fn all_grammars() -> Vec<Grammar> {
    vec![
        c::c_family_grammar(),
        shell::shell_family_grammar(),
        generic::generic_grammar(),
    ]
}
