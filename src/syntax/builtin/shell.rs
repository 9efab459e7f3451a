//! Shell script and batch file grammar

use crate::syntax::language::{Family, Grammar};
use crate::syntax::rules::PatternRule;
use crate::syntax::tokens::Classification;

/// Create the shell-family grammar
pub fn shell_family_grammar() -> Grammar {
    let mut grammar = Grammar::new(Family::ShellFamily);

    grammar.extend([
        PatternRule::new("comment", r"#.*", Classification::Comment),
        PatternRule::new("string", r#""(?:\\.|[^"\\\n])*""#, Classification::String),
        PatternRule::new(
            "keyword",
            r"(?i-u)\b(?:set|if|else|echo|goto|call|exit|endlocal|setlocal)\b",
            Classification::Keyword,
        ),
        PatternRule::new("number", r"(?-u)\b[0-9]+\b", Classification::Number),
    ]);

    grammar
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(text: &str) -> Vec<(&str, Classification)> {
        shell_family_grammar()
            .tokenize(text)
            .into_iter()
            .map(|s| (&text[s.start..s.end], s.class))
            .collect()
    }

    #[test]
    fn test_comment_and_number() {
        assert_eq!(
            classes("price = 5 # note"),
            vec![("5", Classification::Number), ("# note", Classification::Comment)]
        );
    }

    #[test]
    fn test_comment_claims_before_strings() {
        // A `#` inside quotes still starts a comment
        assert_eq!(
            classes("echo \"a # b\""),
            vec![("echo", Classification::Keyword), ("# b\"", Classification::Comment)]
        );
    }

    #[test]
    fn test_keywords_need_word_boundaries() {
        assert!(classes("settings offset").is_empty());
        assert_eq!(classes("IF exist"), vec![("IF", Classification::Keyword)]);
    }

    #[test]
    fn test_no_decimal_numbers() {
        // `\b\d+\b` sees the two halves of 1.5 separately
        assert_eq!(
            classes("sleep 1.5"),
            vec![("1", Classification::Number), ("5", Classification::Number)]
        );
    }
}
