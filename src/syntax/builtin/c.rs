//! C, C++ and shader source grammar

use crate::syntax::language::{Family, Grammar};
use crate::syntax::rules::PatternRule;
use crate::syntax::tokens::Classification;

use super::common_rules;

const KEYWORDS: &str = r"(?-u)\b(?:class|struct|enum|namespace|using|typedef|template|constexpr|inline|static|virtual|override|final|public|private|protected|friend|operator|const|volatile|mutable|noexcept|return|if|else|switch|case|for|while|do|break|continue|try|catch|throw|new|delete|this|sizeof|alignof|decltype|auto)\b";

const TYPES: &str = r"(?-u)\b(?:void|bool|char|short|int|long|float|double|size_t|uint8_t|uint16_t|uint32_t|uint64_t|int8_t|int16_t|int32_t|int64_t|string|std|vector|shared_ptr|unique_ptr)\b";

const LITERALS: &str = r"(?-u)\b(?:true|false|nullptr)\b";

/// Create the C-family grammar (C, C++, GLSL and friends)
pub fn c_family_grammar() -> Grammar {
    let mut grammar = Grammar::new(Family::CFamily);

    // Preprocessor lines outrank everything, including comments on them
    if let Some(rule) = PatternRule::new("preprocessor", r"(?m)^[ \t]*#.*$", Classification::Preproc) {
        grammar.add_rule(rule);
    }

    grammar.extend(common_rules());

    grammar.extend([
        PatternRule::new("keyword", KEYWORDS, Classification::Keyword),
        PatternRule::new("type", TYPES, Classification::Type),
        PatternRule::new("literal", LITERALS, Classification::Literal),
    ]);

    // Must run after keywords so `if (` and `while (` stay keywords
    if let Some(rule) = PatternRule::new("function", r"(?-u)\b([A-Za-z_][A-Za-z0-9_]*\s*)\(", Classification::Function) {
        grammar.add_rule(rule.with_group(1));
    }

    grammar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::tokens::Span;

    fn classes(text: &str) -> Vec<(String, Classification)> {
        c_family_grammar()
            .tokenize(text)
            .into_iter()
            .map(|s: Span| (text[s.start..s.end].to_string(), s.class))
            .collect()
    }

    #[test]
    fn test_all_rules_compile() {
        assert_eq!(c_family_grammar().rules.len(), 9);
    }

    #[test]
    fn test_comment_then_declaration() {
        assert_eq!(
            classes("// hi\nint x = 5;"),
            vec![
                ("// hi".to_string(), Classification::Comment),
                ("int".to_string(), Classification::Type),
                ("5".to_string(), Classification::Number),
            ]
        );
    }

    #[test]
    fn test_preprocessor_line() {
        let found = classes("  #include <vector> // std\nreturn 0;");
        assert_eq!(found[0], ("  #include <vector> // std".to_string(), Classification::Preproc));
        assert_eq!(found[1], ("return".to_string(), Classification::Keyword));
    }

    #[test]
    fn test_keyword_before_function() {
        let found = classes("if (ready) launch(3);");
        assert_eq!(
            found,
            vec![
                ("if".to_string(), Classification::Keyword),
                ("launch".to_string(), Classification::Function),
                ("3".to_string(), Classification::Number),
            ]
        );
    }

    #[test]
    fn test_word_boundaries() {
        assert!(classes("intake newest").is_empty());
    }

    #[test]
    fn test_keyword_inside_string_untouched() {
        let found = classes(r#"auto s = "return \"if\" true";"#);
        assert_eq!(found[0], ("auto".to_string(), Classification::Keyword));
        assert_eq!(found[1], (r#""return \"if\" true""#.to_string(), Classification::String));
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_block_comment_is_lazy() {
        let found = classes("/* a */ int /* b */ x;");
        assert_eq!(
            found,
            vec![
                ("/* a */".to_string(), Classification::Comment),
                ("int".to_string(), Classification::Type),
                ("/* b */".to_string(), Classification::Comment),
            ]
        );
    }

    #[test]
    fn test_multiline_block_comment() {
        let found = classes("/* one\n two */\nfloat f;");
        assert_eq!(found[0], ("/* one\n two */".to_string(), Classification::Comment));
        assert_eq!(found[1], ("float".to_string(), Classification::Type));
    }

    #[test]
    fn test_literals_and_chars() {
        let found = classes("bool b = true; char c = '\\n'; p = nullptr;");
        assert!(found.contains(&("true".to_string(), Classification::Literal)));
        assert!(found.contains(&("'\\n'".to_string(), Classification::String)));
        assert!(found.contains(&("nullptr".to_string(), Classification::Literal)));
    }

    #[test]
    fn test_numbers_keep_simplified_shape() {
        let found = classes("x = 3.14 + 1e5 + 0x1F;");
        assert!(found.contains(&("3.14".to_string(), Classification::Number)));
        // `1e5` and `0x1F` are single words, so no digit run is bounded
        assert!(!found.iter().any(|(t, _)| t == "1" || t == "5" || t == "0"));
    }

    #[test]
    fn test_string_does_not_cross_lines() {
        let found = classes("char* a = \"open\nint b;");
        assert!(!found.iter().any(|(_, c)| *c == Classification::String));
        assert!(found.contains(&("int".to_string(), Classification::Type)));
    }

    #[test]
    fn test_line_comment_marker_inside_block_comment() {
        let found = classes("/* disabled:\n   return run(); // old\n*/\nint x;");
        assert_eq!(
            found,
            vec![
                ("/* disabled:\n   return run(); // old\n*/".to_string(), Classification::Comment),
                ("int".to_string(), Classification::Type),
            ]
        );
    }

    #[test]
    fn test_url_inside_block_comment() {
        let found = classes("/* see http://example.com */ int y;");
        assert_eq!(
            found,
            vec![
                ("/* see http://example.com */".to_string(), Classification::Comment),
                ("int".to_string(), Classification::Type),
            ]
        );
    }

    #[test]
    fn test_angle_bracket_char_literal() {
        let found = classes("char c = '<';");
        assert_eq!(found[1], ("'<'".to_string(), Classification::String));
    }

    #[test]
    fn test_crlf_stays_inside_line_spans() {
        let found = classes("#include <a>\r\n// note\r\nint x;\r\n");
        assert_eq!(found[0], ("#include <a>\r".to_string(), Classification::Preproc));
        assert_eq!(found[1], ("// note\r".to_string(), Classification::Comment));
        assert_eq!(found[2], ("int".to_string(), Classification::Type));
    }

    #[test]
    fn test_non_ascii_letters_are_word_boundaries() {
        // Only ASCII counts as a word character, so `é` does not glue
        // onto the keyword and Arabic-Indic digits are not numbers.
        let found = classes("éint x = \u{663}\u{664};");
        assert_eq!(found, vec![("int".to_string(), Classification::Type)]);
    }
}
