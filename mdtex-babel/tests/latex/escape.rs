//! Escaper properties
//!
//! Escaping must be reversible and must leave no special character bare, for any input.

use insta::assert_snapshot;
use mdtex_babel::formats::latex::escape_latex;
use proptest::prelude::*;

const SPECIALS: &[char] = &['#', '$', '%', '&', '_', '{', '}', '~', '^', '\\'];

/// Invert `escape_latex` by reading the escaped output token by token.
fn unescape(escaped: &str) -> Option<String> {
    let mut out = String::new();
    let mut rest = escaped;
    while let Some(ch) = rest.chars().next() {
        if ch != '\\' {
            if SPECIALS.contains(&ch) {
                return None;
            }
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
            continue;
        }
        let (decoded, len) = if rest.starts_with("\\textbackslash{}") {
            ('\\', "\\textbackslash{}".len())
        } else if rest.starts_with("\\~{}") {
            ('~', 4)
        } else if rest.starts_with("\\^{}") {
            ('^', 4)
        } else {
            match rest[1..].chars().next() {
                Some(c @ ('#' | '$' | '%' | '&' | '_' | '{' | '}')) => (c, 2),
                _ => return None,
            }
        };
        out.push(decoded);
        rest = &rest[len..];
    }
    Some(out)
}

#[test]
fn test_every_special_character() {
    assert_snapshot!(
        escape_latex("# $ % & _ { } ~ ^ \\"),
        @r"\# \$ \% \& \_ \{ \} \~{} \^{} \textbackslash{}"
    );
}

#[test]
fn test_unescape_rejects_bare_specials() {
    assert_eq!(unescape("a%b"), None);
    assert_eq!(unescape("a\\%b"), Some("a%b".to_string()));
}

proptest! {
    #[test]
    fn escaping_is_reversible(text in any::<String>()) {
        prop_assert_eq!(unescape(&escape_latex(&text)), Some(text));
    }

    #[test]
    fn specials_heavy_text_is_reversible(text in "[#$%&_{}~^\\\\a-z ]{0,40}") {
        prop_assert_eq!(unescape(&escape_latex(&text)), Some(text));
    }

    #[test]
    fn plain_text_is_unchanged(text in "[a-zA-Z0-9 .,;:!?()'\"\n-]{0,60}") {
        prop_assert_eq!(escape_latex(&text), text);
    }
}
