// SPDX-License-Identifier: Apache-2.0

//! Search term normalization and `LIKE` pattern escaping.

/// Trims a raw search term, returning `None` when nothing remains.
///
/// Empty and whitespace-only input short-circuits search handlers to
/// an empty result set without touching storage.
#[must_use]
pub fn normalize_term(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Escapes `LIKE` metacharacters so a bound term matches literally.
///
/// The escape character is `\`; queries using the result must carry
/// `ESCAPE '\'`.
#[must_use]
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_term("  kittens  "), Some("kittens"));
    }

    #[test]
    fn test_normalize_rejects_blank() {
        assert_eq!(normalize_term(""), None);
        assert_eq!(normalize_term("   "), None);
        assert_eq!(normalize_term("\t\n"), None);
    }

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_escape_like_leaves_plain_terms_alone() {
        assert_eq!(escape_like("kittens"), "kittens");
        assert_eq!(escape_like(r#"x" OR "1"="1"#), r#"x" OR "1"="1"#);
    }
}
