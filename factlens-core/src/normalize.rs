//! Text normalization shared by both strategies.
//!
//! The keyword scorer works on one lowercased string built from the headline
//! and body; the Bayes classifier works on the token stream produced by
//! [`tokenize`], applied identically to training rows and queries.

use regex::Regex;
use std::sync::LazyLock;

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("token pattern is valid"));

/// Join headline and body with a space and lowercase the result.
///
/// ```
/// use factlens_core::normalize::normalize;
///
/// assert_eq!(normalize("SHOCKING News", ""), "shocking news ");
/// ```
pub fn normalize(headline: &str, body: &str) -> String {
    format!("{headline} {body}").to_lowercase()
}

/// Lowercase and split into runs of letters/digits; punctuation separates.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_REGEX
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_accepts_empty_fields() {
        assert_eq!(normalize("", "This is BANNED"), " this is banned");
        assert_eq!(normalize("", ""), " ");
    }

    #[test]
    fn tokenize_strips_punctuation() {
        assert_eq!(
            tokenize("Secret conspiracy EXPOSED: the hidden-truth!!!"),
            vec!["secret", "conspiracy", "exposed", "the", "hidden", "truth"]
        );
    }

    #[test]
    fn tokenize_keeps_digits_and_unicode_letters() {
        assert_eq!(tokenize("Vote passed 7-2 in Zürich"), vec!["vote", "passed", "7", "2", "in", "zürich"]);
    }

    #[test]
    fn tokenize_empty_is_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("?!  ...").is_empty());
    }
}
