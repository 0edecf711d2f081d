//! Input Sanitizer — bounds and neutralizes user-supplied chat text before it
//! reaches matching or the generator.

use std::sync::LazyLock;

use regex::Regex;

/// Inputs longer than this many characters are clipped, not rejected.
pub const MAX_INPUT_CHARS: usize = 500;

static SCRIPT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?script[^>]*>").expect("Invalid script tag regex"));
static IFRAME_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?iframe[^>]*>").expect("Invalid iframe tag regex"));
static JAVASCRIPT_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)javascript:").expect("Invalid scheme regex"));

/// Trims, truncates to [`MAX_INPUT_CHARS`] and strips `<script>`/`<iframe>`
/// tags; `javascript:` becomes `blocked:`. Never fails: unusable input comes
/// back as an empty string.
pub fn sanitize(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let clipped: String = trimmed.chars().take(MAX_INPUT_CHARS).collect();

    let cleaned = SCRIPT_TAG.replace_all(&clipped, "");
    let cleaned = IFRAME_TAG.replace_all(&cleaned, "");
    let cleaned = JAVASCRIPT_SCHEME.replace_all(&cleaned, "blocked:");

    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_becomes_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   \n\t "), "");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(sanitize("  What services do you offer?  "), "What services do you offer?");
    }

    #[test]
    fn test_script_tags_removed_case_insensitively() {
        let out = sanitize("<script>alert(1)</script> hello");
        assert!(!out.to_lowercase().contains("<script"));
        assert_eq!(out, "alert(1) hello");

        let out = sanitize("<SCRIPT type=\"text/javascript\">x</ScRiPt>");
        assert_eq!(out, "x");
    }

    #[test]
    fn test_iframe_tags_removed() {
        let out = sanitize("before <iframe src=\"https://evil.example\"></IFRAME> after");
        assert_eq!(out, "before  after");
    }

    #[test]
    fn test_javascript_scheme_neutralized() {
        assert_eq!(sanitize("click JavaScript:alert(1)"), "click blocked:alert(1)");
    }

    #[test]
    fn test_long_input_truncated_to_limit() {
        let long = "a".repeat(MAX_INPUT_CHARS + 250);
        assert_eq!(sanitize(&long).chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let long = "é".repeat(MAX_INPUT_CHARS + 1);
        let out = sanitize(&long);
        assert_eq!(out.chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn test_markup_only_input_becomes_empty() {
        assert_eq!(sanitize("<script></script>"), "");
        assert_eq!(sanitize("<iframe> </iframe>"), "");
    }
}
