//! Token estimation.

/// Characters assumed per token.
pub const CHARS_PER_TOKEN: usize = 4;

/// Approximate the number of language-model tokens in `text`.
///
/// Character count divided by [`CHARS_PER_TOKEN`], truncated. This is a
/// rough heuristic and does not match any real tokenizer. Counting bytes
/// instead would give larger estimates for non-ASCII text.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / CHARS_PER_TOKEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(estimate_tokens(""), 0);
    }

    #[test]
    fn test_truncates_toward_zero() {
        assert_eq!(estimate_tokens("abc"), 0);
        assert_eq!(estimate_tokens("abcd"), 1);
        assert_eq!(estimate_tokens("abcdefg"), 1);
        assert_eq!(estimate_tokens("abcdefgh"), 2);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 4 characters, 12 bytes
        assert_eq!(estimate_tokens("日本語だ"), 1);
        assert_eq!(estimate_tokens("éééé"), 1);
    }

    #[test]
    fn test_longer_text() {
        let text = "x".repeat(4_001);
        assert_eq!(estimate_tokens(&text), 1_000);
    }
}
