//! Reversal Module
//!
//! Reverses text by Unicode scalar value so multi-byte characters survive intact.

// == Reverse ==
/// Returns `s` with its characters in reverse order.
///
/// Characters are swapped in place from both ends toward the center, so the
/// only allocation is the output buffer.
pub fn reverse(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    if chars.len() < 2 {
        return chars.into_iter().collect();
    }

    let (mut i, mut j) = (0, chars.len() - 1);
    while i < j {
        chars.swap(i, j);
        i += 1;
        j -= 1;
    }

    chars.into_iter().collect()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::NO_WORD_SENTINEL;

    #[test]
    fn test_reverse_ascii() {
        assert_eq!(reverse("hello"), "olleh");
    }

    #[test]
    fn test_reverse_empty() {
        assert_eq!(reverse(""), "");
    }

    #[test]
    fn test_reverse_single_char() {
        assert_eq!(reverse("a"), "a");
    }

    #[test]
    fn test_reverse_even_length() {
        assert_eq!(reverse("abcd"), "dcba");
    }

    #[test]
    fn test_reverse_multibyte() {
        assert_eq!(reverse("héllo wörld"), "dlröw olléh");
        assert_eq!(reverse("日本語"), "語本日");
        assert_eq!(reverse("a🦀b"), "b🦀a");
    }

    #[test]
    fn test_sentinel_is_reversed_phrase() {
        assert_eq!(reverse("No word detected"), NO_WORD_SENTINEL);
    }
}
