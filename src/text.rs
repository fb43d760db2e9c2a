use unicode_segmentation::UnicodeSegmentation;

/// Marker appended to every truncated excerpt.
pub const ELLIPSIS: &str = "...";

/// Bound `text` to at most `max` graphemes without splitting a word.
///
/// Returns the input unchanged when it already fits, and the empty string
/// for empty input. When the cut would land mid-word, it backs up to the
/// last space before the bound. If the first `max` graphemes contain no
/// usable space (a single long word, or a space only at position 0), the
/// text is cut hard at the bound instead of being discarded.
pub fn excerpt(text: &str, max: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let cut = match text.grapheme_indices(true).nth(max) {
        Some((index, _)) => index,
        None => return text.to_owned(),
    };

    let head = &text[..cut];

    match head.rfind(' ') {
        Some(space) if space > 0 => format!("{}{}", &text[..space], ELLIPSIS),
        _ => format!("{}{}", head, ELLIPSIS),
    }
}

#[cfg(test)]
mod test {
    use super::excerpt;

    #[test]
    fn short_text_is_identity() {
        assert_eq!(excerpt("The quick", 10), "The quick");
        assert_eq!(excerpt("exactly ten", 11), "exactly ten");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(excerpt("", 300), "");
        assert_eq!(excerpt("", 0), "");
    }

    #[test]
    fn cuts_at_word_boundary() {
        assert_eq!(excerpt("The quick brown fox jumps", 10), "The quick...");
    }

    #[test]
    fn never_splits_a_word() {
        let out = excerpt("alpha beta gamma delta epsilon", 17);

        assert_eq!(out, "alpha beta gamma...");
        assert!(out.ends_with("..."));
    }

    #[test]
    fn long_single_word_cuts_hard() {
        assert_eq!(
            excerpt("Donaudampfschifffahrtsgesellschaft", 10),
            "Donaudampf..."
        );
    }

    #[test]
    fn leading_space_does_not_empty_the_excerpt() {
        assert_eq!(excerpt(" abcdefghijklmnop", 10), " abcdefghi...");
    }

    #[test]
    fn multibyte_input_cuts_on_grapheme_boundaries() {
        assert_eq!(excerpt("日本語のテキストです、長い", 6), "日本語のテキ...");
    }

    #[test]
    fn space_exactly_at_the_bound() {
        assert_eq!(excerpt("ABCDEFGHIJ KLM NOP", 10), "ABCDEFGHIJ...");
    }
}
