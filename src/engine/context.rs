//! Bounded context slicing around a token position.

/// Return the lowercased text immediately before and after `position`, each
/// side bounded to at most `window` characters and clipped (not padded) at
/// the block boundary.
///
/// `position` must be a char-boundary byte offset into `text`. The bound is
/// counted in characters, not bytes, so a window never splits a multi-byte
/// code point.
pub(crate) fn context_window(text: &str, position: usize, window: usize) -> (String, String) {
    if window == 0 {
        return (String::new(), String::new());
    }

    let start = text[..position]
        .char_indices()
        .rev()
        .nth(window - 1)
        .map_or(0, |(idx, _)| idx);
    let end = text[position..]
        .char_indices()
        .nth(window)
        .map_or(text.len(), |(idx, _)| position + idx);

    (text[start..position].to_lowercase(), text[position..end].to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_and_lowercases_both_sides() {
        let (before, after) = context_window("Revenue WAS 5 Billion", 13, 5);
        assert_eq!(before, "was 5");
        assert_eq!(after, " bill");
    }

    #[test]
    fn clips_at_block_boundaries() {
        let (before, after) = context_window("5k", 1, 1500);
        assert_eq!(before, "5");
        assert_eq!(after, "k");

        let (before, after) = context_window("abc", 0, 10);
        assert_eq!(before, "");
        assert_eq!(after, "abc");

        let (before, after) = context_window("abc", 3, 10);
        assert_eq!(before, "abc");
        assert_eq!(after, "");
    }

    #[test]
    fn window_counts_characters_not_bytes() {
        // Each 'é' is two bytes; a 2-char window must still take two chars.
        let text = "ééé5ééé";
        let (before, after) = context_window(text, 6, 2);
        assert_eq!(before, "éé");
        assert_eq!(after, "5é");
    }
}
