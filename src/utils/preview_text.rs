use std::borrow::Cow;

/// Shortens `text` to at most `max_chars` characters for log output, appending `...` when
/// anything was cut.
pub fn preview_text(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_borrowed() {
        assert!(matches!(preview_text("short", 10), Cow::Borrowed("short")));
        assert_eq!(preview_text("exact", 5), "exact");
    }

    #[test]
    fn test_long_text_is_cut_on_char_boundary() {
        assert_eq!(preview_text("héllo wörld", 4), "héll...");
    }
}
