//! Character-aware truncation helpers.

use crate::params::ELLIPSIS;

/// Cuts `text` to at most `max_chars` characters at a word boundary and
/// appends [`ELLIPSIS`]. Text that already fits is returned unchanged.
///
/// The cut lands on the last whitespace at or before the cap. A first word
/// longer than the cap is cut hard.
pub fn truncate_at_word(text: &str, max_chars: usize) -> String {
    let Some((end, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };

    let prefix = &text[..end];
    let cut = if text[end..].starts_with(char::is_whitespace) {
        prefix
    } else {
        match prefix.rfind(char::is_whitespace) {
            Some(space) if !prefix[..space].trim().is_empty() => &prefix[..space],
            _ => prefix,
        }
    };

    format!("{}{}", cut.trim_end(), ELLIPSIS)
}

/// Like [`truncate_at_word`], but the result including the ellipsis never
/// exceeds `max_chars`.
pub fn truncate_to_fit(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    truncate_at_word(text, max_chars.saturating_sub(ELLIPSIS.chars().count()))
}
