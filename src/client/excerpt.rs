//! Truncation of long text fields for list rendering.

use std::borrow::Cow;

/// Number of characters kept by [`excerpt`].
pub const EXCERPT_LIMIT: usize = 50;
/// Marker appended to truncated text.
pub const EXCERPT_SUFFIX: &str = " ... ";

/// Shortens `text` to [`EXCERPT_LIMIT`] characters.
pub fn excerpt(text: &str) -> Cow<'_, str> {
    excerpt_with_limit(text, EXCERPT_LIMIT)
}

/// Returns `text` untouched when it has at most `limit` characters, otherwise
/// its first `limit` characters followed by [`EXCERPT_SUFFIX`].
pub fn excerpt_with_limit(text: &str, limit: usize) -> Cow<'_, str> {
    match text.char_indices().nth(limit) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => Cow::Owned(format!("{}{EXCERPT_SUFFIX}", &text[..cut])),
    }
}
