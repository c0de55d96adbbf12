//! Width and grapheme helpers.
//!
//! Hosts mapping carets to display columns need per-run measurements; the
//! splitter needs character-to-byte conversion.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal columns.
#[must_use]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Iterate extended grapheme clusters.
pub fn graphemes(s: &str) -> impl Iterator<Item = &str> {
    UnicodeSegmentation::graphemes(s, true)
}

/// Number of extended grapheme clusters.
#[must_use]
pub fn grapheme_count(s: &str) -> usize {
    graphemes(s).count()
}

/// Byte position of the `offset`-th character.
///
/// `offset` must be at most the character count.
pub(crate) fn char_to_byte(s: &str, offset: usize) -> usize {
    s.char_indices().nth(offset).map_or(s.len(), |(at, _)| at)
}
