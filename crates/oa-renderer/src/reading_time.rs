//! Reading-time estimate.

use crate::fence;

/// Reading speed used for the estimate.
pub const WORDS_PER_MINUTE: usize = 220;

/// Estimate reading time in whole minutes, never less than one.
///
/// Fenced code is not counted. Words are whitespace-separated tokens; the
/// word count divided by [`WORDS_PER_MINUTE`] is rounded half up.
///
/// # Examples
///
/// ```
/// use oa_renderer::reading_time;
///
/// assert_eq!(reading_time(""), 1);
/// assert_eq!(reading_time(&"word ".repeat(440)), 2);
/// ```
#[must_use]
pub fn reading_time(source: &str) -> u32 {
    let words = fence::strip_fences(source).split_whitespace().count();
    let minutes = (words + WORDS_PER_MINUTE / 2) / WORDS_PER_MINUTE;
    u32::try_from(minutes.max(1)).unwrap_or(u32::MAX)
}
