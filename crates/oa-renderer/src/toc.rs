//! Table of contents extraction.

use crate::block::{HeadingLevel, Line, classify_line};
use crate::fence;
use crate::util::slugify;

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TocItem {
    /// Anchor id, identical to the id on the rendered heading.
    pub id: String,
    /// Heading text as authored (unescaped).
    pub text: String,
    /// Heading level.
    pub level: HeadingLevel,
}

/// Collect `##` and `###` headings in document order.
///
/// Fenced code blocks are skipped; a fenced span inside a heading reads as
/// its code. Returns an empty list when the content
/// has no headings.
///
/// # Examples
///
/// ```
/// use oa_renderer::{HeadingLevel, extract_toc};
///
/// let toc = extract_toc("## Brainstorm\n- ideas\n### Structure");
/// assert_eq!(toc.len(), 2);
/// assert_eq!(toc[0].id, "brainstorm");
/// assert_eq!(toc[1].level, HeadingLevel::H3);
/// ```
#[must_use]
pub fn extract_toc(source: &str) -> Vec<TocItem> {
    let protected = fence::protect(source);

    protected
        .text
        .lines()
        .filter_map(|line| match classify_line(line) {
            Line::Heading { level, text } => {
                let text = fence::resolve_inline(text, &protected.fences);
                Some(TocItem {
                    id: slugify(&text),
                    text: text.into_owned(),
                    level,
                })
            }
            _ => None,
        })
        .collect()
}
