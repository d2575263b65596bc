//! Line classification for the block pass.
//!
//! Every line of protected source text (fences already replaced by
//! placeholders) falls into exactly one [`Line`] kind. Both the renderer and
//! the table of contents go through [`classify_line`], which keeps their view
//! of headings identical.

use crate::fence;

/// Supported heading levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(into = "u8"))]
pub enum HeadingLevel {
    /// `## text`
    H2,
    /// `### text`
    H3,
}

impl HeadingLevel {
    /// Numeric level (2 or 3).
    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            Self::H2 => 2,
            Self::H3 => 3,
        }
    }

    /// HTML tag name for this level.
    pub(crate) fn tag(self) -> &'static str {
        match self {
            Self::H2 => "h2",
            Self::H3 => "h3",
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.as_u8()
    }
}

/// Classified source line.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// Empty or whitespace-only.
    Blank,
    /// `## text` / `### text`, text trimmed.
    Heading { level: HeadingLevel, text: &'a str },
    /// `- text`, leading indentation allowed, text trimmed.
    ListItem(&'a str),
    /// A line holding nothing but a code block placeholder.
    Placeholder(&'a str),
    /// Anything else, trimmed.
    Text(&'a str),
}

/// Classify one line of protected source.
pub(crate) fn classify_line(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }

    if let Some(text) = line.strip_prefix("###").and_then(marker_text) {
        return Line::Heading {
            level: HeadingLevel::H3,
            text,
        };
    }
    if let Some(text) = line.strip_prefix("##").and_then(marker_text) {
        return Line::Heading {
            level: HeadingLevel::H2,
            text,
        };
    }

    if let Some(text) = line.trim_start().strip_prefix('-').and_then(marker_text) {
        return Line::ListItem(text);
    }

    if fence::is_placeholder(trimmed) {
        return Line::Placeholder(trimmed);
    }

    Line::Text(trimmed)
}

/// Text following a block marker: requires separating whitespace and
/// something other than whitespace after it.
fn marker_text(rest: &str) -> Option<&str> {
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim();
    (!text.is_empty()).then_some(text)
}
