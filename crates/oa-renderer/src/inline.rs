//! Inline span pass: `**strong**` and `` `code` ``.
//!
//! Runs on one already-escaped line at a time, so spans never cross lines.

use std::sync::LazyLock;

use regex::Regex;

static STRONG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+?)`").unwrap());

/// Escape `text` and apply inline spans.
pub(crate) fn render_inline(text: &str) -> String {
    let escaped = crate::escape_html(text);
    let strong = STRONG_RE.replace_all(&escaped, "<strong>$1</strong>");
    CODE_RE.replace_all(&strong, "<code>$1</code>").into_owned()
}
