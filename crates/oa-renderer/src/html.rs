//! HTML fragments emitted by the renderer.
//!
//! Plain semantic tags only; styling is left to the page stylesheet.

use crate::block::HeadingLevel;
use crate::escape_html;
use crate::fence::CodeFence;

pub(crate) const LIST_START: &str = "<ul>";
pub(crate) const LIST_END: &str = "</ul>";

pub(crate) fn heading(level: HeadingLevel, id: &str, inner: &str) -> String {
    let tag = level.tag();
    format!(r#"<{tag} id="{id}">{inner}</{tag}>"#)
}

pub(crate) fn list_item(inner: &str) -> String {
    format!("<li>{inner}</li>")
}

pub(crate) fn paragraph(inner: &str) -> String {
    format!("<p>{inner}</p>")
}

pub(crate) fn code_block(fence: &CodeFence) -> String {
    match &fence.language {
        Some(lang) => format!(
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            escape_html(lang),
            escape_html(&fence.code)
        ),
        None => format!("<pre><code>{}</code></pre>", escape_html(&fence.code)),
    }
}
