//! Markdown-subset to HTML conversion.
//!
//! The pipeline runs in a fixed order:
//!
//! 1. Normalize line endings and trim ([`fence::protect`]).
//! 2. Lift fenced code blocks out behind placeholders.
//! 3. Classify each remaining line (heading, list item, blank, text).
//! 4. Escape and apply inline spans per line, wrapping in block tags.
//! 5. Put code blocks back, escaped, inside `<pre><code>`.
//!
//! Escaping happens before any tag is generated, and inline rules only see
//! single lines of escaped text, so generated markup is never re-processed.

use crate::block::{Line, classify_line};
use crate::fence;
use crate::html;
use crate::inline::render_inline;
use crate::reading_time::reading_time;
use crate::toc::{TocItem, extract_toc};
use crate::util::slugify;

/// Everything the detail page needs from one guide body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Rendered HTML fragment.
    pub html: String,
    /// Headings for in-page navigation.
    pub toc: Vec<TocItem>,
    /// Estimated reading time in minutes.
    pub minutes: u32,
}

/// Render a guide body into HTML, table of contents and reading time.
#[must_use]
pub fn render_document(source: &str) -> RenderedDocument {
    RenderedDocument {
        toc: extract_toc(source),
        html: render_markdown(source),
        minutes: reading_time(source),
    }
}

/// Convert the supported markdown subset into an HTML fragment.
///
/// Unsupported syntax is kept as escaped literal text. Empty input renders
/// to an empty string.
///
/// # Examples
///
/// ```
/// use oa_renderer::render_markdown;
///
/// let html = render_markdown("## Step 1\n- a\n- b\n\nDone.");
/// assert_eq!(
///     html,
///     "<h2 id=\"step-1\">Step 1</h2>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<p>Done.</p>"
/// );
/// ```
#[must_use]
pub fn render_markdown(source: &str) -> String {
    let protected = fence::protect(source);
    let mut out = BlockWriter::default();

    for line in protected.text.lines() {
        match classify_line(line) {
            Line::Blank => out.close_list(),
            Line::Heading { level, text } => {
                out.close_list();
                let id = slugify(&fence::resolve_inline(text, &protected.fences));
                out.push(html::heading(level, &id, &render_inline(text)));
            }
            Line::ListItem(text) => {
                out.open_list();
                out.push(html::list_item(&render_inline(text)));
            }
            Line::Placeholder(token) => {
                out.close_list();
                out.push(token.to_owned());
            }
            Line::Text(text) => {
                out.close_list();
                out.push(html::paragraph(&render_inline(text)));
            }
        }
    }

    fence::restore(&out.finish(), &protected.fences)
}

/// Output lines plus open-list state.
#[derive(Default)]
struct BlockWriter {
    lines: Vec<String>,
    in_list: bool,
}

impl BlockWriter {
    fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    fn open_list(&mut self) {
        if !self.in_list {
            self.lines.push(html::LIST_START.to_owned());
            self.in_list = true;
        }
    }

    fn close_list(&mut self) {
        if self.in_list {
            self.lines.push(html::LIST_END.to_owned());
            self.in_list = false;
        }
    }

    fn finish(mut self) -> String {
        self.close_list();
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use regex::Regex;

    fn heading_ids(html: &str) -> Vec<String> {
        let re = Regex::new(r#"<h[23] id="([^"]*)">"#).unwrap();
        re.captures_iter(html).map(|c| c[1].to_owned()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_markdown(""), "");
        assert_eq!(render_markdown("  \n\r\n  "), "");
    }

    #[test]
    fn test_heading_list_paragraph_order() {
        let html = render_markdown("## Step 1\n- a\n- b\n\nDone.");

        assert_eq!(
            html,
            "<h2 id=\"step-1\">Step 1</h2>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<p>Done.</p>"
        );
    }

    #[test]
    fn test_h3_heading() {
        assert_eq!(
            render_markdown("### Week 1"),
            r#"<h3 id="week-1">Week 1</h3>"#
        );
    }

    #[test]
    fn test_heading_closes_list() {
        let html = render_markdown("- one\n## Next\n- two");

        assert_eq!(
            html,
            "<ul>\n<li>one</li>\n</ul>\n<h2 id=\"next\">Next</h2>\n<ul>\n<li>two</li>\n</ul>"
        );
    }

    #[test]
    fn test_blank_line_splits_lists() {
        let html = render_markdown("- one\n\n- two");

        assert_eq!(html, "<ul>\n<li>one</li>\n</ul>\n<ul>\n<li>two</li>\n</ul>");
    }

    #[test]
    fn test_paragraph_closes_list() {
        let html = render_markdown("- one\nafter");

        assert_eq!(html, "<ul>\n<li>one</li>\n</ul>\n<p>after</p>");
    }

    #[test]
    fn test_each_text_line_is_paragraph() {
        assert_eq!(render_markdown("one\ntwo"), "<p>one</p>\n<p>two</p>");
    }

    #[test]
    fn test_inline_spans_in_list_and_heading() {
        let html = render_markdown("## Use `npm`\n- **Rent** + utilities");

        assert_eq!(
            html,
            "<h2 id=\"use-npm\">Use <code>npm</code></h2>\n<ul>\n<li><strong>Rent</strong> + utilities</li>\n</ul>"
        );
    }

    #[test]
    fn test_bold_does_not_span_lines() {
        let html = render_markdown("**start\nend**");

        assert_eq!(html, "<p>**start</p>\n<p>end**</p>");
    }

    #[test]
    fn test_code_block_is_protected() {
        let html = render_markdown("Intro\n```\n## not a heading\n- not a list\n**x** <b>\n```\nOutro");

        assert_eq!(
            html,
            "<p>Intro</p>\n<pre><code>## not a heading\n- not a list\n**x** &lt;b&gt;</code></pre>\n<p>Outro</p>"
        );
    }

    #[test]
    fn test_code_block_with_language() {
        let html = render_markdown("```bash\nnpm install   \n```");

        assert_eq!(
            html,
            r#"<pre><code class="language-bash">npm install</code></pre>"#
        );
    }

    #[test]
    fn test_code_block_closes_list() {
        let html = render_markdown("- a\n```\ncode\n```\n- b");

        assert_eq!(
            html,
            "<ul>\n<li>a</li>\n</ul>\n<pre><code>code</code></pre>\n<ul>\n<li>b</li>\n</ul>"
        );
    }

    #[test]
    fn test_inline_fence_in_paragraph() {
        let html = render_markdown("Run ```make``` now");

        assert_eq!(html, "<p>Run <pre><code>make</code></pre> now</p>");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("<img src=x onerror=alert(1)> & \"q\"");

        assert_eq!(
            html,
            "<p>&lt;img src=x onerror=alert(1)&gt; &amp; &quot;q&quot;</p>"
        );
    }

    #[test]
    fn test_no_unescaped_markup_from_source() {
        let source = "## A <b> & C\n- x < y > z & w\nplain <i>text</i>\n```\n<tag>&\n```";
        let html = render_markdown(source);

        let generated = Regex::new(r"</?(h2|h3|ul|li|p|pre|code|strong)( [^>]*)?>").unwrap();
        let stripped = generated.replace_all(&html, "");
        assert!(!stripped.contains('<'), "stray '<' in {stripped}");
        assert!(!stripped.contains('>'), "stray '>' in {stripped}");
        let bare_amp = Regex::new(r"&(?:amp|lt|gt|quot|#039);").unwrap();
        assert!(!bare_amp.replace_all(&stripped, "").contains('&'));
    }

    #[test]
    fn test_unsupported_syntax_is_literal() {
        let html = render_markdown("[link](https://example.com)\n# Title\n  - nested");

        assert_eq!(
            html,
            "<p>[link](https://example.com)</p>\n<p># Title</p>\n<ul>\n<li>nested</li>\n</ul>"
        );
    }

    #[test]
    fn test_duplicate_headings_share_id() {
        let html = render_markdown("## Notes\n## Notes");

        assert_eq!(heading_ids(&html), vec!["notes", "notes"]);
    }

    #[test]
    fn test_heading_ids_agree_with_toc() {
        let source = "## Phase 1 — Research\ntext\n### \"Why this school?\"\n```\n## Fake\n```\n## Q&A <tips>";
        let html = render_markdown(source);
        let toc_ids: Vec<String> = extract_toc(source).into_iter().map(|t| t.id).collect();

        assert_eq!(heading_ids(&html), toc_ids);
        assert_eq!(toc_ids, vec!["phase-1-research", "why-this-school", "qa-tips"]);
    }

    #[test]
    fn test_heading_with_code_span_id_agrees_with_toc() {
        let source = "## Run ```make``` first\ntext";
        let html = render_markdown(source);

        assert_eq!(heading_ids(&html), vec!["run-make-first"]);
        assert_eq!(extract_toc(source)[0].id, "run-make-first");
    }

    #[test]
    fn test_placeholder_lookalike_stays_literal() {
        let html = render_markdown("Token @@CODEBLOCK_0@@ literal\n```\nsecret\n```");

        assert_eq!(
            html,
            "<p>Token @@CODEBLOCK_0@@ literal</p>\n<pre><code>secret</code></pre>"
        );
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(
            render_markdown("## Title\r\n- a\r\n"),
            "<h2 id=\"title\">Title</h2>\n<ul>\n<li>a</li>\n</ul>"
        );
    }

    #[test]
    fn test_render_document() {
        let doc = render_document("## Before travel\n- Visa docs\n### Week 1\n- SIM");

        assert_eq!(doc.toc.len(), 2);
        assert_eq!(doc.minutes, 1);
        assert!(doc.html.starts_with(r#"<h2 id="before-travel">"#));
    }
}
