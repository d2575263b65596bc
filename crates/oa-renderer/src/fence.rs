//! Fenced code block protection.
//!
//! Fenced blocks are cut out of the source before any other processing and
//! replaced by numbered placeholder tokens, so heading, list and inline rules
//! never see code. Tokens are delimited by NUL, which [`normalize`] strips
//! from the source, so authored text can never collide with one. The renderer puts them back at the very end; the table of
//! contents and reading-time passes simply never look at them.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::html;

/// Matches a fenced block, non-greedy, across lines.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").unwrap());

/// Matches a placeholder token left by [`protect`].
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x00CODEBLOCK_(\d+)\x00").unwrap());

/// A fenced code block lifted out of the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CodeFence {
    /// Info string from the opening fence line (e.g. `bash`).
    pub(crate) language: Option<String>,
    /// Raw code, trailing whitespace trimmed.
    pub(crate) code: String,
}

impl CodeFence {
    /// Split the text captured between the fences into language and code.
    ///
    /// The first line is treated as an info string only when it is a single
    /// word and more lines follow it.
    fn parse(raw: &str) -> Self {
        let (language, code) = match raw.split_once('\n') {
            Some((first, rest)) => {
                let info = first.trim();
                if info.is_empty() {
                    (None, rest)
                } else if info.contains(char::is_whitespace) {
                    (None, raw)
                } else {
                    (Some(info.to_owned()), rest)
                }
            }
            None => (None, raw),
        };

        Self {
            language,
            code: code.trim_end().to_owned(),
        }
    }
}

/// Source text with fenced blocks replaced by placeholders.
#[derive(Debug)]
pub(crate) struct Protected {
    /// Normalized source with placeholder tokens in place of fences.
    pub(crate) text: String,
    /// Extracted blocks, indexed by placeholder number.
    pub(crate) fences: Vec<CodeFence>,
}

/// Normalize line endings, drop NUL characters and trim the document.
pub(crate) fn normalize(source: &str) -> String {
    source.replace("\r\n", "\n").replace('\0', "").trim().to_owned()
}

/// Normalize `source` and swap every fenced block for a placeholder token.
pub(crate) fn protect(source: &str) -> Protected {
    let normalized = normalize(source);
    let mut fences = Vec::new();

    let text = FENCE_RE
        .replace_all(&normalized, |caps: &Captures<'_>| {
            let token = placeholder(fences.len());
            fences.push(CodeFence::parse(&caps[1]));
            token
        })
        .into_owned();

    Protected { text, fences }
}

/// Replace every fenced block with a single space.
pub(crate) fn strip_fences(source: &str) -> Cow<'_, str> {
    FENCE_RE.replace_all(source, " ")
}

/// Substitute placeholder tokens with rendered `<pre><code>` blocks.
///
/// Tokens pointing past the end of `fences` render as nothing.
pub(crate) fn restore(html: &str, fences: &[CodeFence]) -> String {
    if fences.is_empty() {
        return html.to_owned();
    }

    PLACEHOLDER_RE
        .replace_all(html, |caps: &Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| fences.get(index))
                .map(html::code_block)
                .unwrap_or_default()
        })
        .into_owned()
}

/// Substitute placeholder tokens in a single line with the raw fence code.
///
/// Used wherever a line is read as plain text (heading ids, TOC entries), so
/// the renderer and the table of contents derive the same text.
pub(crate) fn resolve_inline<'a>(text: &'a str, fences: &[CodeFence]) -> Cow<'a, str> {
    PLACEHOLDER_RE.replace_all(text, |caps: &Captures<'_>| {
        caps[1]
            .parse::<usize>()
            .ok()
            .and_then(|index| fences.get(index))
            .map(|fence| fence.code.clone())
            .unwrap_or_default()
    })
}

/// Check whether a trimmed line is exactly one placeholder token.
pub(crate) fn is_placeholder(trimmed: &str) -> bool {
    PLACEHOLDER_RE
        .find(trimmed)
        .is_some_and(|m| m.start() == 0 && m.end() == trimmed.len())
}

fn placeholder(index: usize) -> String {
    format!("\0CODEBLOCK_{index}\0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protect_replaces_fences_in_order() {
        let protected = protect("a\n```\none\n```\nb\n```two```");

        assert_eq!(protected.text, format!("a\n{}\nb\n{}", placeholder(0), placeholder(1)));
        assert_eq!(protected.fences.len(), 2);
        assert_eq!(protected.fences[0].code, "one");
        assert_eq!(protected.fences[1].code, "two");
    }

    #[test]
    fn test_protect_normalizes_line_endings_and_trims() {
        let protected = protect("\r\n  ## Title\r\nbody\r\n\r\n");

        assert_eq!(protected.text, "## Title\nbody");
        assert!(protected.fences.is_empty());
    }

    #[test]
    fn test_protect_keeps_unclosed_fence_literal() {
        let protected = protect("before\n```\nnever closed");

        assert_eq!(protected.text, "before\n```\nnever closed");
        assert!(protected.fences.is_empty());
    }

    #[test]
    fn test_code_fence_language() {
        let fence = CodeFence::parse("bash\nnpm install\n");

        assert_eq!(fence.language.as_deref(), Some("bash"));
        assert_eq!(fence.code, "npm install");
    }

    #[test]
    fn test_code_fence_without_language_drops_leading_newline() {
        let fence = CodeFence::parse("\nline one\nline two  \n\n");

        assert_eq!(fence.language, None);
        assert_eq!(fence.code, "line one\nline two");
    }

    #[test]
    fn test_code_fence_sentence_first_line_is_code() {
        let fence = CodeFence::parse("let x = 1;\nlet y = 2;");

        assert_eq!(fence.language, None);
        assert_eq!(fence.code, "let x = 1;\nlet y = 2;");
    }

    #[test]
    fn test_code_fence_single_line() {
        let fence = CodeFence::parse("inline");

        assert_eq!(fence.language, None);
        assert_eq!(fence.code, "inline");
    }

    #[test]
    fn test_strip_fences() {
        assert_eq!(strip_fences("one ```two three``` four"), "one   four");
    }

    #[test]
    fn test_restore_unknown_placeholder_is_empty() {
        let fences = vec![CodeFence {
            language: None,
            code: "x".to_owned(),
        }];

        assert_eq!(restore(&format!("[{}]", placeholder(7)), &fences), "[]");
    }

    #[test]
    fn test_protect_drops_nul_from_source() {
        let protected = protect("a\0CODEBLOCK_0\0b\n```x```");

        assert_eq!(protected.text, format!("aCODEBLOCK_0b\n{}", placeholder(0)));
    }

    #[test]
    fn test_restore_ignores_lookalike_text() {
        let protected = protect("Token @@CODEBLOCK_0@@ literal\n```\nsecret\n```");
        let html = restore(&protected.text, &protected.fences);

        assert_eq!(html.matches("secret").count(), 1);
        assert!(html.contains("Token @@CODEBLOCK_0@@ literal"));
    }

    #[test]
    fn test_resolve_inline() {
        let protected = protect("Run ```make``` then ```test```");

        assert_eq!(resolve_inline(&protected.text, &protected.fences), "Run make then test");
        assert_eq!(resolve_inline("no tokens", &protected.fences), "no tokens");
    }

    #[test]
    fn test_is_placeholder() {
        assert!(is_placeholder(&placeholder(0)));
        assert!(is_placeholder(&placeholder(12)));
        assert!(!is_placeholder(&format!("see {}", placeholder(0))));
        assert!(!is_placeholder(&format!("{} after", placeholder(0))));
        assert!(!is_placeholder("\0CODEBLOCK_\0"));
        assert!(!is_placeholder("@@CODEBLOCK_0@@"));
    }
}
