//! Text helpers shared by the renderer and the table of contents.

/// Escape HTML special characters.
///
/// Ampersands are handled in the same pass as the other characters, so entities
/// produced here are never escaped a second time.
///
/// # Examples
///
/// ```
/// use oa_renderer::escape_html;
///
/// assert_eq!(escape_html("<b>Q&A</b>"), "&lt;b&gt;Q&amp;A&lt;/b&gt;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(c),
        }
    }
    result
}

/// Convert heading text to an anchor id.
///
/// Lowercases and trims the text, drops everything except ASCII word
/// characters, whitespace and hyphens, then joins the remaining words with
/// single hyphens. The result never starts or ends with a hyphen.
///
/// Identical headings produce identical ids; anchors are not deduplicated.
///
/// # Examples
///
/// ```
/// use oa_renderer::slugify;
///
/// assert_eq!(slugify("Phase 1 — Research"), "phase-1-research");
/// assert_eq!(slugify("\"Why this school?\""), "why-this-school");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_dash = false;

    for c in lowered.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#039;s");
    }

    #[test]
    fn test_escape_html_does_not_double_escape() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(escape_html("<&>"), "&lt;&amp;&gt;");
    }

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("Past → Present → Future"), "Past → Present → Future");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("What's New?"), "whats-new");
        assert_eq!(slugify("  Spaces  "), "spaces");
        assert_eq!(slugify("Multiple   Spaces"), "multiple-spaces");
        assert_eq!(slugify("kebab--case"), "kebab-case");
        assert_eq!(slugify("snake_case"), "snake_case");
    }

    #[test]
    fn test_slugify_strips_punctuation_between_words() {
        let slug = slugify("Phase 1 — Research");
        assert_eq!(slug, "phase-1-research");
        assert!(!slug.starts_with('-'));
        assert!(!slug.ends_with('-'));
        assert_eq!(slug, slug.to_lowercase());
    }

    #[test]
    fn test_slugify_no_edge_hyphens() {
        assert_eq!(slugify("— Intro —"), "intro");
        assert_eq!(slugify("-lead and trail-"), "lead-and-trail");
    }

    #[test]
    fn test_slugify_quotes_and_parens() {
        assert_eq!(
            slugify("\"Tell me about yourself\" (30–60s)"),
            "tell-me-about-yourself-3060s"
        );
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("???"), "");
    }
}
