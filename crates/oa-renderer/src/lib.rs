//! Markdown-subset renderer for guide content.
//!
//! Guides are authored in a deliberately small subset of markdown:
//!
//! - `##` / `###` headings (rendered with anchor ids)
//! - `- ` bullet lists (one level)
//! - fenced code blocks delimited by triple backticks
//! - `**strong**` and `` `inline code` `` spans
//! - plain paragraphs, one per line
//!
//! Anything else is escaped and kept as literal text.
//!
//! # Architecture
//!
//! Rendering is a line-classifier state machine ([`render_markdown`]) plus a
//! per-line inline span pass. [`extract_toc`] and [`reading_time`] are
//! independent passes over the same source; the table of contents shares the
//! renderer's line classifier and [`slugify`], so its ids always match the
//! rendered heading ids.
//!
//! # Example
//!
//! ```
//! use oa_renderer::render_document;
//!
//! let doc = render_document("## Before travel\n- Visa docs\n- Housing confirmation");
//! assert_eq!(doc.toc[0].id, "before-travel");
//! assert_eq!(doc.minutes, 1);
//! assert!(doc.html.contains("<li>Visa docs</li>"));
//! ```

mod block;
mod fence;
mod html;
mod inline;
mod reading_time;
mod renderer;
mod toc;
mod util;

pub use block::HeadingLevel;
pub use reading_time::{WORDS_PER_MINUTE, reading_time};
pub use renderer::{RenderedDocument, render_document, render_markdown};
pub use toc::{TocItem, extract_toc};
pub use util::{escape_html, slugify};
