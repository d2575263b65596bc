//! Guide record and category types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, ParseCategoryError};

/// Closed set of guide categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuideCategory {
    Admissions,
    Scholarships,
    Essays,
    Interviews,
    Visa,
    Finance,
}

impl GuideCategory {
    /// All categories in display order.
    pub const ALL: [Self; 6] = [
        Self::Admissions,
        Self::Scholarships,
        Self::Essays,
        Self::Interviews,
        Self::Visa,
        Self::Finance,
    ];

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admissions => "Admissions",
            Self::Scholarships => "Scholarships",
            Self::Essays => "Essays",
            Self::Interviews => "Interviews",
            Self::Visa => "Visa",
            Self::Finance => "Finance",
        }
    }
}

impl fmt::Display for GuideCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GuideCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCategoryError(s.to_owned()))
    }
}

/// Category selection for listing queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Exactly this category.
    Only(GuideCategory),
}

impl CategoryFilter {
    /// Filter options in filter-bar order: All first, then every category.
    pub const OPTIONS: [Self; 7] = [
        Self::All,
        Self::Only(GuideCategory::Admissions),
        Self::Only(GuideCategory::Scholarships),
        Self::Only(GuideCategory::Essays),
        Self::Only(GuideCategory::Interviews),
        Self::Only(GuideCategory::Visa),
        Self::Only(GuideCategory::Finance),
    ];

    /// Check whether a category passes this filter.
    #[must_use]
    pub fn matches(self, category: GuideCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    /// Display label ("All" or the category label).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl From<GuideCategory> for CategoryFilter {
    fn from(category: GuideCategory) -> Self {
        Self::Only(category)
    }
}

/// A single authored guide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    /// Unique, URL-safe identifier.
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: GuideCategory,
    /// Tags in display order.
    pub tags: Vec<String>,
    /// Authored reading time in minutes (at least 1).
    pub minutes: u32,
    /// Last-modified calendar date.
    pub updated: NaiveDate,
    /// Shown in the listing's featured group.
    pub featured: bool,
    /// Markdown-subset body.
    pub content: String,
}

impl Guide {
    /// Text searched by the listing query: title, description, category
    /// label and tags, newline-separated.
    #[must_use]
    pub fn search_text(&self) -> String {
        let mut text = String::with_capacity(
            self.title.len() + self.description.len() + self.tags.len() * 12 + 16,
        );
        text.push_str(&self.title);
        text.push('\n');
        text.push_str(&self.description);
        text.push('\n');
        text.push_str(self.category.label());
        for tag in &self.tags {
            text.push('\n');
            text.push_str(tag);
        }
        text
    }

    /// Check whether the guide matches a lowercase search needle.
    pub(crate) fn matches_query(&self, needle: &str) -> bool {
        needle.is_empty() || self.search_text().to_lowercase().contains(needle)
    }

    /// Updated date formatted for display, e.g. `Dec 23, 2025`.
    #[must_use]
    pub fn updated_display(&self) -> String {
        self.updated.format("%b %-d, %Y").to_string()
    }
}

/// Guide as written in source: static strings, date not yet parsed.
#[derive(Clone, Copy, Debug)]
pub struct GuideEntry {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: GuideCategory,
    pub tags: &'static [&'static str],
    pub minutes: u32,
    /// ISO calendar date, `YYYY-MM-DD`.
    pub updated: &'static str,
    pub featured: bool,
    /// Body; surrounding whitespace is trimmed on conversion.
    pub content: &'static str,
}

impl TryFrom<&GuideEntry> for Guide {
    type Error = CatalogError;

    fn try_from(entry: &GuideEntry) -> Result<Self, Self::Error> {
        let updated = NaiveDate::parse_from_str(entry.updated, "%Y-%m-%d").map_err(|source| {
            CatalogError::InvalidDate {
                slug: entry.slug.to_owned(),
                value: entry.updated.to_owned(),
                source,
            }
        })?;

        Ok(Self {
            slug: entry.slug.to_owned(),
            title: entry.title.to_owned(),
            description: entry.description.to_owned(),
            category: entry.category,
            tags: entry.tags.iter().map(|t| (*t).to_owned()).collect(),
            minutes: entry.minutes,
            updated,
            featured: entry.featured,
            content: entry.content.trim().to_owned(),
        })
    }
}
