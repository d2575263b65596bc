//! Built-in guide catalog.

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::guide::{GuideCategory, GuideEntry};

/// Guides shipped with the site, in display order.
pub const GUIDES: &[GuideEntry] = &[
    GuideEntry {
        slug: "scholarship-strategy",
        title: "Scholarship strategy that actually works",
        description: "How to find scholarships, prioritize by ROI, and build a repeatable application system.",
        category: GuideCategory::Scholarships,
        tags: &["funding", "search", "system"],
        minutes: 10,
        updated: "2025-12-23",
        featured: true,
        content: r"
## Build a shortlist
- Start with big databases + your school’s list
- Filter by eligibility + deadlines

## Build a weekly pipeline
- Mon: find 5
- Tue: outline 2
- Wed: draft 1
- Thu: polish 1
- Fri: submit + track

## Track everything
- Name, deadline, requirements, status, notes
",
    },
    GuideEntry {
        slug: "admissions-roadmap",
        title: "Admissions roadmap (A–Z)",
        description: "A step-by-step plan from research → shortlist → essays → recommendations → submission.",
        category: GuideCategory::Admissions,
        tags: &["timeline", "checklist", "planning"],
        minutes: 12,
        updated: "2025-12-23",
        featured: true,
        content: r"
## Phase 1 — Research
- Pick countries + program types
- Build a 10–20 school shortlist

## Phase 2 — Requirements
- Tests, transcripts, translations
- Recommendations + deadlines

## Phase 3 — Essays
- Draft → feedback → final
",
    },
    GuideEntry {
        slug: "common-app-essay-playbook",
        title: "Common App essay playbook",
        description: "Brainstorming, structure, and revision workflow — with examples of strong narrative arcs.",
        category: GuideCategory::Essays,
        tags: &["writing", "story", "revision"],
        minutes: 15,
        updated: "2025-12-22",
        featured: false,
        content: r"
## Brainstorm
- 10 moments that changed how you think
- 5 failures + what you learned

## Structure
- Hook → tension → insight → reflection
",
    },
    GuideEntry {
        slug: "interview-prep",
        title: "Interview prep (with scripts)",
        description: r#"How to answer "Tell me about yourself", "Why this school", and tough follow-ups calmly."#,
        category: GuideCategory::Interviews,
        tags: &["practice", "scripts", "confidence"],
        minutes: 12,
        updated: "2025-12-23",
        featured: false,
        content: r#"
## "Tell me about yourself" (30–60s)
- Past → Present → Future

## "Why this school?"
- Program fit + personal fit + contribution
"#,
    },
    GuideEntry {
        slug: "visa-arrival-checklist",
        title: "Visa + arrival checklist",
        description: "Docs to prepare, common pitfalls, and first-week setup (SIM, bank, ID, campus basics).",
        category: GuideCategory::Visa,
        tags: &["F-1", "arrival", "documents"],
        minutes: 10,
        updated: "2025-12-23",
        featured: false,
        content: r"
## Before travel
- Visa docs
- Housing confirmation
- Immunizations

## Week 1
- SIM
- Bank
- Student ID
",
    },
    GuideEntry {
        slug: "budgeting-in-the-us",
        title: "Budgeting in the U.S. as an international student",
        description: "Realistic monthly budgets, rent strategies, and how to avoid money stress during school.",
        category: GuideCategory::Finance,
        tags: &["budget", "rent", "planning"],
        minutes: 9,
        updated: "2025-12-22",
        featured: false,
        content: r"
## Make a baseline budget
- Rent + utilities
- Food
- Transport
- Phone + subscriptions

## Reduce the big 2
- Rent: roommates / location tradeoffs
- Food: meal prep / campus plans
",
    },
    GuideEntry {
        slug: "css-profile",
        title: "Complete the CSS Profile with confidence",
        description: "The CSS Profile collects detailed financial information for aid decisions. Stay organized and accurate.",
        category: GuideCategory::Finance,
        tags: &["financial aid", "forms", "checklist"],
        minutes: 7,
        updated: "2025-12-21",
        featured: false,
        content: r"
## Step 1 — Gather documents
- Income statements and tax documents
- Household details for every member

## Step 2 — Fill it in
- Align **currency conversions** with one exchange rate
- Explain any unusual financial changes

## Step 3 — Review
- Go through it with a counselor or guardian before submitting
",
    },
];

/// Build the built-in catalog.
///
/// # Errors
///
/// Returns an error if a built-in guide is malformed.
pub fn builtin() -> Result<Catalog, CatalogError> {
    Catalog::from_entries(GUIDES)
}
