//! Home, about, resources and community pages.

use std::fmt::Write;

use oa_renderer::escape_html;

use super::{info_card, layout};
use crate::route::Route;
use crate::site::Site;

/// (value, label)
const METRICS: [(&str, &str); 3] = [
    ("50+", "Focused guides for admissions + financial aid"),
    ("24", "New resources curated every month"),
    ("120", "Countries represented by our community"),
];

/// (slug, title, description)
const HOME_CARDS: [(&str, &str, &str); 3] = [
    (
        "admissions-roadmap",
        "Admissions roadmap",
        "Understand timelines, academic requirements, and how to stand out.",
    ),
    (
        "scholarship-strategy",
        "Scholarship strategy",
        "Find funding sources and craft strong scholarship submissions.",
    ),
    (
        "css-profile",
        "CSS Profile help",
        "Step-by-step help for the CSS Profile and financial aid forms.",
    ),
];

const VALUES: [(&str, &str); 3] = [
    (
        "No paywalls",
        "Every guide, resource, and checklist stays free for students worldwide.",
    ),
    (
        "Community-led",
        "Advice is shaped by students and counselors with real experience.",
    ),
    (
        "Global first",
        "We prioritize international perspectives, from documentation to culture.",
    ),
];

const RESOURCE_CATEGORIES: [(&str, &str); 6] = [
    (
        "Scholarship databases",
        "Global, regional, and university-specific funding sources.",
    ),
    (
        "Application templates",
        "Essay outlines, resume formats, and reference request scripts.",
    ),
    (
        "Financial planning",
        "Budgeting tools, cost calculators, and aid estimators.",
    ),
    (
        "Visa + logistics",
        "Checklists for visa interviews, housing, and travel planning.",
    ),
    (
        "Testing prep",
        "Guides and schedules for TOEFL, IELTS, SAT, and Duolingo.",
    ),
    (
        "Country notes",
        "Local guidance for transcripts, grading conversions, and requirements.",
    ),
];

const COMMUNITY_HIGHLIGHTS: [(&str, &str); 3] = [
    (
        "Application timelines",
        "Students share how they balanced school, exams, and deadlines.",
    ),
    (
        "Scholarship wins",
        "Transparent breakdowns of essays, interview prep, and funding results.",
    ),
    (
        "Visa + arrival",
        "Advice on interviews, travel preparation, and first-week logistics.",
    ),
];

fn page_header(html: &mut String, eyebrow: &str, title: &str, lead: &str) {
    html.push_str("<div class=\"intro\">\n");
    let _ = writeln!(html, "<p class=\"eyebrow\">{eyebrow}</p>");
    let _ = writeln!(html, "<h1>{title}</h1>");
    let _ = writeln!(html, "<p class=\"lead\">{lead}</p>");
    html.push_str("</div>\n");
}

fn card_grid(html: &mut String, cards: &[(&str, &str)]) {
    html.push_str("<div class=\"grid grid-3\">\n");
    for (title, description) in cards {
        info_card(html, title, description);
    }
    html.push_str("</div>\n");
}

/// Home page. Guide cards are only linked for slugs present in the catalog.
pub(crate) fn home(site: &Site) -> String {
    let mut html = String::with_capacity(8192);

    html.push_str("<div class=\"container page\">\n<section class=\"hero\">\n<div>\n");
    html.push_str("<span class=\"pill\">Global access, free forever</span>\n");
    html.push_str(
        "<h1>Everything international students need to apply to U.S. universities and scholarships.</h1>\n",
    );
    html.push_str(
        "<p class=\"lead\">OpenApply is a modern, collaborative platform built to remove paywalls \
         and confusion. Get clear admissions guidance, scholarship strategies, and a growing \
         community that supports every step.</p>\n",
    );
    html.push_str("<div class=\"actions\">\n");
    html.push_str("<a class=\"button\" href=\"/guides\">Explore guides</a>\n");
    html.push_str("<a class=\"button button-outline\" href=\"/resources\">Browse resources</a>\n");
    html.push_str("</div>\n</div>\n");

    html.push_str("<div class=\"metrics\">\n");
    for (value, label) in METRICS {
        let _ = writeln!(
            html,
            "<div class=\"card metric\"><p class=\"metric-value\">{value}</p><p class=\"muted\">{label}</p></div>"
        );
    }
    html.push_str("</div>\n</section>\n");

    html.push_str("<section class=\"section\">\n<div class=\"section-head\">\n<div>\n");
    html.push_str("<h2>Start with what matters most</h2>\n");
    html.push_str(
        "<p class=\"muted\">Learn the foundations, then dive into details across admissions, \
         scholarships, and required documents.</p>\n",
    );
    html.push_str("</div>\n<a href=\"/guides\">View all guides →</a>\n</div>\n");
    html.push_str("<div class=\"grid grid-3\">\n");
    for (slug, title, description) in HOME_CARDS {
        let Some(guide) = site.catalog().find_by_slug(slug) else {
            tracing::warn!(slug, "Home card points at a missing guide");
            continue;
        };
        let _ = writeln!(
            html,
            "<a class=\"card feature\" href=\"{}\">",
            Route::Guide(guide.slug.clone()).path()
        );
        let _ = writeln!(html, "<h3>{}</h3>", escape_html(title));
        let _ = writeln!(html, "<p class=\"muted\">{}</p>", escape_html(description));
        html.push_str("<span class=\"more\">Explore →</span>\n</a>\n");
    }
    html.push_str("</div>\n</section>\n");

    html.push_str("<section class=\"section card banner\">\n<div>\n");
    html.push_str("<h2>Community stories are coming</h2>\n");
    html.push_str(
        "<p class=\"muted\">We will open community posting soon. For now, explore public advice \
         and sign in to be ready to contribute your experience.</p>\n",
    );
    html.push_str("</div>\n<a class=\"button button-outline\" href=\"/community\">Sign in to post</a>\n");
    html.push_str("</section>\n</div>\n");

    layout(None, Some(&Route::Home), &html)
}

pub(crate) fn about() -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<div class=\"container page\">\n");
    page_header(
        &mut html,
        "About OpenApply",
        "Free, democratic, global access",
        "OpenApply exists to make U.S. university and scholarship applications clear and \
         equitable for every student, regardless of geography or income.",
    );
    card_grid(&mut html, &VALUES);
    html.push_str("<section class=\"section card banner\">\n<div>\n");
    html.push_str("<h2>Join the mission</h2>\n");
    html.push_str(
        "<p class=\"muted\">We are building an open platform that removes gatekeeping. If you \
         want to support the mission, start by exploring the guides and sharing feedback.</p>\n",
    );
    html.push_str("</div>\n<a href=\"/guides\">Explore guides →</a>\n</section>\n</div>\n");

    layout(Some("About"), Some(&Route::About), &html)
}

pub(crate) fn resources() -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<div class=\"container page\">\n");
    page_header(
        &mut html,
        "Resources",
        "Curated tools and templates",
        "Search a growing library of databases, checklists, and tools built for international \
         applicants. Everything is free to access.",
    );
    html.push_str("<div class=\"card banner\">\n<div>\n");
    html.push_str("<p class=\"eyebrow\">Search library</p>\n");
    html.push_str(
        "<p class=\"muted\">Library search is coming. Until then, search the guides by keyword, \
         scholarship, or document.</p>\n",
    );
    html.push_str("</div>\n<a href=\"/guides\">Need a guide? →</a>\n</div>\n");
    card_grid(&mut html, &RESOURCE_CATEGORIES);
    html.push_str("</div>\n");

    layout(Some("Resources"), Some(&Route::Resources), &html)
}

pub(crate) fn community() -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<div class=\"container page\">\n");
    page_header(
        &mut html,
        "Community",
        "Learn from each other",
        "Community posting will open soon. For now, browse a snapshot of the conversations we \
         want to build together.",
    );
    card_grid(&mut html, &COMMUNITY_HIGHLIGHTS);
    html.push_str("<section class=\"section card banner\">\n<div>\n");
    html.push_str("<h2>Ready to share your story?</h2>\n");
    html.push_str(
        "<p class=\"muted\">Sign in to get notified when community posting opens. We will keep \
         the space safe, inclusive, and globally representative.</p>\n",
    );
    html.push_str("</div>\n<span class=\"notice\">Posting opens soon</span>\n</section>\n</div>\n");

    layout(Some("Community"), Some(&Route::Community), &html)
}
