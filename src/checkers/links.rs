// SPDX-License-Identifier: PMPL-1.0-or-later
//! Descriptive link text checker.
//!
//! Link text should make sense out of context. Generic phrases
//! ("click here", "read more"), very short text, and empty links all
//! count against the score. Image-only links are left to the alt-text
//! checker.

use crate::checkers::CategoryResult;
use crate::dom::{self, PageDocument};

/// Link texts that say nothing about the destination.
const POOR_LINK_TEXTS: &[&str] = &["click here", "read more", "more", "link", "here", "this", "page"];

/// Score the document's anchor texts.
pub fn check(doc: &PageDocument) -> CategoryResult {
    let links = doc.select("a");
    if links.is_empty() {
        return CategoryResult::perfect();
    }

    let total = links.len();
    let mut poor = 0usize;
    let mut issues = Vec::new();

    for link in links {
        let text = dom::text_content(link).trim().to_lowercase();
        let href = link.value().attr("href").unwrap_or("unknown");

        // An image inside the link carries the accessible name via its alt
        if dom::has_descendant(link, "img") && text.is_empty() {
            continue;
        }

        if text.is_empty() {
            poor += 1;
            issues.push(format!("Empty link text: {}", href));
        } else if POOR_LINK_TEXTS.contains(&text.as_str()) || text.chars().count() < 3 {
            poor += 1;
            issues.push(format!("Non-descriptive link text: '{}' for {}", text, href));
        }
    }

    let score = 1.0 - poor as f64 / total as f64;
    CategoryResult::new(score, issues)
}
