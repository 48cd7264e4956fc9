// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heading structure checker.
//!
//! Pages should carry exactly one h1 and never skip heading levels
//! (h2 followed by h4). No headings at all scores zero.

use crate::checkers::CategoryResult;
use crate::dom::PageDocument;

/// Score the document's heading hierarchy.
pub fn check(doc: &PageDocument) -> CategoryResult {
    let levels: Vec<u8> = doc
        .select("h1, h2, h3, h4, h5, h6")
        .iter()
        .filter_map(|el| {
            el.value()
                .name()
                .strip_prefix('h')
                .and_then(|n| n.parse::<u8>().ok())
        })
        .collect();

    if levels.is_empty() {
        return CategoryResult::new(0.0, vec!["No headings found on page".to_string()]);
    }

    let mut issues = Vec::new();

    let h1_count = levels.iter().filter(|&&l| l == 1).count();
    let h1_penalty = match h1_count {
        0 => {
            issues.push("No H1 heading found".to_string());
            0.5
        }
        1 => 0.0,
        n => {
            issues.push(format!("Multiple H1 headings found ({})", n));
            0.3
        }
    };

    // Walk in document order; the first heading sets the baseline and is
    // never itself a skip.
    let mut prev_level = 0u8;
    let mut skips = 0usize;
    for &level in &levels {
        if prev_level > 0 && level > prev_level + 1 {
            skips += 1;
            issues.push(format!(
                "Heading level skip from h{} to h{}",
                prev_level, level
            ));
        }
        prev_level = level;
    }
    let skip_penalty = (skips as f64 * 0.1).min(0.5);

    CategoryResult::new(1.0 - h1_penalty - skip_penalty, issues)
}
