// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form label checker.
//!
//! Every input, select, and textarea needs an accessible name: a
//! `<label for>` matching its id, a wrapping `<label>`, or a non-blank
//! aria-label. Hidden and button-like inputs are exempt.

use crate::checkers::CategoryResult;
use crate::dom::{self, PageDocument};
use std::collections::HashSet;

/// Input types that need no visible label.
const EXEMPT_INPUT_TYPES: &[&str] = &["hidden", "submit", "button", "image"];

/// Score the document's form controls by label coverage.
pub fn check(doc: &PageDocument) -> CategoryResult {
    let controls = doc.select("input, select, textarea");
    if controls.is_empty() {
        return CategoryResult::perfect();
    }

    // Collect every label[for] target once
    let label_fors: HashSet<&str> = doc
        .select("label")
        .iter()
        .filter_map(|l| l.value().attr("for"))
        .collect();

    let mut total = 0usize;
    let mut unlabeled = 0usize;
    let mut issues = Vec::new();

    for control in controls {
        let tag = control.value().name();
        let control_type = control.value().attr("type");
        if tag == "input" {
            if let Some(t) = control_type {
                if EXEMPT_INPUT_TYPES.contains(&t) {
                    continue;
                }
            }
        }
        total += 1;

        let by_for = control
            .value()
            .attr("id")
            .is_some_and(|id| label_fors.contains(id));
        let by_wrapping = dom::has_ancestor(control, "label");
        let by_aria = control
            .value()
            .attr("aria-label")
            .is_some_and(|a| !a.trim().is_empty());

        if !(by_for || by_wrapping || by_aria) {
            unlabeled += 1;
            issues.push(format!(
                "Form control missing label: {} {}",
                control.value().attr("name").unwrap_or("unnamed"),
                control_type.unwrap_or("")
            ));
        }
    }

    if total == 0 {
        return CategoryResult::perfect();
    }

    let score = 1.0 - unlabeled as f64 / total as f64;
    CategoryResult::new(score, issues)
}
