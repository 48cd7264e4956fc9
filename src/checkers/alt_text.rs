// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text checker.
//!
//! Every `<img>` needs an alt attribute. A missing attribute is a full
//! miss; a blank alt on a non-decorative image (no role="presentation")
//! is a half miss.

use crate::checkers::CategoryResult;
use crate::dom::PageDocument;

/// Score the document's images by alt-text coverage.
pub fn check(doc: &PageDocument) -> CategoryResult {
    let images = doc.select("img");
    if images.is_empty() {
        return CategoryResult::perfect();
    }

    let total = images.len();
    let mut missing = 0usize;
    let mut empty = 0usize;
    let mut issues = Vec::new();

    for img in images {
        let src = img.value().attr("src").unwrap_or("unknown");
        match img.value().attr("alt") {
            None => {
                missing += 1;
                issues.push(format!("Image missing alt attribute: {}", src));
            }
            Some(alt) => {
                let decorative = img.value().attr("role") == Some("presentation");
                if alt.trim().is_empty() && !decorative {
                    empty += 1;
                    issues.push(format!("Image has empty alt text: {}", src));
                }
            }
        }
    }

    let score = 1.0 - (missing as f64 + empty as f64 * 0.5) / total as f64;
    CategoryResult::new(score, issues)
}
