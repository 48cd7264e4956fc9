// SPDX-License-Identifier: PMPL-1.0-or-later
//! Semantic structure checker.
//!
//! Counts landmark elements (header, footer, nav, main, article,
//! section, aside) as a proxy for navigable page structure. Full credit
//! at three or more; a missing `<main>` costs an extra 0.3.

use crate::checkers::CategoryResult;
use crate::dom::PageDocument;

/// Score the document's landmark usage.
pub fn check(doc: &PageDocument) -> CategoryResult {
    let landmarks = doc
        .select("header, footer, nav, main, article, section, aside")
        .len();

    let mut score = (landmarks as f64 / 3.0).min(1.0);
    let mut issues = Vec::new();

    if landmarks == 0 {
        issues.push("No semantic HTML elements found".to_string());
    }

    if doc.first("main").is_none() {
        issues.push("No <main> element found".to_string());
        score -= 0.3;
    }

    CategoryResult::new(score, issues)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_landmarks_no_main() {
        let doc = PageDocument::parse(
            r#"<html><body><div class="page"><div class="content">x</div></div></body></html>"#,
        );
        let result = check(&doc);
        assert_eq!(result.score, 0.0);
        assert_eq!(
            result.issues,
            vec!["No semantic HTML elements found", "No <main> element found"]
        );
    }

    #[test]
    fn test_full_credit_at_three_landmarks() {
        let doc = PageDocument::parse(
            "<html><body><header>h</header><main>m</main><footer>f</footer></body></html>",
        );
        let result = check(&doc);
        assert_eq!(result.score, 1.0);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_partial_credit_below_three() {
        let doc = PageDocument::parse("<html><body><header>h</header><main>m</main></body></html>");
        let result = check(&doc);
        assert!((result.score - 2.0 / 3.0).abs() < 1e-9, "got {}", result.score);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_landmarks_without_main_penalized() {
        let doc = PageDocument::parse(
            "<html><body><header>h</header><nav>n</nav><footer>f</footer></body></html>",
        );
        let result = check(&doc);
        assert!((result.score - 0.7).abs() < 1e-9, "got {}", result.score);
        assert_eq!(result.issues, vec!["No <main> element found"]);
    }

    #[test]
    fn test_more_than_three_capped() {
        let doc = PageDocument::parse(
            "<html><body><header>h</header><nav>n</nav><main>m</main>\
             <article>a</article><aside>s</aside><footer>f</footer></body></html>",
        );
        let result = check(&doc);
        assert_eq!(result.score, 1.0);
    }
}
