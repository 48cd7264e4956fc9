// SPDX-License-Identifier: PMPL-1.0-or-later
//! The aggregator: runs every checker against one document and folds
//! the per-category results into a [`Report`].

use crate::checkers::Category;
use crate::dom::PageDocument;
use crate::fetch;
use crate::report::Report;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{error, info};

/// Run all checkers against an already-parsed document.
///
/// Categories run in their fixed order; the document is never mutated,
/// so repeat runs produce byte-identical reports.
pub fn analyze_document(url: &str, doc: &PageDocument) -> Report {
    let mut categories = BTreeMap::new();
    for category in Category::EVALUATED {
        if let Some(result) = category.check(doc) {
            categories.insert(category, result);
        }
    }
    Report::from_categories(url.to_string(), categories)
}

/// Fetch a URL and analyze it.
///
/// A fetch failure is fatal to the run: no category is evaluated and
/// the report carries a zero score with a single fetch issue. The
/// underlying error goes to the log.
pub fn analyze_url(url: &str, timeout: Duration) -> Report {
    info!("Analyzing {}", url);
    match fetch::fetch_document(url, timeout) {
        Ok(doc) => analyze_document(url, &doc),
        Err(e) => {
            error!("{}", e);
            Report::fetch_failure(url)
        }
    }
}
