// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessibility checkers and the category table that binds them.
//!
//! Each checker module inspects one aspect of a parsed document and
//! returns a [`CategoryResult`]: a normalized sub-score in [0,1] plus
//! human-readable issue strings. [`Category`] enumerates the categories,
//! carries the configured weight table, and dispatches uniformly to the
//! checker functions.

pub mod alt_text;
pub mod contrast;
pub mod forms;
pub mod headings;
pub mod links;
pub mod structure;

use crate::dom::PageDocument;
use serde::{Deserialize, Serialize};

/// Audit categories, declared in evaluation order so ordered maps keyed
/// by `Category` iterate the way the aggregator ran them.
///
/// `Keyboard` has a configured weight but no checker; the aggregator
/// normalizes by the weights actually evaluated, so totals stay
/// well-defined with it absent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Images,
    Headings,
    Links,
    Forms,
    Structure,
    Contrast,
    Keyboard,
}

impl Category {
    /// Categories with a checker, in the fixed order the aggregator runs them.
    pub const EVALUATED: [Category; 6] = [
        Category::Images,
        Category::Headings,
        Category::Links,
        Category::Forms,
        Category::Structure,
        Category::Contrast,
    ];

    /// Configured weight of this category in the total score.
    ///
    /// The weights sum to 0.90, not 1.0: `Keyboard` is declared at 0.10
    /// but never scored. The aggregator divides by the evaluated weight
    /// sum rather than a constant, which keeps this intact.
    pub fn weight(self) -> f64 {
        match self {
            Category::Images => 0.15,
            Category::Headings => 0.15,
            Category::Links => 0.10,
            Category::Forms => 0.15,
            Category::Structure => 0.20,
            Category::Contrast => 0.15,
            Category::Keyboard => 0.10,
        }
    }

    /// Display label, e.g. "Images".
    pub fn label(self) -> &'static str {
        match self {
            Category::Images => "Images",
            Category::Headings => "Headings",
            Category::Links => "Links",
            Category::Forms => "Forms",
            Category::Structure => "Structure",
            Category::Contrast => "Contrast",
            Category::Keyboard => "Keyboard",
        }
    }

    /// Run this category's checker, if it has one.
    pub fn check(self, doc: &PageDocument) -> Option<CategoryResult> {
        match self {
            Category::Images => Some(alt_text::check(doc)),
            Category::Headings => Some(headings::check(doc)),
            Category::Links => Some(links::check(doc)),
            Category::Forms => Some(forms::check(doc)),
            Category::Structure => Some(structure::check(doc)),
            Category::Contrast => Some(contrast::check(doc)),
            Category::Keyboard => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}

/// Outcome of one checker run. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    /// Normalized sub-score in [0,1].
    pub score: f64,
    /// Human-readable issue descriptions, in detection order.
    pub issues: Vec<String>,
}

impl CategoryResult {
    /// Build a result, clamping the score into [0,1].
    pub fn new(score: f64, issues: Vec<String>) -> Self {
        Self {
            score: score.clamp(0.0, 1.0),
            issues,
        }
    }

    /// A perfect score with nothing to report.
    pub fn perfect() -> Self {
        Self {
            score: 1.0,
            issues: Vec::new(),
        }
    }
}
