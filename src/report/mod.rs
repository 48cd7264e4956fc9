// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report assembly and rendering.
//!
//! Supports multiple output formats:
//! - Text: markdown summary with category scores and the top issues
//! - JSON: the full report for programmatic consumption
//! - CSV: issue listing keyed by category

use crate::checkers::{Category, CategoryResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How many issues the text summary lists before truncating.
const TOP_ISSUES: usize = 10;

/// The complete output of one analysis run. Write-once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The analyzed URL (or file path).
    pub url: String,
    /// Per-category results, iterated in evaluation order.
    pub categories: BTreeMap<Category, CategoryResult>,
    /// Weighted total, 0-100.
    pub total_score: u32,
    /// All category issues, concatenated in category order.
    pub issues: Vec<String>,
}

impl Report {
    /// Fold per-category results into a report.
    ///
    /// The weighted sum is normalized by the weights of the categories
    /// actually evaluated, so a missing category neither zeroes nor
    /// inflates the total.
    pub fn from_categories(
        url: String,
        categories: BTreeMap<Category, CategoryResult>,
    ) -> Self {
        let mut weighted = 0.0;
        let mut weight_sum = 0.0;
        for (category, result) in &categories {
            weighted += result.score * category.weight();
            weight_sum += category.weight();
        }
        let normalized = if weight_sum > 0.0 {
            weighted / weight_sum
        } else {
            0.0
        };
        let total_score = (normalized * 100.0).round() as u32;

        let issues = categories
            .values()
            .flat_map(|r| r.issues.iter().cloned())
            .collect();

        Self {
            url,
            categories,
            total_score,
            issues,
        }
    }

    /// The report for a run whose fetch failed: zero score, no
    /// categories, one issue.
    pub fn fetch_failure(url: &str) -> Self {
        Self {
            url: url.to_string(),
            categories: BTreeMap::new(),
            total_score: 0,
            issues: vec!["Failed to fetch URL".to_string()],
        }
    }

    /// Qualitative band for the total score.
    pub fn rating(&self) -> Rating {
        Rating::from_score(self.total_score)
    }
}

/// Qualitative rating bands over the 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl Rating {
    /// Map a total score to its band. Thresholds are inclusive lower
    /// bounds; the bands cover all of [0,100].
    pub fn from_score(score: u32) -> Self {
        match score {
            90..=u32::MAX => Rating::Excellent,
            80..=89 => Rating::Good,
            70..=79 => Rating::Fair,
            50..=69 => Rating::Poor,
            _ => Rating::VeryPoor,
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Excellent => write!(f, "Excellent"),
            Rating::Good => write!(f, "Good"),
            Rating::Fair => write!(f, "Fair"),
            Rating::Poor => write!(f, "Poor"),
            Rating::VeryPoor => write!(f, "Very Poor"),
        }
    }
}

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Markdown summary
    Text,
    /// Structured JSON
    Json,
    /// Issue table, one row per issue
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Render a report in the requested format.
pub fn render(report: &Report, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => render_json(report),
        OutputFormat::Csv => render_csv(report),
    }
}

/// Markdown summary: overall score, category scores, top issues.
fn render_text(report: &Report) -> String {
    let mut output = String::new();

    output.push_str(&format!("## Accessibility Report for {}\n\n", report.url));
    output.push_str(&format!(
        "### Overall Score: {}/100 - {}\n\n",
        report.total_score,
        report.rating()
    ));

    output.push_str("### Category Scores:\n\n");
    for (category, result) in &report.categories {
        let category_score = (result.score * 100.0) as u32;
        output.push_str(&format!("- **{}**: {}/100\n", category.label(), category_score));
    }

    output.push_str("\n### Top Issues:\n\n");
    for (i, issue) in report.issues.iter().take(TOP_ISSUES).enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, issue));
    }

    if report.issues.len() > TOP_ISSUES {
        output.push_str(&format!(
            "\n...and {} more issues.\n",
            report.issues.len() - TOP_ISSUES
        ));
    }

    output
}

/// Full report as pretty JSON.
fn render_json(report: &Report) -> String {
    serde_json::to_string_pretty(report)
        .unwrap_or_else(|e| format!("{{\"error\": \"Failed to serialize report: {}\"}}", e))
}

/// One row per issue, keyed by category.
fn render_csv(report: &Report) -> String {
    let mut output = String::from("Category,Issue\n");
    for (category, result) in &report.categories {
        for issue in &result.issues {
            output.push_str(&format!(
                "{},{}\n",
                csv_field(category.label()),
                csv_field(issue)
            ));
        }
    }
    output
}

/// Quote a CSV field when it needs it.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
