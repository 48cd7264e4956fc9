// SPDX-License-Identifier: PMPL-1.0-or-later
//! Web4All - Heuristic Web Accessibility Checker
//!
//! Fetches a web page, evaluates it against a fixed set of heuristic
//! accessibility rules, and produces a weighted 0-100 score plus a list
//! of human-readable issues.
//!
//! ## Checkers
//!
//! - **Images**: alt attribute presence and non-blank alt text
//! - **Headings**: single h1, no skipped heading levels
//! - **Links**: descriptive link text (no "click here")
//! - **Forms**: every control labeled via label[for], a wrapping label, or aria-label
//! - **Structure**: semantic landmark elements and a main element
//! - **Contrast**: near-white/near-black inline-style colors (heuristic only)
//!
//! Each checker is a pure function from a parsed document to a sub-score
//! in [0,1] and its issues; the aggregator combines them through a fixed
//! category weight table, normalizing by the weights actually evaluated.

pub mod analyzer;
pub mod checkers;
pub mod dom;
pub mod fetch;
pub mod report;
