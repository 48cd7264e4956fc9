// SPDX-License-Identifier: PMPL-1.0-or-later
//! Inline-style color contrast checker.
//!
//! A heuristic, not a contrast-ratio computation: elements whose inline
//! style sets a near-white or near-black color are flagged as potential
//! low-contrast text. Stylesheets and computed styles are out of reach
//! here, so an informational note is emitted when nothing matches.

use crate::checkers::CategoryResult;
use crate::dom::PageDocument;
use regex::Regex;

/// Score the document's inline-style colors.
pub fn check(doc: &PageDocument) -> CategoryResult {
    let color_re =
        Regex::new(r"(?i)color\s*:\s*(#[0-9a-f]+|rgba?\([^)]*\))").expect("valid regex");

    let mut matches = 0usize;
    let mut issues = Vec::new();

    for element in doc.select(r#"[style*="color"]"#) {
        let style = element.value().attr("style").unwrap_or("");

        let mut light = false;
        let mut dark = false;
        for caps in color_re.captures_iter(style) {
            if let Some((r, g, b)) = parse_color(&caps[1]) {
                light |= r >= 0xE0 && g >= 0xE0 && b >= 0xE0;
                dark |= r <= 0x2F && g <= 0x2F && b <= 0x2F;
            }
        }

        // Each pattern counts at most once per element; an element may
        // trigger both when its style carries several color declarations
        if light {
            matches += 1;
            issues.push("Potential low contrast light text".to_string());
        }
        if dark {
            matches += 1;
            issues.push("Potential low contrast dark text".to_string());
        }
    }

    let score = 1.0 - (matches as f64 * 0.1).min(0.5);

    if issues.is_empty() {
        issues.push("Limited contrast check performed (inline styles only)".to_string());
    }

    CategoryResult::new(score, issues)
}

/// Parse a CSS hex (#rgb, #rrggbb) or rgb()/rgba() value into (r, g, b).
fn parse_color(value: &str) -> Option<(u8, u8, u8)> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex_color(hex);
    }
    parse_rgb_color(value)
}

/// Parse hex digits into channels; shorthand nibbles are doubled.
fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Parse an rgb() or rgba() value into channels.
fn parse_rgb_color(value: &str) -> Option<(u8, u8, u8)> {
    let re = Regex::new(r"rgba?\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)").expect("valid regex");
    let caps = re.captures(value)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("fff"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("000"), Some((0, 0, 0)));
        assert_eq!(parse_hex_color("e5e5e5"), Some((0xE5, 0xE5, 0xE5)));
        assert_eq!(parse_hex_color("ffff"), None);
    }

    #[test]
    fn test_parse_rgb_color() {
        assert_eq!(parse_rgb_color("rgb(240, 240, 240)"), Some((240, 240, 240)));
        assert_eq!(parse_rgb_color("rgba(10, 10, 10, 0.5)"), Some((10, 10, 10)));
    }

    #[test]
    fn test_no_inline_styles_notes_limitation() {
        let doc = PageDocument::parse("<html><body><p>plain</p></body></html>");
        let result = check(&doc);
        assert_eq!(result.score, 1.0);
        assert_eq!(
            result.issues,
            vec!["Limited contrast check performed (inline styles only)"]
        );
    }

    #[test]
    fn test_near_white_flagged() {
        let doc = PageDocument::parse(
            r#"<html><body><p style="color: #fff">faint</p></body></html>"#,
        );
        let result = check(&doc);
        assert!((result.score - 0.9).abs() < 1e-9, "got {}", result.score);
        assert_eq!(result.issues, vec!["Potential low contrast light text"]);
    }

    #[test]
    fn test_near_black_flagged() {
        let doc = PageDocument::parse(
            r#"<html><body><p style="color: rgb(10, 10, 10)">dim</p></body></html>"#,
        );
        let result = check(&doc);
        assert!((result.score - 0.9).abs() < 1e-9);
        assert_eq!(result.issues, vec!["Potential low contrast dark text"]);
    }

    #[test]
    fn test_element_can_trigger_both() {
        let doc = PageDocument::parse(
            r#"<html><body><p style="color: #fff; background-color: #000">both</p></body></html>"#,
        );
        let result = check(&doc);
        assert!((result.score - 0.8).abs() < 1e-9, "got {}", result.score);
        assert_eq!(
            result.issues,
            vec![
                "Potential low contrast light text",
                "Potential low contrast dark text",
            ]
        );
    }

    #[test]
    fn test_mid_tones_not_flagged() {
        let doc = PageDocument::parse(
            r#"<html><body><p style="color: #777777">readable</p></body></html>"#,
        );
        let result = check(&doc);
        assert_eq!(result.score, 1.0);
        assert_eq!(
            result.issues,
            vec!["Limited contrast check performed (inline styles only)"]
        );
    }

    #[test]
    fn test_penalty_capped_at_half() {
        let html: String = (0..8)
            .map(|i| format!(r#"<p style="color: #fff">x{}</p>"#, i))
            .collect();
        let doc = PageDocument::parse(&format!("<html><body>{}</body></html>", html));
        let result = check(&doc);
        assert!((result.score - 0.5).abs() < 1e-9, "got {}", result.score);
        assert_eq!(result.issues.len(), 8);
    }
}
