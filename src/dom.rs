// SPDX-License-Identifier: PMPL-1.0-or-later
//! Parsed-document handle and the tree queries the checkers share.
//!
//! Wraps `scraper::Html` so checkers never touch the parsing library
//! directly: they ask for elements by selector, read attributes and
//! text, and walk ancestor chains.

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML document. Read-only for the lifetime of an analysis.
#[derive(Debug)]
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    /// Parse raw HTML into a navigable document.
    pub fn parse(raw: &str) -> Self {
        Self {
            html: Html::parse_document(raw),
        }
    }

    /// All elements matching a CSS selector, in document order.
    ///
    /// Selectors are compile-time constants at every call site, so a
    /// parse failure is a programming error.
    pub fn select(&self, selector: &str) -> Vec<ElementRef<'_>> {
        let sel = Selector::parse(selector).expect("valid selector");
        self.html.select(&sel).collect()
    }

    /// First element matching a CSS selector, if any.
    pub fn first(&self, selector: &str) -> Option<ElementRef<'_>> {
        let sel = Selector::parse(selector).expect("valid selector");
        self.html.select(&sel).next()
    }
}

/// Concatenated text of an element and its descendants.
pub fn text_content(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Whether the element contains a descendant matching a CSS selector.
pub fn has_descendant(el: ElementRef<'_>, selector: &str) -> bool {
    let sel = Selector::parse(selector).expect("valid selector");
    el.select(&sel).next().is_some()
}

/// Whether any ancestor of the element has the given tag name.
pub fn has_ancestor(el: ElementRef<'_>, tag: &str) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| a.value().name().eq_ignore_ascii_case(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_document_order() {
        let doc = PageDocument::parse(
            "<html><body><h1>a</h1><p>x</p><h2>b</h2><h1>c</h1></body></html>",
        );
        let names: Vec<String> = doc
            .select("h1, h2")
            .iter()
            .map(|el| text_content(*el))
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_first() {
        let doc = PageDocument::parse("<html><body><p>x</p></body></html>");
        assert!(doc.first("p").is_some());
        assert!(doc.first("main").is_none());
    }

    #[test]
    fn test_has_ancestor() {
        let doc = PageDocument::parse(
            "<html><body><label>Name <span><input type=\"text\"></span></label><input id=\"free\"></body></html>",
        );
        let inputs = doc.select("input");
        assert_eq!(inputs.len(), 2);
        assert!(has_ancestor(inputs[0], "label"));
        assert!(!has_ancestor(inputs[1], "label"));
    }

    #[test]
    fn test_text_content_includes_descendants() {
        let doc = PageDocument::parse("<html><body><a>read <b>more</b></a></body></html>");
        let link = doc.first("a").unwrap();
        assert_eq!(text_content(link), "read more");
    }
}
