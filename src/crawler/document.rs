//! Parsed HTML document
//!
//! Thin layer over `scraper::Html` exposing only what link extraction and
//! content statistics need: body-scoped element selection, attribute lookup
//! and text-node iteration.

use scraper::{ElementRef, Html, Node, Selector};
use thiserror::Error;

/// Parsing succeeded but there is no body content to measure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("document has no usable body")]
pub struct EmptyDocument;

/// A text node found inside `<body>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextNode<'a> {
    /// Tag name of the immediate parent, None when the parent is not an element
    pub parent_tag: Option<&'a str>,
    /// Raw, untrimmed text
    pub text: &'a str,
}

/// An HTML page ready for querying
#[derive(Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses raw response bytes (decoded lossily as UTF-8)
    pub fn parse(bytes: &[u8]) -> Result<Self, EmptyDocument> {
        Self::parse_str(&String::from_utf8_lossy(bytes))
    }

    /// Parses an HTML string
    ///
    /// The HTML5 parser always synthesizes a `<body>`; a document counts as
    /// empty when that body holds no element and no non-blank text.
    ///
    /// # Example
    ///
    /// ```
    /// use site_census::crawler::Document;
    ///
    /// assert!(Document::parse_str("<p>hi</p>").is_ok());
    /// assert!(Document::parse_str("  ").is_err());
    /// ```
    pub fn parse_str(html: &str) -> Result<Self, EmptyDocument> {
        let document = Self {
            html: Html::parse_document(html),
        };

        let has_content = document.body().map_or(false, |body| {
            body.children().any(|child| match child.value() {
                Node::Element(_) => true,
                Node::Text(text) => !text.trim().is_empty(),
                _ => false,
            })
        });

        if has_content {
            Ok(document)
        } else {
            Err(EmptyDocument)
        }
    }

    /// Returns the `<body>` element
    pub fn body(&self) -> Option<ElementRef<'_>> {
        let selector = Selector::parse("body").ok()?;
        self.html.select(&selector).next()
    }

    /// Returns elements inside `<body>` matching a CSS selector, in document order
    ///
    /// An unparseable selector matches nothing.
    pub fn select_in_body(&self, css: &str) -> Vec<ElementRef<'_>> {
        let (Some(body), Ok(selector)) = (self.body(), Selector::parse(css)) else {
            return Vec::new();
        };
        body.select(&selector).collect()
    }

    /// Returns every text node below `<body>`, in document order
    ///
    /// Comments are separate node kinds and never appear here.
    pub fn body_text_nodes(&self) -> Vec<TextNode<'_>> {
        let Some(body) = self.body() else {
            return Vec::new();
        };

        body.descendants()
            .filter_map(|node| {
                let text = node.value().as_text()?;
                let parent_tag = node
                    .parent()
                    .and_then(|parent| parent.value().as_element())
                    .map(|element| element.name());
                Some(TextNode {
                    parent_tag,
                    text: &**text,
                })
            })
            .collect()
    }
}
