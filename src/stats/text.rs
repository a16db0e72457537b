//! Visible text extraction and tokenization

use crate::crawler::Document;
use regex::Regex;
use std::sync::LazyLock;

/// Parents whose text is never page content
const NON_CONTENT_TAGS: &[&str] = &["noscript", "input", "script", "style"];

/// A word is a maximal run of Latin or Cyrillic letters
static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-zА-Яа-яЁё]+").expect("hardcoded regex pattern is valid"));

/// Returns the trimmed, non-blank text fragments a reader would see
///
/// A text node is dropped when its immediate parent is a non-content tag or
/// is not an element at all (the document root). Text sitting directly in
/// `<body>` is kept.
///
/// # Example
///
/// ```
/// use site_census::crawler::Document;
/// use site_census::stats::visible_fragments;
///
/// let doc = Document::parse_str("<p> Hi there </p><script>x()</script>").unwrap();
/// assert_eq!(visible_fragments(&doc), vec!["Hi there"]);
/// ```
pub fn visible_fragments(document: &Document) -> Vec<&str> {
    document
        .body_text_nodes()
        .into_iter()
        .filter(|node| {
            node.parent_tag
                .map_or(false, |tag| !NON_CONTENT_TAGS.contains(&tag))
        })
        .map(|node| node.text.trim())
        .filter(|text| !text.is_empty())
        .collect()
}

/// Splits a fragment into lowercase words
///
/// Digits, punctuation and whitespace separate words and never form one.
///
/// # Example
///
/// ```
/// use site_census::stats::tokenize;
///
/// assert_eq!(tokenize("Hello, world! 2024"), vec!["hello", "world"]);
/// ```
pub fn tokenize(fragment: &str) -> Vec<String> {
    WORD_REGEX
        .find_iter(fragment)
        .map(|word| word.as_str().to_lowercase())
        .collect()
}
