//! Link extraction
//!
//! Pulls hyperlink targets out of a parsed page, resolves them against the
//! page URL and keeps those passing the host filter.

use crate::crawler::document::Document;
use crate::url::{resolve_link, HostFilter};
use url::Url;

/// Extracts same-host links from a document
///
/// # Extraction Rules
///
/// - Every element inside `<body>` with an `href` attribute counts, not only
///   `<a>`; `<link>`/`<base>` in `<head>` are ignored
/// - Each href is resolved against `current_url`; unjoinable hrefs are dropped
/// - A link is kept when its absolute form contains the host filter
/// - Document order is preserved and duplicates are kept
///
/// # Arguments
///
/// * `document` - The parsed page
/// * `current_url` - URL the page was fetched from
/// * `host_filter` - Substring a link must contain to be kept
///
/// # Example
///
/// ```
/// use site_census::crawler::{extract_links, Document};
/// use site_census::url::HostFilter;
/// use url::Url;
///
/// let doc = Document::parse_str(r#"<a href="/a">A</a><a href="https://other.org/">B</a>"#).unwrap();
/// let page = Url::parse("https://example.com/").unwrap();
/// let links = extract_links(&doc, &page, &HostFilter::new("example.com"));
/// assert_eq!(links.len(), 1);
/// assert_eq!(links[0].as_str(), "https://example.com/a");
/// ```
pub fn extract_links(
    document: &Document,
    current_url: &Url,
    host_filter: &HostFilter,
) -> Vec<Url> {
    document
        .select_in_body("[href]")
        .iter()
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(href, current_url))
        .filter(|absolute| host_filter.matches(absolute.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.com/page").unwrap()
    }

    fn filter() -> HostFilter {
        HostFilter::new("example.com")
    }

    fn links_in(html: &str) -> Vec<String> {
        let doc = Document::parse_str(html).unwrap();
        extract_links(&doc, &base_url(), &filter())
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_extract_relative_link() {
        let links = links_in(r#"<html><body><a href="/other">Link</a></body></html>"#);
        assert_eq!(links, vec!["https://example.com/other"]);
    }

    #[test]
    fn test_extract_relative_path_link() {
        let links = links_in(r#"<html><body><a href="other">Link</a></body></html>"#);
        assert_eq!(links, vec!["https://example.com/other"]);
    }

    #[test]
    fn test_off_host_links_filtered() {
        let links = links_in(
            r#"<body>
                <a href="https://example.com/in">In</a>
                <a href="https://other.com/out">Out</a>
            </body>"#,
        );
        assert_eq!(links, vec!["https://example.com/in"]);
    }

    #[test]
    fn test_substring_filter_keeps_lookalike_hosts() {
        let links = links_in(
            r#"<body>
                <a href="https://sub.example.com/">Sub</a>
                <a href="https://example.com.mirror.net/">Mirror</a>
            </body>"#,
        );
        assert_eq!(
            links,
            vec!["https://sub.example.com/", "https://example.com.mirror.net/"]
        );
    }

    #[test]
    fn test_any_href_element_counts() {
        let links = links_in(
            r#"<body>
                <a href="/a">A</a>
                <area href="/map">
                <link href="/body-link">
            </body>"#,
        );
        assert_eq!(
            links,
            vec![
                "https://example.com/a",
                "https://example.com/map",
                "https://example.com/body-link"
            ]
        );
    }

    #[test]
    fn test_head_links_ignored() {
        let links = links_in(
            r#"<html><head><link rel="canonical" href="https://example.com/canonical"></head>
            <body><p>No links here</p></body></html>"#,
        );
        assert!(links.is_empty());
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let links = links_in(
            r#"<body>
                <a href="/b">B</a>
                <a href="/a">A</a>
                <a href="/b">B again</a>
            </body>"#,
        );
        assert_eq!(
            links,
            vec![
                "https://example.com/b",
                "https://example.com/a",
                "https://example.com/b"
            ]
        );
    }

    #[test]
    fn test_fragment_links_resolve_to_page() {
        let links = links_in(r##"<body><a href="#top">Top</a></body>"##);
        assert_eq!(links, vec!["https://example.com/page#top"]);
    }

    #[test]
    fn test_mailto_kept_when_it_mentions_host() {
        let links = links_in(
            r#"<body>
                <a href="mailto:team@example.com">Mail</a>
                <a href="mailto:someone@else.org">Other</a>
            </body>"#,
        );
        assert_eq!(links, vec!["mailto:team@example.com"]);
    }
}
