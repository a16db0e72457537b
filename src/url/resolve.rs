use url::Url;

/// Resolves an href against the page it was found on
///
/// Mirrors how a browser resolves a reference: absolute hrefs are kept,
/// relative ones are joined onto `base`. The serialized form of the joined
/// URL is used verbatim as crawl identity; fragments, trailing slashes and
/// query order are left untouched.
///
/// Returns None only when the reference cannot be joined at all.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_census::url::resolve_link;
///
/// let base = Url::parse("https://example.com/docs/intro").unwrap();
/// let setup = resolve_link("setup", &base).unwrap();
/// assert_eq!(setup.as_str(), "https://example.com/docs/setup");
/// let top = resolve_link("/#top", &base).unwrap();
/// assert_eq!(top.as_str(), "https://example.com/#top");
/// ```
pub fn resolve_link(href: &str, base: &Url) -> Option<Url> {
    base.join(href.trim()).ok()
}
