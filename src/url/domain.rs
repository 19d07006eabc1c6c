use url::Url;

/// Extracts the owning domain from a fetched page's URL
///
/// This retrieves the host portion of the URL and converts it to lowercase.
/// Returns None when the URL has no host, which tells the caller that no
/// same-site frontier growth is possible for this page.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use driftnet::url::page_domain;
///
/// let url = Url::parse("https://Example.COM/about").unwrap();
/// assert_eq!(page_domain(&url), Some("example.com".to_string()));
/// ```
pub fn page_domain(url: &Url) -> Option<String> {
    url.host_str()
        .map(|h| h.to_lowercase())
        .filter(|h| !h.is_empty())
}
