/// File extensions that mark a candidate as an image or stylesheet asset
const ASSET_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".gif", ".svg", ".css", ".ico", ".webp", ".bmp",
];

/// Checks whether a candidate string is an image or stylesheet link
///
/// Used in two places: to drop asset hrefs from link harvesting, and to drop
/// asset filenames that the email pattern misreads as addresses (markup
/// fragments like `logo.png@2x.png`).
///
/// # Examples
///
/// ```
/// use driftnet::url::is_asset_link;
///
/// assert!(is_asset_link("https://example.com/img/logo.png"));
/// assert!(is_asset_link("style.CSS"));
/// assert!(!is_asset_link("https://example.com/about"));
/// ```
pub fn is_asset_link(candidate: &str) -> bool {
    let lowered = candidate.to_lowercase();
    ASSET_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext))
}
