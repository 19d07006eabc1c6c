use std::collections::HashSet;
use url::Url;

/// Known social-media domains; a match is the bare domain or any subdomain
const SOCIAL_HOSTS: &[&str] = &[
    "facebook.com",
    "twitter.com",
    "x.com",
    "linkedin.com",
    "instagram.com",
    "youtube.com",
    "tiktok.com",
    "pinterest.com",
];

/// Checks if a host belongs to a known social-media domain
///
/// Matches the bare domain itself or any subdomain of it:
///
/// ```
/// use driftnet::url::matches_social_host;
///
/// assert!(matches_social_host("facebook.com"));
/// assert!(matches_social_host("www.facebook.com"));
/// assert!(!matches_social_host("notfacebook.com"));
/// ```
pub fn matches_social_host(host: &str) -> bool {
    SOCIAL_HOSTS
        .iter()
        .any(|base| host == *base || host.ends_with(&format!(".{}", base)))
}

/// Checks if a URL points at a social-media site, ignoring dedup state
pub fn is_social_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed.host_str().map_or(false, matches_social_host),
        Err(_) => false,
    }
}

/// Classifies a URL as a newly seen social-media link
///
/// True only when the host matches the allow-list AND the lower-cased URL has
/// not already been recorded, so each social link is reported at most once
/// across the whole run.
///
/// # Arguments
///
/// * `url_lowered` - The lower-cased candidate URL
/// * `seen_social` - Lower-cased social links already recorded
pub fn is_social_media(url_lowered: &str, seen_social: &HashSet<String>) -> bool {
    is_social_url(url_lowered) && !seen_social.contains(url_lowered)
}
