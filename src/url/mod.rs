//! URL classification module for driftnet
//!
//! Pure predicates deciding, for each candidate link: structural validity,
//! asset-ness, social-media-ness, and whether the page behind it is likely to
//! carry contact emails. The only state they read is the dedup sets handed in
//! by the caller.

mod assets;
mod domain;
mod social;

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use url::Url;

// Re-export main functions
pub use assets::is_asset_link;
pub use domain::page_domain;
pub use social::{is_social_media, is_social_url, matches_social_host};

/// Path keywords marking pages that typically list contact emails
static EMAIL_PATH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new("(?i)about|affiliations|board|departments|directory|governance|leadership|staff|team")
        .expect("email path pattern is valid")
});

/// Checks whether a candidate link is structurally valid and previously unseen
///
/// Rejects the candidate if it is malformed, not an absolute HTTP(S) URL, has
/// a dotless host, carries no path segment after the host, or is already in
/// the seen-links set. Relative hrefs fail to parse and are rejected here,
/// so only absolute links are ever followed.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use driftnet::url::is_valid;
///
/// let mut seen = HashSet::new();
/// assert!(is_valid("https://example.com/about", &seen));
/// assert!(!is_valid("https://example.com/", &seen));
///
/// seen.insert("https://example.com/about".to_string());
/// assert!(!is_valid("https://example.com/about", &seen));
/// ```
pub fn is_valid(candidate: &str, seen_links: &HashSet<String>) -> bool {
    if seen_links.contains(candidate) {
        return false;
    }

    let parsed = match Url::parse(candidate) {
        Ok(p) => p,
        Err(_) => return false,
    };

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return false;
    }

    match parsed.host_str() {
        Some(host) if host.contains('.') => {}
        _ => return false,
    }

    // Require a non-empty path segment after the host
    parsed.path().len() > 1
}

/// Heuristic: could the page behind this URL carry contact emails?
///
/// True only if all of the following hold:
/// - `original_domain` is present, non-empty, and a substring of `url`
///   (the same-site check is a raw substring match, not a host comparison)
/// - the URL is not a social-media link
/// - the URL has no query string
/// - the URL path is at least 4 characters long
/// - the lower-cased path contains one of the contact-page keywords
///   (about, team, staff, leadership, board, governance, directory,
///   departments, affiliations)
///
/// # Arguments
///
/// * `original_domain` - The domain of the page the link was found on
/// * `parsed` - The parsed form of `url`
/// * `url` - The lower-cased candidate URL
pub fn may_contain_email_link(original_domain: Option<&str>, parsed: &Url, url: &str) -> bool {
    let domain = match original_domain {
        Some(d) if !d.is_empty() => d,
        _ => return false,
    };

    if !url.contains(domain) {
        return false;
    }

    if parsed.host_str().map_or(false, matches_social_host) {
        return false;
    }

    if parsed.query().map_or(false, |q| !q.is_empty()) {
        return false;
    }

    let path = parsed.path();
    if path.len() < 4 {
        return false;
    }

    EMAIL_PATH_PATTERN.is_match(path)
}
