//! Email extraction from page text
//!
//! One regex pass over the raw body, independent of the markup parse that
//! harvests links. Candidates already reported in an earlier page are
//! dropped, as are asset filenames that the pattern misreads as addresses.

use crate::url::is_asset_link;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Pattern matching `local-part@domain.tld` with a letters-only TLD
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[a-z0-9.\-+_]+@[a-z0-9.\-+_]+\.[a-z]+").expect("email pattern is valid")
});

/// Extracts newly seen email addresses from page text
///
/// Side-effect-free: the caller is responsible for merging the result into
/// the seen-emails set.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use driftnet::crawler::extract_emails;
///
/// let seen = HashSet::new();
/// let found = extract_emails("contact: foo@example.org", &seen);
/// assert!(found.contains("foo@example.org"));
/// ```
pub fn extract_emails(page_text: &str, seen_emails: &HashSet<String>) -> HashSet<String> {
    EMAIL_PATTERN
        .find_iter(page_text)
        .map(|m| m.as_str().to_string())
        .filter(|candidate| !seen_emails.contains(candidate))
        .filter(|candidate| !is_asset_link(candidate))
        .collect()
}
