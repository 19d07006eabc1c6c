//! HTML link harvesting and classification
//!
//! This module walks every anchor in a fetched page and splits the candidate
//! hrefs into two outputs: newly seen social-media links, and new same-site
//! URLs worth enqueuing on the frontier.
//!
//! The social-media check runs first; a social link can never also become a
//! frontier candidate because the email-page heuristic excludes social hosts.

use crate::state::DedupStore;
use crate::url::{is_asset_link, is_social_media, is_valid, may_contain_email_link};
use scraper::{Html, Selector};
use url::Url;

/// Links harvested from one page
#[derive(Debug, Default)]
pub struct LinkHarvest {
    /// New same-site URLs to enqueue, original case, in document order
    pub frontier_links: Vec<String>,

    /// Newly seen social-media links, original case, in document order
    pub social_links: Vec<String>,
}

/// Extracts and classifies every hyperlink in the page body
///
/// Per candidate href:
/// 1. skip if empty
/// 2. lower-case and parse; skip if not a valid, previously unseen absolute
///    HTTP(S) URL, or if it points at an image/stylesheet asset
/// 3. social-media check: record the original-case URL once, keyed on its
///    lower-cased form
/// 4. email-page heuristic: record the original-case URL for the frontier and
///    mark the lower-cased form seen
///
/// Malformed hrefs are silently skipped; they are routine in real markup.
/// The dedup sets in `store` are the only state mutated here; writing the
/// discovery log and growing the frontier stay with the driver.
pub fn extract_links(
    body: &str,
    original_domain: Option<&str>,
    store: &mut DedupStore,
) -> LinkHarvest {
    let document = Html::parse_document(body);
    let mut harvest = LinkHarvest::default();

    let anchor_selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return harvest,
    };

    for element in document.select(&anchor_selector) {
        let href = match element.value().attr("href") {
            Some(h) => h.trim(),
            None => continue,
        };
        if href.is_empty() {
            continue;
        }

        let lowered = href.to_lowercase();

        if !is_valid(&lowered, store.seen_links()) || is_asset_link(&lowered) {
            continue;
        }

        let parsed = match Url::parse(&lowered) {
            Ok(p) => p,
            Err(_) => continue,
        };

        if is_social_media(&lowered, store.seen_social_links()) {
            harvest.social_links.push(href.to_string());
            store.add_social_link(&lowered);
        }

        if may_contain_email_link(original_domain, &parsed, &lowered) {
            harvest.frontier_links.push(href.to_string());
            store.add_link(&lowered);
        }
    }

    harvest
}
