use std::collections::HashSet;

/// The three monotonic dedup sets shared across a crawl run
///
/// One instance is constructed per run and passed by mutable reference to the
/// extractors and the driver. Each set only ever grows: a URL is enqueued at
/// most once, a social link is reported at most once, an email is reported at
/// most once. Social links and frontier links are keyed on their lower-cased
/// form; the reported strings keep their original case.
#[derive(Debug, Default)]
pub struct DedupStore {
    links: HashSet<String>,
    social_links: HashSet<String>,
    emails: HashSet<String>,
}

impl DedupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a link as seen; returns true if it was new
    pub fn add_link(&mut self, url: &str) -> bool {
        self.links.insert(url.to_string())
    }

    /// Records a social link (lower-cased key); returns true if it was new
    pub fn add_social_link(&mut self, url_lowered: &str) -> bool {
        self.social_links.insert(url_lowered.to_string())
    }

    /// Records an email as seen; returns true if it was new
    pub fn add_email(&mut self, email: &str) -> bool {
        self.emails.insert(email.to_string())
    }

    pub fn seen_links(&self) -> &HashSet<String> {
        &self.links
    }

    pub fn seen_social_links(&self) -> &HashSet<String> {
        &self.social_links
    }

    pub fn seen_emails(&self) -> &HashSet<String> {
        &self.emails
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn social_link_count(&self) -> usize {
        self.social_links.len()
    }

    pub fn email_count(&self) -> usize {
        self.emails.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_link_reports_newness() {
        let mut store = DedupStore::new();

        assert!(store.add_link("https://example.com/about"));
        assert!(!store.add_link("https://example.com/about"));
        assert_eq!(store.link_count(), 1);
    }

    #[test]
    fn test_social_links_recorded_once() {
        let mut store = DedupStore::new();

        assert!(store.add_social_link("https://facebook.com/page"));
        assert!(!store.add_social_link("https://facebook.com/page"));
        assert_eq!(store.social_link_count(), 1);
    }

    #[test]
    fn test_emails_recorded_once() {
        let mut store = DedupStore::new();

        assert!(store.add_email("foo@example.org"));
        assert!(!store.add_email("foo@example.org"));
        assert_eq!(store.email_count(), 1);
    }

    #[test]
    fn test_sets_are_independent() {
        let mut store = DedupStore::new();
        store.add_link("https://facebook.com/page");

        // Same string in the links set does not make it a seen social link
        assert!(!store.seen_social_links().contains("https://facebook.com/page"));
        assert!(store.add_social_link("https://facebook.com/page"));
    }
}
