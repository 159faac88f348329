/// An item ready to be shown on the front page: the raw API item plus the host
/// its link points to.
#[derive(Debug, Clone)]
pub(crate) struct DisplayItem {
    pub(crate) item: crate::hn_api::Item,
    /// Host of `item.url` without a leading `www.`, empty when the item has no
    /// usable url.
    pub(crate) host: String,
}

impl DisplayItem {
    pub(crate) fn new(item: crate::hn_api::Item) -> Self {
        let host = item.url.as_deref().map(host_of).unwrap_or_default();
        Self { item, host }
    }

    /// Only stories linking somewhere else are shown. Text posts (Ask HN and
    /// friends) have no url and are skipped.
    pub(crate) fn is_story_link(&self) -> bool {
        self.item.kind == crate::hn_api::ItemKind::Story
            && self.item.url.as_deref().is_some_and(|url| !url.is_empty())
    }

    pub(crate) fn url(&self) -> &str {
        self.item.url.as_deref().unwrap_or_default()
    }
}

fn host_of(raw: &str) -> String {
    let Ok(url) = url::Url::parse(raw) else {
        return String::new();
    };

    let host = match url.host() {
        // The parser stores internationalized names as punycode.
        Some(url::Host::Domain(domain)) => idna::domain_to_unicode(domain).0,
        Some(url::Host::Ipv4(addr)) => addr.to_string(),
        Some(url::Host::Ipv6(addr)) => addr.to_string(),
        None => return String::new(),
    };

    host.strip_prefix("www.").map(str::to_string).unwrap_or(host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hn_api::{Item, ItemKind};

    fn item(kind: ItemKind, url: Option<&str>) -> Item {
        Item {
            id: 1,
            title: "A title".to_string(),
            kind,
            url: url.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_host_strips_www() {
        let story = DisplayItem::new(item(ItemKind::Story, Some("http://www.example.com/a")));
        assert_eq!(story.host, "example.com");
    }

    #[test]
    fn test_host_keeps_subdomain() {
        let story = DisplayItem::new(item(ItemKind::Story, Some("https://sub.example.com")));
        assert_eq!(story.host, "sub.example.com");

        // Only a leading www. is removed.
        assert_eq!(host_of("https://api.www.example.com"), "api.www.example.com");
    }

    #[test]
    fn test_host_internationalized() {
        assert_eq!(host_of("http://www.bücher.de/neu"), "bücher.de");
        assert_eq!(host_of("https://xn--bcher-kva.de"), "bücher.de");
    }

    #[test]
    fn test_host_without_port() {
        assert_eq!(host_of("http://www.example.com:8080/x"), "example.com");
        assert_eq!(host_of("http://127.0.0.1:3000/"), "127.0.0.1");
        assert_eq!(host_of("http://[::1]:3000/"), "::1");
    }

    #[test]
    fn test_host_empty_or_malformed() {
        assert_eq!(DisplayItem::new(item(ItemKind::Story, Some(""))).host, "");
        assert_eq!(DisplayItem::new(item(ItemKind::Story, None)).host, "");
        assert_eq!(host_of("not a url"), "");
        assert_eq!(host_of("example.com/relative"), "");
        assert_eq!(host_of("mailto:someone@example.com"), "");
    }

    #[test]
    fn test_is_story_link() {
        assert!(DisplayItem::new(item(ItemKind::Story, Some("http://x.com"))).is_story_link());
        assert!(!DisplayItem::new(item(ItemKind::Story, Some(""))).is_story_link());
        assert!(!DisplayItem::new(item(ItemKind::Story, None)).is_story_link());
        assert!(!DisplayItem::new(item(ItemKind::Comment, Some("http://x.com"))).is_story_link());
        assert!(!DisplayItem::new(item(ItemKind::Job, Some("http://x.com"))).is_story_link());
    }

    #[test]
    fn test_unparseable_url_still_qualifies() {
        // The host is empty but the story still has a link to show.
        let story = DisplayItem::new(item(ItemKind::Story, Some("::bogus::")));
        assert_eq!(story.host, "");
        assert!(story.is_story_link());
    }
}
