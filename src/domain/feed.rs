use serde::{Deserialize, Serialize};

/// A subscribed feed. Identity is the URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Feed {
    pub title: String,
    pub url: String,
}

impl Feed {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}

/// Metadata read from a feed document when it is first added.
#[derive(Debug, Clone, Default)]
pub struct FeedMeta {
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_pascal_case_keys() {
        let feed = Feed::new("Example Feed", "https://example.com/feed.xml");
        let json = serde_json::to_string(&feed).unwrap();
        assert_eq!(
            json,
            r#"{"Title":"Example Feed","Url":"https://example.com/feed.xml"}"#
        );
    }

    #[test]
    fn test_deserializes_legacy_document() {
        let json = r#"[{"Title":"A","Url":"https://a.example/rss"},{"Title":"B","Url":"https://b.example/atom"}]"#;
        let feeds: Vec<Feed> = serde_json::from_str(json).unwrap();
        assert_eq!(feeds.len(), 2);
        assert_eq!(feeds[1].url, "https://b.example/atom");
    }

    #[test]
    fn test_display_title_falls_back_to_url() {
        let feed = Feed::new("", "https://example.com/feed.xml");
        assert_eq!(feed.display_title(), "https://example.com/feed.xml");
    }
}
