use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the selected feed. Identity is the link, which is also the
/// offline cache key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub publish_date: Option<DateTime<Utc>>,
    pub link: String,
    pub summary: String,
    /// Native identifier of the feed entry (RSS guid / Atom id)
    pub entry_id: String,
    pub is_offline_saved: bool,
}

impl Article {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            publish_date: None,
            link: link.into(),
            summary: String::new(),
            entry_id: String::new(),
            is_offline_saved: false,
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "(Untitled)"
        } else {
            &self.title
        }
    }

    /// Short date for list views, blank when the entry has no date
    pub fn display_date(&self) -> String {
        self.publish_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "          ".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_article_is_not_offline() {
        let article = Article::new("Hello", "https://x/1");
        assert!(!article.is_offline_saved);
        assert!(article.summary.is_empty());
    }

    #[test]
    fn test_display_title_without_title() {
        let article = Article::new("", "https://x/1");
        assert_eq!(article.display_title(), "(Untitled)");
    }

    #[test]
    fn test_display_date() {
        let mut article = Article::new("Hello", "https://x/1");
        assert_eq!(article.display_date().trim(), "");

        article.publish_date = Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
        assert_eq!(article.display_date(), "2024-01-02");
    }
}
