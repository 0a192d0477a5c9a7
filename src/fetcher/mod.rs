pub mod feed_client;
pub mod http_fetcher;

use async_trait::async_trait;
use url::Url;

use crate::app::{ReaderError, Result};

pub use feed_client::FeedClient;
pub use http_fetcher::HttpFetcher;

#[async_trait]
pub trait Fetcher {
    /// GET `url` and return the response body. Non-2xx statuses are errors.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;

    /// GET `url` and decode the body as text.
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let body = self.fetch(url).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

/// Trim the user input and prefix `https://` when no http(s) scheme is given.
pub fn normalize_url(input: &str) -> Result<String> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ReaderError::InvalidInput(
            "Please enter a RSS feed URL.".into(),
        ));
    }

    let lower = input.to_ascii_lowercase();
    let url = if lower.starts_with("http://") || lower.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    };

    Url::parse(&url)?;
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url_keeps_scheme() {
        assert_eq!(
            normalize_url("https://example.com/feed.xml").unwrap(),
            "https://example.com/feed.xml"
        );
        assert_eq!(
            normalize_url("http://example.com/rss").unwrap(),
            "http://example.com/rss"
        );
    }

    #[test]
    fn test_normalize_url_adds_https() {
        assert_eq!(
            normalize_url("  example.com/feed.xml ").unwrap(),
            "https://example.com/feed.xml"
        );
    }

    #[test]
    fn test_normalize_url_rejects_empty() {
        assert!(matches!(
            normalize_url("   "),
            Err(ReaderError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_normalize_url_rejects_unparseable() {
        assert!(matches!(
            normalize_url("https://"),
            Err(ReaderError::InvalidUrl(_))
        ));
    }
}
