//! In-memory authority over the feed list, the selected feed and the offline
//! flags of its articles.
//!
//! Every operation takes the registry lock for its whole duration, network
//! I/O included, so concurrent callers run one after the other. Operations
//! that fail leave both the in-memory state and the files on disk as they
//! were.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::app::{ReaderError, Result};
use crate::domain::{Article, Feed, ReadableDocument};
use crate::extractor::ContentExtractor;
use crate::fetcher::{normalize_url, FeedClient};
use crate::store::Store;

/// Which feed, if any, the article list belongs to.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    #[default]
    NoFeedSelected,
    FeedSelected { feed: Feed, articles: Vec<Article> },
}

impl Selection {
    pub fn feed(&self) -> Option<&Feed> {
        match self {
            Selection::NoFeedSelected => None,
            Selection::FeedSelected { feed, .. } => Some(feed),
        }
    }

    pub fn articles(&self) -> &[Article] {
        match self {
            Selection::NoFeedSelected => &[],
            Selection::FeedSelected { articles, .. } => articles,
        }
    }
}

#[derive(Debug, Default)]
struct RegistryState {
    feeds: Vec<Feed>,
    selection: Selection,
}

pub struct Registry {
    state: Mutex<RegistryState>,
    store: Arc<dyn Store + Send + Sync>,
    client: FeedClient,
    extractor: ContentExtractor,
}

impl Registry {
    /// Create a registry seeded with the feeds persisted in `store`.
    pub fn new(store: Arc<dyn Store + Send + Sync>, client: FeedClient) -> Self {
        let feeds = store.load_feeds();
        debug!("Loaded {} feeds", feeds.len());

        Self {
            state: Mutex::new(RegistryState {
                feeds,
                selection: Selection::NoFeedSelected,
            }),
            store,
            client,
            extractor: ContentExtractor::new(),
        }
    }

    /// Replace the extractor used by [`Registry::view_article`].
    pub fn with_extractor(mut self, extractor: ContentExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub async fn feeds(&self) -> Vec<Feed> {
        self.state.lock().await.feeds.clone()
    }

    pub async fn selection(&self) -> Selection {
        self.state.lock().await.selection.clone()
    }

    pub async fn selected_feed(&self) -> Option<Feed> {
        self.state.lock().await.selection.feed().cloned()
    }

    pub async fn articles(&self) -> Vec<Article> {
        self.state.lock().await.selection.articles().to_vec()
    }

    /// Fetch the feed at `url` and append it to the feed list.
    pub async fn add_feed(&self, url: &str) -> Result<Feed> {
        let url = normalize_url(url)?;
        let mut state = self.state.lock().await;

        if state.feeds.iter().any(|f| f.url == url) {
            return Err(ReaderError::Duplicate(url));
        }

        let meta = self.client.fetch_feed(&url).await?;
        let title = meta
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| url.clone());
        let feed = Feed::new(title, url);

        let mut feeds = state.feeds.clone();
        feeds.push(feed.clone());
        self.store.save_feeds(&feeds)?;
        state.feeds = feeds;

        info!("Added feed {} ({})", feed.title, feed.url);
        Ok(feed)
    }

    /// Remove the feed with `url`. Clears the selection if it was selected.
    pub async fn remove_feed(&self, url: &str) -> Result<Feed> {
        let url = normalize_url(url)?;
        let mut state = self.state.lock().await;

        let index = state
            .feeds
            .iter()
            .position(|f| f.url == url)
            .ok_or_else(|| ReaderError::FeedNotFound(url.clone()))?;

        let mut feeds = state.feeds.clone();
        let removed = feeds.remove(index);
        self.store.save_feeds(&feeds)?;
        state.feeds = feeds;

        if let Err(e) = self.store.delete_feed_snapshot(&removed.url) {
            warn!(error = %e, url = %removed.url, "failed to delete feed snapshot");
        }

        if state.selection.feed().is_some_and(|f| f.url == removed.url) {
            state.selection = Selection::NoFeedSelected;
        }

        info!("Removed feed {}", removed.url);
        Ok(removed)
    }

    /// Load the articles of the feed with `url` and make it the selection.
    pub async fn select_feed(&self, url: &str) -> Result<Vec<Article>> {
        let url = normalize_url(url)?;
        let mut state = self.state.lock().await;
        let feed = find_feed(&state.feeds, &url)?;

        let articles = self
            .client
            .fetch_articles(&feed.url, self.store.as_ref())
            .await?;

        info!("Selected feed {} ({} articles)", feed.url, articles.len());
        state.selection = Selection::FeedSelected {
            feed,
            articles: articles.clone(),
        };
        Ok(articles)
    }

    /// Like [`Registry::select_feed`], but builds the article list from the
    /// snapshot stored by the last successful selection instead of the network.
    pub async fn select_feed_cached(&self, url: &str) -> Result<Vec<Article>> {
        let url = normalize_url(url)?;
        let mut state = self.state.lock().await;
        let feed = find_feed(&state.feeds, &url)?;

        let articles = self
            .client
            .cached_articles(&feed.url, self.store.as_ref())?;

        info!(
            "Selected feed {} from snapshot ({} articles)",
            feed.url,
            articles.len()
        );
        state.selection = Selection::FeedSelected {
            feed,
            articles: articles.clone(),
        };
        Ok(articles)
    }

    /// Flip the offline state of the article with `link` in the current list.
    ///
    /// Saving fetches the page and writes it to the cache; unsaving deletes
    /// the cached copy. Every entry of the list sharing `link` gets the new
    /// flag, which is returned.
    pub async fn toggle_offline(&self, link: &str) -> Result<bool> {
        let mut state = self.state.lock().await;

        let articles = match &mut state.selection {
            Selection::NoFeedSelected => return Err(ReaderError::NoFeedSelected),
            Selection::FeedSelected { articles, .. } => articles,
        };
        let article = articles
            .iter()
            .find(|a| a.link == link)
            .ok_or_else(|| ReaderError::ArticleNotFound(link.to_string()))?;

        let saved = if article.is_offline_saved {
            self.store.delete_offline_body(link)?;
            info!("Deleted offline copy of {}", link);
            false
        } else {
            if link.is_empty() {
                return Err(ReaderError::InvalidInput(format!(
                    "article '{}' has no link",
                    article.display_title()
                )));
            }
            let html = self.client.fetch_article_body(link).await?;
            self.store.write_offline_body(link, &html)?;
            info!("Saved offline copy of {}", link);
            true
        };

        for article in articles.iter_mut().filter(|a| a.link == link) {
            article.is_offline_saved = saved;
        }
        Ok(saved)
    }

    /// Articles of the current list that have an offline copy.
    ///
    /// Only the selected feed is considered; offline copies belonging to
    /// other feeds are not listed.
    pub async fn list_offline_articles(&self) -> Vec<Article> {
        let state = self.state.lock().await;
        state
            .selection
            .articles()
            .iter()
            .filter(|a| a.is_offline_saved)
            .cloned()
            .collect()
    }

    /// Render the article with `link` from the current list. Offline articles
    /// are read from the cache, others are fetched.
    pub async fn view_article(&self, link: &str) -> Result<ReadableDocument> {
        let state = self.state.lock().await;

        let article = match &state.selection {
            Selection::NoFeedSelected => return Err(ReaderError::NoFeedSelected),
            Selection::FeedSelected { articles, .. } => articles
                .iter()
                .find(|a| a.link == link)
                .ok_or_else(|| ReaderError::ArticleNotFound(link.to_string()))?,
        };

        let html = if article.is_offline_saved {
            debug!("Reading {} from offline cache", article.link);
            self.store.read_offline_body(&article.link)?
        } else {
            self.client.fetch_article_body(&article.link).await?
        };

        Ok(self.extractor.extract_readable(&html))
    }
}

fn find_feed(feeds: &[Feed], url: &str) -> Result<Feed> {
    feeds
        .iter()
        .find(|f| f.url == url)
        .cloned()
        .ok_or_else(|| ReaderError::FeedNotFound(url.to_string()))
}
