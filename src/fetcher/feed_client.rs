use std::sync::Arc;

use tracing::{debug, warn};

use crate::app::Result;
use crate::domain::{Article, FeedMeta};
use crate::fetcher::Fetcher;
use crate::normalizer::Normalizer;
use crate::store::Store;

/// Fetches feed documents and maps them to domain values.
#[derive(Clone)]
pub struct FeedClient {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    normalizer: Normalizer,
}

impl FeedClient {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self {
            fetcher,
            normalizer: Normalizer::new(),
        }
    }

    /// Fetch a feed and return its metadata only.
    pub async fn fetch_feed(&self, url: &str) -> Result<FeedMeta> {
        let body = self.fetcher.fetch(url).await?;
        let (meta, _) = self.normalizer.normalize(&body)?;
        Ok(meta)
    }

    /// Fetch a feed and return its entries, each annotated with whether an
    /// offline copy of its link exists in `store`.
    ///
    /// The fetched document is kept in `store` as the feed's snapshot so the
    /// list can be rebuilt later without the network.
    pub async fn fetch_articles(
        &self,
        url: &str,
        store: &(dyn Store + Send + Sync),
    ) -> Result<Vec<Article>> {
        let body = self.fetcher.fetch(url).await?;
        let articles = self.articles_from(&body, store)?;

        if let Err(e) = store.write_feed_snapshot(url, &body) {
            warn!(error = %e, url, "failed to store feed snapshot");
        }

        debug!("Fetched {} articles from {}", articles.len(), url);
        Ok(articles)
    }

    /// Rebuild the article list of `url` from its last stored snapshot.
    pub fn cached_articles(
        &self,
        url: &str,
        store: &(dyn Store + Send + Sync),
    ) -> Result<Vec<Article>> {
        let body = store.read_feed_snapshot(url)?;
        let articles = self.articles_from(&body, store)?;
        debug!("Loaded {} articles of {} from snapshot", articles.len(), url);
        Ok(articles)
    }

    fn articles_from(&self, body: &[u8], store: &(dyn Store + Send + Sync)) -> Result<Vec<Article>> {
        let (_, mut articles) = self.normalizer.normalize(body)?;

        for article in &mut articles {
            article.is_offline_saved =
                !article.link.is_empty() && store.has_offline_body(&article.link);
        }

        Ok(articles)
    }

    /// Fetch the HTML page an article links to.
    pub async fn fetch_article_body(&self, link: &str) -> Result<String> {
        self.fetcher.fetch_text(link).await
    }
}
