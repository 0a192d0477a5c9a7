use chrono::Utc;
use feed_rs::parser;
use html_escape::decode_html_entities;

use crate::app::{ReaderError, Result};
use crate::domain::{Article, FeedMeta};

/// Turns RSS/Atom documents into feed metadata and articles.
#[derive(Clone)]
pub struct Normalizer;

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, body: &[u8]) -> Result<(FeedMeta, Vec<Article>)> {
        let feed = parser::parse(body).map_err(|e| ReaderError::FeedParse(e.to_string()))?;

        let meta = FeedMeta {
            title: feed
                .title
                .map(|t| decode_html_entities(t.content.trim()).to_string()),
        };

        let articles = feed
            .entries
            .into_iter()
            .map(|entry| Article {
                title: entry
                    .title
                    .map(|t| decode_html_entities(&t.content).to_string())
                    .unwrap_or_default(),
                publish_date: entry
                    .published
                    .or(entry.updated)
                    .map(|dt| dt.with_timezone(&Utc)),
                link: entry
                    .links
                    .first()
                    .map(|l| l.href.clone())
                    .unwrap_or_default(),
                summary: entry
                    .summary
                    .map(|s| decode_html_entities(&s.content).to_string())
                    .unwrap_or_default(),
                entry_id: entry.id,
                is_offline_saved: false,
            })
            .collect();

        Ok((meta, articles))
    }
}
