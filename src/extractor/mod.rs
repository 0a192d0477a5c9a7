//! Reduces a full HTML page to a title and its paragraphs.
//!
//! The main content container is located by evaluating an ordered list of
//! [`SelectionStrategy`] values, first match wins:
//!
//! ```text
//! <article> → <main> → .content → <body>
//! ```
//!
//! The title comes from the first `<h1>`, else `<title>`. Every `<p>` inside the
//! container becomes a paragraph; a container without `<p>` elements becomes a
//! single paragraph holding its whole text.

mod strategy;

pub use strategy::{first_match, SelectionStrategy};

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::domain::ReadableDocument;

/// Paragraph used when no content container could be found.
pub const EXTRACTION_FAILED: &str = "Could not extract meaningful content from this article.";

/// Content extractor for turning article pages into readable documents
#[derive(Debug, Clone)]
pub struct ContentExtractor {
    containers: Vec<SelectionStrategy>,
    titles: Vec<SelectionStrategy>,
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentExtractor {
    pub fn new() -> Self {
        Self::with_strategies(Self::default_containers())
    }

    /// Build an extractor that looks for the content container with the given
    /// strategies instead of the default chain.
    pub fn with_strategies(containers: Vec<SelectionStrategy>) -> Self {
        Self {
            containers,
            titles: vec![SelectionStrategy::tag("h1"), SelectionStrategy::tag("title")],
        }
    }

    pub fn default_containers() -> Vec<SelectionStrategy> {
        vec![
            SelectionStrategy::tag("article"),
            SelectionStrategy::tag("main"),
            SelectionStrategy::class("content"),
            SelectionStrategy::tag("body"),
        ]
    }

    pub fn extract_readable(&self, html: &str) -> ReadableDocument {
        let document = Html::parse_document(html);

        let Some((strategy, container)) = first_match(&document, &self.containers) else {
            debug!("No content container found");
            return ReadableDocument::new(None, vec![EXTRACTION_FAILED.to_string()]);
        };
        debug!("Content container matched by {}", strategy);

        let title = first_match(&document, &self.titles).map(|(_, node)| element_text(node));

        let paragraphs = match Selector::parse("p") {
            Ok(p) => container.select(&p).map(element_text).collect::<Vec<_>>(),
            Err(_) => Vec::new(),
        };

        let paragraphs = if paragraphs.is_empty() {
            vec![element_text(container)]
        } else {
            paragraphs
        };

        ReadableDocument::new(title, paragraphs)
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
