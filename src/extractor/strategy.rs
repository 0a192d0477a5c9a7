use std::fmt;

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// One way of locating an element in a parsed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionStrategy {
    /// First element with this tag name
    Tag(String),
    /// First element carrying this class
    Class(String),
}

impl SelectionStrategy {
    pub fn tag(name: &str) -> Self {
        SelectionStrategy::Tag(name.to_string())
    }

    pub fn class(name: &str) -> Self {
        SelectionStrategy::Class(name.to_string())
    }

    /// CSS selector equivalent of the strategy
    pub fn css(&self) -> String {
        match self {
            SelectionStrategy::Tag(name) => name.clone(),
            SelectionStrategy::Class(name) => format!(".{}", name),
        }
    }

    /// First element of `html` matched by this strategy.
    pub fn find<'a>(&self, html: &'a Html) -> Option<ElementRef<'a>> {
        let selector = self.selector()?;
        let found = html.select(&selector).next();
        found
    }

    fn selector(&self) -> Option<Selector> {
        match Selector::parse(&self.css()) {
            Ok(selector) => Some(selector),
            Err(e) => {
                warn!("Skipping invalid selection strategy {}: {:?}", self, e);
                None
            }
        }
    }
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

/// Evaluate `strategies` in order; the first one that matches wins.
pub fn first_match<'h, 's>(
    html: &'h Html,
    strategies: &'s [SelectionStrategy],
) -> Option<(&'s SelectionStrategy, ElementRef<'h>)> {
    strategies
        .iter()
        .find_map(|strategy| strategy.find(html).map(|element| (strategy, element)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_rendering() {
        assert_eq!(SelectionStrategy::tag("article").css(), "article");
        assert_eq!(SelectionStrategy::class("content").css(), ".content");
    }

    #[test]
    fn test_class_matches_any_element_with_class() {
        let html = Html::parse_document(r#"<section class="wide content">x</section>"#);
        let found = SelectionStrategy::class("content").find(&html).unwrap();
        assert_eq!(found.value().name(), "section");
    }

    #[test]
    fn test_invalid_strategy_matches_nothing() {
        let html = Html::parse_document("<p>x</p>");
        assert!(SelectionStrategy::tag("<<<").find(&html).is_none());
    }
}
