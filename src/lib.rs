//! # pocketfeed
//!
//! An RSS/Atom reader that keeps copies of chosen articles for offline reading.
//!
//! ## Architecture
//!
//! ```text
//! CLI → Registry → Feed Client / Content Extractor → Store
//! ```
//!
//! - [`registry`]: in-memory feed list, current selection and offline flags
//! - [`fetcher`]: HTTP fetching and the feed client
//! - [`normalizer`]: RSS/Atom parsing into articles
//! - [`extractor`]: HTML to title + paragraphs
//! - [`store`]: JSON feed list and offline HTML files
//!
//! ## Quick Start
//!
//! ```bash
//! # Add a feed
//! pocketfeed add https://blog.rust-lang.org/feed.xml
//!
//! # List its articles
//! pocketfeed articles https://blog.rust-lang.org/feed.xml
//!
//! # Save one offline, then read it
//! pocketfeed toggle https://blog.rust-lang.org/feed.xml <article-link>
//! pocketfeed read https://blog.rust-lang.org/feed.xml <article-link>
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together config, store,
/// fetcher and registry.
pub mod app;

/// Command-line interface using clap.
///
/// - `add <url>` - Add a new feed
/// - `remove <url>` - Remove a feed
/// - `list` - List feeds
/// - `articles <feed>` - List the articles of a feed
/// - `toggle <feed> <link>` - Save or delete an offline copy
/// - `read <feed> <link>` - Show an article as text
/// - `offline <feed>` - List offline articles of a feed
pub mod cli;

/// Configuration loaded from `~/.config/pocketfeed/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`Feed`](domain::Feed): a subscribed feed, identified by URL
/// - [`Article`](domain::Article): one entry of the selected feed
/// - [`ReadableDocument`](domain::ReadableDocument): extracted article text
pub mod domain;

/// Readable content extraction from article pages.
pub mod extractor;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for GET requests
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
/// - [`FeedClient`](fetcher::FeedClient): feed and article retrieval
pub mod fetcher;

/// Feed parsing and normalization.
///
/// Converts RSS 0.9x/1.0/2.0, Atom 0.3/1.0, and JSON Feed 1.0 into
/// [`Article`](domain::Article) values.
pub mod normalizer;

/// Feed list and offline article registry.
pub mod registry;

/// Flat-file persistence.
///
/// - [`Store`](store::Store): Trait defining storage operations
/// - [`FileStore`](store::FileStore): JSON document + HTML file implementation
pub mod store;
