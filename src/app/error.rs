use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parsing error: {0}")]
    FeedParse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Offline copy not found: {0}")]
    NotFound(String),

    #[error("Feed not found: {0}")]
    FeedNotFound(String),

    #[error("Article not found: {0}")]
    ArticleNotFound(String),

    #[error("This feed already exists in your list: {0}")]
    Duplicate(String),

    #[error("No feed selected")]
    NoFeedSelected,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ReaderError>;
