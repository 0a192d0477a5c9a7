pub mod article;
pub mod document;
pub mod feed;

pub use article::Article;
pub use document::ReadableDocument;
pub use feed::{Feed, FeedMeta};
