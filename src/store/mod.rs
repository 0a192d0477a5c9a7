pub mod cache_key;
pub mod file_store;

use crate::app::Result;
use crate::domain::Feed;

pub use cache_key::{sanitize, CacheNaming};
pub use file_store::FileStore;

pub trait Store {
    // Feed list operations
    /// Load the feed list. Missing or unreadable documents yield an empty list.
    fn load_feeds(&self) -> Vec<Feed>;
    fn save_feeds(&self, feeds: &[Feed]) -> Result<()>;

    // Offline cache operations, keyed by article identifier
    fn read_offline_body(&self, id: &str) -> Result<String>;
    fn write_offline_body(&self, id: &str, html: &str) -> Result<()>;
    fn delete_offline_body(&self, id: &str) -> Result<()>;
    fn has_offline_body(&self, id: &str) -> bool;

    // Last successfully fetched document of each feed, keyed by feed URL
    fn read_feed_snapshot(&self, url: &str) -> Result<Vec<u8>>;
    fn write_feed_snapshot(&self, url: &str, body: &[u8]) -> Result<()>;
    fn delete_feed_snapshot(&self, url: &str) -> Result<()>;
}
