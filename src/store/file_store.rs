use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::app::{ReaderError, Result};
use crate::domain::Feed;
use crate::store::{CacheNaming, Store};

const FEEDS_FILE: &str = "feeds.json";
const OFFLINE_DIR: &str = "OfflineArticles";
const SNAPSHOT_DIR: &str = "FeedSnapshots";

/// Flat-file store: one JSON document for the feed list, one HTML file per
/// offline article and one XML file per feed snapshot.
pub struct FileStore {
    feeds_path: PathBuf,
    offline_dir: PathBuf,
    snapshot_dir: PathBuf,
    naming: CacheNaming,
}

impl FileStore {
    /// Open the store rooted at `data_dir`, creating the directories if needed.
    pub fn open<P: AsRef<Path>>(data_dir: P, naming: CacheNaming) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        let offline_dir = data_dir.join(OFFLINE_DIR);
        let snapshot_dir = data_dir.join(SNAPSHOT_DIR);
        fs::create_dir_all(&offline_dir)?;
        fs::create_dir_all(&snapshot_dir)?;

        Ok(Self {
            feeds_path: data_dir.join(FEEDS_FILE),
            offline_dir,
            snapshot_dir,
            naming,
        })
    }

    pub fn feeds_path(&self) -> &Path {
        &self.feeds_path
    }

    pub fn offline_dir(&self) -> &Path {
        &self.offline_dir
    }

    /// Path of the cache file for an article identifier.
    pub fn offline_path(&self, id: &str) -> PathBuf {
        self.offline_dir.join(format!("{}.html", self.naming.key(id)))
    }

    pub fn snapshot_path(&self, url: &str) -> PathBuf {
        self.snapshot_dir.join(format!("{}.xml", self.naming.key(url)))
    }
}

fn remove_if_present(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

impl Store for FileStore {
    fn load_feeds(&self) -> Vec<Feed> {
        let bytes = match fs::read(&self.feeds_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(error = %e, path = %self.feeds_path.display(), "failed to read feed list, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Option<Vec<Feed>>>(&bytes) {
            Ok(feeds) => feeds.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, path = %self.feeds_path.display(), "failed to parse feed list, starting empty");
                Vec::new()
            }
        }
    }

    fn save_feeds(&self, feeds: &[Feed]) -> Result<()> {
        let bytes = serde_json::to_vec(feeds)?;
        fs::write(&self.feeds_path, bytes)?;
        debug!("Saved {} feeds to {}", feeds.len(), self.feeds_path.display());
        Ok(())
    }

    fn read_offline_body(&self, id: &str) -> Result<String> {
        let path = self.offline_path(id);
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ReaderError::NotFound(id.to_string()),
            _ => ReaderError::Io(e),
        })
    }

    fn write_offline_body(&self, id: &str, html: &str) -> Result<()> {
        let path = self.offline_path(id);
        fs::write(&path, html)?;
        debug!("Cached {} bytes at {}", html.len(), path.display());
        Ok(())
    }

    fn delete_offline_body(&self, id: &str) -> Result<()> {
        remove_if_present(&self.offline_path(id))
    }

    fn has_offline_body(&self, id: &str) -> bool {
        self.offline_path(id).is_file()
    }

    fn read_feed_snapshot(&self, url: &str) -> Result<Vec<u8>> {
        fs::read(self.snapshot_path(url)).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ReaderError::NotFound(url.to_string()),
            _ => ReaderError::Io(e),
        })
    }

    fn write_feed_snapshot(&self, url: &str, body: &[u8]) -> Result<()> {
        let path = self.snapshot_path(url);
        fs::write(&path, body)?;
        debug!("Stored feed snapshot of {} at {}", url, path.display());
        Ok(())
    }

    fn delete_feed_snapshot(&self, url: &str) -> Result<()> {
        remove_if_present(&self.snapshot_path(url))
    }
}
