use std::{
    collections::HashMap,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tokio::sync::RwLock;

use crate::{config, error::CacheError, utils};

/// Durable memo of resolved video links, keyed by `"<artist>_<track>"`.
///
/// Entries are never expired. `put` only touches memory; the whole mapping
/// is written back by `flush`, which the server calls once on shutdown.
/// Concurrent `put`s for the same key are last-writer-wins.
pub struct LinkCacheManager {
    path: PathBuf,
    links: RwLock<HashMap<String, String>>,
}

impl LinkCacheManager {
    pub fn new(path: impl Into<PathBuf>, links: Option<HashMap<String, String>>) -> Self {
        Self {
            path: path.into(),
            links: RwLock::new(links.unwrap_or_default()),
        }
    }

    /// Reads the cache file at `path`. A missing file yields an empty cache.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let path = path.into();
        let content = match async_fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no link cache on disk, starting empty");
                return Ok(Self::new(path, None));
            }
            Err(e) => return Err(CacheError::IoError(e)),
        };

        let links: HashMap<String, String> = serde_json::from_str(&content)?;
        tracing::info!(path = %path.display(), entries = links.len(), "link cache loaded");
        Ok(Self::new(path, Some(links)))
    }

    pub async fn load_default() -> Result<Self, CacheError> {
        Self::load(config::link_cache_path()).await
    }

    pub async fn get(&self, artist: &str, track: &str) -> Option<String> {
        self.links
            .read()
            .await
            .get(&utils::cache_key(artist, track))
            .cloned()
    }

    pub async fn put(&self, artist: &str, track: &str, url: String) {
        self.links
            .write()
            .await
            .insert(utils::cache_key(artist, track), url);
    }

    /// Overwrites the cache file with the full in-memory mapping.
    ///
    /// The write lock is held for the whole write so no `put` lands between
    /// serialisation and the file hitting disk.
    pub async fn flush(&self) -> Result<(), CacheError> {
        let links = self.links.write().await;
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&*links)?;
        async_fs::write(&self.path, json).await?;
        tracing::info!(path = %self.path.display(), entries = links.len(), "link cache flushed");
        Ok(())
    }

    pub async fn count(&self) -> usize {
        self.links.read().await.len()
    }

    pub async fn all(&self) -> HashMap<String, String> {
        self.links.read().await.clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
