//! Video link resolution.
//!
//! For one (artist, track) pair the resolver walks, in order:
//!
//! 1. the override table (returned as is, never copied into the cache)
//! 2. the link cache
//! 3. a search with the fancam keyword
//! 4. a search with the music-video keyword
//!
//! The first hit wins. Search hits are written to the cache. Misses are
//! not, so a later request searches again once new videos exist.

use std::sync::Arc;

use crate::{
    config,
    error::SearchFailure,
    management::{LinkCacheManager, OverrideTable},
    utils,
    youtube::VideoSearch,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryKeywords {
    pub primary: String,
    pub fallback: String,
}

impl Default for QueryKeywords {
    fn default() -> Self {
        Self {
            primary: config::DEFAULT_PRIMARY_KEYWORD.to_string(),
            fallback: config::DEFAULT_FALLBACK_KEYWORD.to_string(),
        }
    }
}

impl QueryKeywords {
    pub fn from_env() -> Self {
        Self {
            primary: config::primary_keyword(),
            fallback: config::fallback_keyword(),
        }
    }
}

pub struct LinkResolver {
    overrides: OverrideTable,
    cache: Arc<LinkCacheManager>,
    search: Arc<dyn VideoSearch>,
    keywords: QueryKeywords,
}

impl LinkResolver {
    pub fn new(
        overrides: OverrideTable,
        cache: Arc<LinkCacheManager>,
        search: Arc<dyn VideoSearch>,
        keywords: QueryKeywords,
    ) -> Self {
        Self {
            overrides,
            cache,
            search,
            keywords,
        }
    }

    pub fn cache(&self) -> &Arc<LinkCacheManager> {
        &self.cache
    }

    /// Best-effort video URL for `track` by `artist`, or `None` when every
    /// source came up empty.
    pub async fn resolve(&self, artist: &str, track: &str) -> Option<String> {
        if let Some(url) = self.overrides.lookup(artist, track) {
            tracing::debug!(artist, track, "override hit");
            return Some(url.to_string());
        }

        if let Some(url) = self.cache.get(artist, track).await {
            tracing::debug!(artist, track, "cache hit");
            return Some(url);
        }

        let primary = utils::build_search_query(track, artist, &self.keywords.primary);
        match self.search.search(&primary).await {
            Ok(video_id) => return Some(self.remember(artist, track, &video_id).await),
            // a spent quota fails the fallback too
            Err(SearchFailure::QuotaExceeded) => {
                tracing::warn!(artist, track, "quota exceeded, skipping fallback search");
                return None;
            }
            Err(failure) => {
                tracing::info!(artist, track, %failure, "primary search missed, trying fallback");
            }
        }

        let fallback = utils::build_search_query(track, artist, &self.keywords.fallback);
        match self.search.search(&fallback).await {
            Ok(video_id) => Some(self.remember(artist, track, &video_id).await),
            Err(failure) => {
                tracing::warn!(artist, track, %failure, "no video link found");
                None
            }
        }
    }

    async fn remember(&self, artist: &str, track: &str, video_id: &str) -> String {
        let url = utils::watch_url(video_id);
        self.cache.put(artist, track, url.clone()).await;
        url
    }
}
