//! # YouTube Integration Module
//!
//! Wraps the YouTube Data API search endpoint behind the [`VideoSearch`]
//! capability used by the link resolver.
//!
//! ## Contract
//!
//! One call to [`VideoSearch::search`] issues exactly one HTTP request.
//! Retries and fallback queries are the caller's business. Every failure
//! comes back as a [`SearchFailure`] value:
//!
//! - `403` → [`SearchFailure::QuotaExceeded`] (the daily quota is spent)
//! - other non-success statuses or network errors → [`SearchFailure::Transport`]
//! - success without items → [`SearchFailure::NoResults`]
//! - first item without `id.videoId` → [`SearchFailure::MalformedResponse`]
//!
//! ## Endpoint
//!
//! `GET /youtube/v3/search?part=snippet&q=...&maxResults=1&type=video&key=...`

mod search;

use async_trait::async_trait;

use crate::error::SearchFailure;

pub use search::YouTubeClient;

/// Resolves a free-text query to the identifier of the best matching video.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<String, SearchFailure>;
}
