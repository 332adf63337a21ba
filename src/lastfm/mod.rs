//! # Last.fm Integration Module
//!
//! The metadata collaborator of the lookup pipeline. It answers three
//! questions about an artist: which tracks are most played, when a given
//! track was published, and which artists are similar.
//!
//! ## Architecture
//!
//! ```text
//! service (pipelines)
//!          ↓
//! MetadataSource (trait)
//!          ↓
//! LastFmClient
//!     ├── tracks   (artist.getTopTracks, track.getInfo)
//!     └── artists  (artist.getInfo → similar)
//!          ↓
//! reqwest → ws.audioscrobbler.com/2.0/
//! ```
//!
//! ## Error Handling
//!
//! Non-success statuses become [`LookupError::UpstreamUnavailable`] carrying
//! the upstream status, so the HTTP layer can reflect it. Bodies that do not
//! match the expected shape become [`LookupError::MalformedResponse`].
//! Nothing is retried.

mod artists;
mod client;
mod tracks;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    error::LookupError,
    types::{SimilarArtist, TrackRecord},
};

pub use client::LastFmClient;

#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Top tracks of `artist` in upstream order, without release dates.
    async fn top_tracks(&self, artist: &str) -> Result<Vec<TrackRecord>, LookupError>;

    /// Publication date of a single track, if upstream knows one.
    async fn release_date(&self, artist: &str, track: &str)
    -> Result<Option<NaiveDate>, LookupError>;

    async fn similar_artists(&self, artist: &str) -> Result<Vec<SimilarArtist>, LookupError>;
}

#[async_trait]
impl MetadataSource for LastFmClient {
    async fn top_tracks(&self, artist: &str) -> Result<Vec<TrackRecord>, LookupError> {
        self.get_top_tracks(artist).await
    }

    async fn release_date(
        &self,
        artist: &str,
        track: &str,
    ) -> Result<Option<NaiveDate>, LookupError> {
        self.get_release_date(artist, track).await
    }

    async fn similar_artists(&self, artist: &str) -> Result<Vec<SimilarArtist>, LookupError> {
        self.get_similar_artists(artist).await
    }
}
