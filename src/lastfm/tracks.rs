use chrono::NaiveDate;

use crate::{
    error::LookupError,
    types::{TopTracksResponse, TrackInfoResponse, TrackRecord},
    utils,
};

use super::LastFmClient;

impl LastFmClient {
    /// Retrieves the top tracks of an artist via `artist.getTopTracks`.
    ///
    /// Tracks come back in Last.fm's order with their play counts. The
    /// track's own artist name is used when present, otherwise the name
    /// that was asked for.
    ///
    /// A body without a `toptracks` key (Last.fm does this for unknown
    /// artists) yields an empty list rather than an error.
    ///
    /// # Errors
    ///
    /// - [`LookupError::UpstreamUnavailable`] on a non-success status
    /// - [`LookupError::MalformedResponse`] when a track entry lacks its name
    /// - [`LookupError::Http`] when Last.fm cannot be reached
    pub async fn get_top_tracks(&self, artist: &str) -> Result<Vec<TrackRecord>, LookupError> {
        let res: TopTracksResponse = self
            .call("artist.getTopTracks", &[("artist", artist)])
            .await?;

        let Some(top) = res.toptracks else {
            tracing::error!(artist, "no top tracks found");
            return Ok(Vec::new());
        };

        Ok(top
            .track
            .into_iter()
            .map(|t| {
                let track_artist = t
                    .artist
                    .map(|a| a.name)
                    .unwrap_or_else(|| artist.to_string());
                TrackRecord::new(t.name, track_artist, t.playcount)
            })
            .collect())
    }

    /// Looks up `track.getInfo` and parses `wiki.published`.
    pub async fn get_release_date(
        &self,
        artist: &str,
        track: &str,
    ) -> Result<Option<NaiveDate>, LookupError> {
        let res: TrackInfoResponse = self
            .call("track.getInfo", &[("artist", artist), ("track", track)])
            .await?;

        Ok(res
            .track
            .and_then(|t| t.wiki)
            .and_then(|w| w.published)
            .and_then(|p| utils::parse_published_date(&p)))
    }
}
