//! Ranking of top tracks and the split into enrich / pass-through sets.

use chrono::NaiveDate;

use crate::{
    lastfm::MetadataSource,
    types::{SortMode, TrackRecord},
};

/// Number of leading tracks that get a video link resolved.
pub const ENRICH_COUNT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub enrich: Vec<TrackRecord>,
    pub passthrough: Vec<TrackRecord>,
}

impl Selection {
    /// Both sets in ranked order.
    pub fn into_tracks(self) -> Vec<TrackRecord> {
        let mut tracks = self.enrich;
        tracks.extend(self.passthrough);
        tracks
    }
}

/// Ranks `tracks` and splits off the first [`ENRICH_COUNT`].
///
/// For [`SortMode::Latest`] every track's release date is looked up first,
/// one metadata call per track. A failed lookup leaves the date missing
/// and the track sorts last. Empty input makes no calls.
pub async fn select(
    mut tracks: Vec<TrackRecord>,
    mode: SortMode,
    metadata: &dyn MetadataSource,
) -> Selection {
    if mode == SortMode::Latest {
        for track in tracks.iter_mut() {
            match metadata.release_date(&track.artist, &track.name).await {
                Ok(date) => track.release_date = date,
                Err(e) => {
                    tracing::warn!(artist = %track.artist, track = %track.name, error = %e, "release date lookup failed");
                    track.release_date = None;
                }
            }
        }
    }

    rank(&mut tracks, mode);
    partition(tracks, ENRICH_COUNT)
}

/// Stable sort, so ties keep their input order.
pub fn rank(tracks: &mut [TrackRecord], mode: SortMode) {
    match mode {
        SortMode::Popularity => tracks.sort_by(|a, b| b.playcount.cmp(&a.playcount)),
        SortMode::Latest => tracks.sort_by(|a, b| release_key(b).cmp(&release_key(a))),
    }
}

pub fn partition(mut tracks: Vec<TrackRecord>, enrich_count: usize) -> Selection {
    let mut passthrough = tracks.split_off(enrich_count.min(tracks.len()));
    for track in passthrough.iter_mut() {
        track.video_link = None;
    }
    Selection {
        enrich: tracks,
        passthrough,
    }
}

fn release_key(track: &TrackRecord) -> NaiveDate {
    track.release_date.unwrap_or(NaiveDate::MIN)
}
