use std::fmt;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

/// A ranked top track, optionally enriched with a video link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub name: String,
    pub artist: String,
    pub playcount: u64,
    /// `None` sorts as the earliest possible date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_link: Option<String>,
}

impl TrackRecord {
    pub fn new(name: impl Into<String>, artist: impl Into<String>, playcount: u64) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            playcount,
            release_date: None,
            video_link: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Popularity,
    Latest,
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::Popularity => write!(f, "popularity"),
            SortMode::Latest => write!(f, "latest"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksPage {
    pub artist_name: String,
    pub sort: SortMode,
    pub top_tracks: Vec<TrackRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistInfoPage {
    pub artist_name: String,
    pub similar_artists: Vec<SimilarArtist>,
}

// Last.fm wire shapes

#[derive(Debug, Clone, Deserialize)]
pub struct TopTracksResponse {
    pub toptracks: Option<TopTracks>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopTracks {
    #[serde(default)]
    pub track: Vec<LastFmTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LastFmTrack {
    pub name: String,
    // Last.fm sends counts as strings
    #[serde(default, deserialize_with = "de_count")]
    pub playcount: u64,
    pub artist: Option<LastFmArtistRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LastFmArtistRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackInfoResponse {
    pub track: Option<TrackInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackInfo {
    pub wiki: Option<Wiki>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wiki {
    pub published: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistInfoResponse {
    pub artist: Option<ArtistInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistInfo {
    pub similar: Option<SimilarArtists>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimilarArtists {
    #[serde(default)]
    pub artist: Vec<SimilarArtist>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarArtist {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

// YouTube wire shapes

#[derive(Debug, Clone, Deserialize)]
pub struct VideoSearchResponse {
    #[serde(default)]
    pub items: Vec<VideoSearchItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoSearchItem {
    pub id: VideoSearchItemId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoSearchItemId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

/// One line of an external override file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverrideEntry {
    pub artist: String,
    pub track: String,
    pub url: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub rank: usize,
    pub name: String,
    pub playcount: u64,
    pub released: String,
    pub video: String,
}

#[derive(Tabled)]
pub struct SimilarArtistTableRow {
    pub name: String,
    pub url: String,
}

#[derive(Tabled)]
pub struct CachedLinkTableRow {
    pub key: String,
    pub link: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Count {
    Number(u64),
    Text(String),
}

fn de_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Count::deserialize(deserializer)? {
        Count::Number(n) => Ok(n),
        Count::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
