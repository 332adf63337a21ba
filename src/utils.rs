use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use reqwest::{Client, header};

use crate::error::LookupError;

pub const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Key under which a resolved link is stored in the link cache file.
///
/// This is a plain underscore join, so `("a_b", "c")` and `("a", "b_c")`
/// share a key. The persisted format depends on it; do not change the
/// encoding without migrating existing cache files.
pub fn cache_key(artist: &str, track: &str) -> String {
    format!("{artist}_{track}")
}

pub fn build_search_query(track: &str, artist: &str, keyword: &str) -> String {
    format!("{track} {artist} {keyword}")
}

pub fn watch_url(video_id: &str) -> String {
    format!("{YOUTUBE_WATCH_URL}{video_id}")
}

/// Parses the `wiki.published` stamp Last.fm attaches to track info,
/// e.g. `27 Jul 2022, 11:10`. Date-only stamps are accepted as well.
pub fn parse_published_date(published: &str) -> Option<NaiveDate> {
    let published = published.trim();
    NaiveDateTime::parse_from_str(published, "%d %b %Y, %H:%M")
        .map(|dt| dt.date())
        .or_else(|_| NaiveDate::parse_from_str(published, "%d %b %Y"))
        .or_else(|_| NaiveDate::parse_from_str(published, "%Y-%m-%d"))
        .ok()
}

pub fn format_release_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Shared HTTP client for both upstream APIs. The timeout bounds every
/// external call on the enrichment path.
pub fn http_client(timeout: Duration) -> Result<Client, LookupError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/json"),
    );

    Client::builder()
        .timeout(timeout)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .default_headers(headers)
        .build()
        .map_err(|e| LookupError::Config(format!("build http client: {e}")))
}
