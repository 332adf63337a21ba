use tabled::Table;

use crate::{
    error, selector, server,
    server::AppState,
    service, success,
    types::{SortMode, TrackTableRow},
    utils, warning,
};

use super::spinner;

/// Prints the top tracks of `artist` with video links for the leading ones.
///
/// Runs the same pipeline as `GET /artist/{artist}/toptracks` and flushes
/// the link cache afterwards so the next run starts warm.
pub async fn top_tracks(artist: String, sort: SortMode) {
    let state = match AppState::from_env().await {
        Ok(state) => state,
        Err(e) => error!("Cannot set up lookup. Err: {}", e),
    };

    let pb = spinner(format!("Looking up top tracks for {artist}..."));
    let result =
        service::top_tracks(state.metadata.as_ref(), &state.resolver, &artist, sort).await;
    pb.finish_and_clear();

    let page = match result {
        Ok(page) => page,
        Err(e) => error!("Cannot look up top tracks for {}. Err: {}", artist, e),
    };

    if !server::flush_cache(state.cache()).await {
        warning!(
            "Failed to write link cache to {}",
            state.cache().path().display()
        );
    }

    if page.top_tracks.is_empty() {
        warning!("No top tracks found for {}", artist);
        return;
    }

    let enriched = page.top_tracks.len().min(selector::ENRICH_COUNT);
    let resolved = page
        .top_tracks
        .iter()
        .filter(|t| t.video_link.is_some())
        .count();

    let rows: Vec<TrackTableRow> = page
        .top_tracks
        .into_iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow {
            rank: i + 1,
            name: t.name,
            playcount: t.playcount,
            released: utils::format_release_date(t.release_date),
            video: t.video_link.unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    println!("{}", Table::new(rows));
    success!(
        "Found video links for {} of {} tracks (sorted by {})",
        resolved,
        enriched,
        sort
    );
}
