//! End-to-end lookups shared by the HTTP handlers and the CLI.

use crate::{
    error::LookupError,
    lastfm::MetadataSource,
    resolver::LinkResolver,
    selector,
    types::{ArtistInfoPage, SortMode, TopTracksPage},
};

/// Top tracks of `artist`, ranked by `sort`, with video links on the
/// leading tracks.
///
/// Metadata failures abort the lookup. Search failures never do; they only
/// leave a track without a link.
pub async fn top_tracks(
    metadata: &dyn MetadataSource,
    resolver: &LinkResolver,
    artist: &str,
    sort: SortMode,
) -> Result<TopTracksPage, LookupError> {
    let tracks = metadata.top_tracks(artist).await?;
    tracing::info!(artist, tracks = tracks.len(), %sort, "top tracks fetched");

    let mut selection = selector::select(tracks, sort, metadata).await;
    for track in selection.enrich.iter_mut() {
        track.video_link = resolver.resolve(artist, &track.name).await;
    }

    Ok(TopTracksPage {
        artist_name: artist.to_string(),
        sort,
        top_tracks: selection.into_tracks(),
    })
}

pub async fn artist_info(
    metadata: &dyn MetadataSource,
    artist: &str,
) -> Result<ArtistInfoPage, LookupError> {
    let similar_artists = metadata.similar_artists(artist).await?;
    Ok(ArtistInfoPage {
        artist_name: artist.to_string(),
        similar_artists,
    })
}
