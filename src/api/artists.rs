use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;

use crate::{
    error::LookupError,
    server::AppState,
    service,
    types::{ArtistInfoPage, SortMode, TopTracksPage},
};

#[derive(Debug, Deserialize)]
pub struct ArtistInfoQuery {
    pub artist_name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TopTracksQuery {
    #[serde(default)]
    pub sort: SortMode,
}

pub async fn artist_info(
    Query(query): Query<ArtistInfoQuery>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<ArtistInfoPage>, LookupError> {
    let page = service::artist_info(state.metadata.as_ref(), &query.artist_name).await?;
    Ok(Json(page))
}

pub async fn top_tracks(
    Path(artist_name): Path<String>,
    Query(query): Query<TopTracksQuery>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<TopTracksPage>, LookupError> {
    let page = service::top_tracks(
        state.metadata.as_ref(),
        &state.resolver,
        &artist_name,
        query.sort,
    )
    .await?;
    Ok(Json(page))
}
