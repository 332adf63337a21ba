use tabled::Table;

use crate::{config, error, lastfm::LastFmClient, types::SimilarArtistTableRow, utils, warning};

use super::spinner;

pub async fn similar(artist: String) {
    let client = match utils::http_client(config::http_timeout())
        .and_then(LastFmClient::from_env)
    {
        Ok(client) => client,
        Err(e) => error!("Cannot set up Last.fm client. Err: {}", e),
    };

    let pb = spinner(format!("Looking up artists similar to {artist}..."));
    let result = client.get_similar_artists(&artist).await;
    pb.finish_and_clear();

    let similar = match result {
        Ok(similar) => similar,
        Err(e) => error!("Cannot look up similar artists. Err: {}", e),
    };

    if similar.is_empty() {
        warning!("No similar artists found for {}", artist);
        return;
    }

    let rows: Vec<SimilarArtistTableRow> = similar
        .into_iter()
        .map(|a| SimilarArtistTableRow {
            name: a.name,
            url: a.url.unwrap_or_default(),
        })
        .collect();
    println!("{}", Table::new(rows));
}
