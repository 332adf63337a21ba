use crate::{
    error::LookupError,
    types::{ArtistInfoResponse, SimilarArtist},
};

use super::LastFmClient;

impl LastFmClient {
    /// Similar artists as listed in `artist.getInfo`.
    ///
    /// A missing `artist` object is a contract change and is reported as
    /// malformed; a missing `similar` block just means there are none.
    pub async fn get_similar_artists(
        &self,
        artist: &str,
    ) -> Result<Vec<SimilarArtist>, LookupError> {
        let res: ArtistInfoResponse = self.call("artist.getInfo", &[("artist", artist)]).await?;

        let info = res.artist.ok_or_else(|| {
            LookupError::MalformedResponse("missing key 'artist'".to_string())
        })?;

        Ok(info.similar.map(|s| s.artist).unwrap_or_default())
    }
}
