use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{config, error::LookupError};

#[derive(Debug, Clone)]
pub struct LastFmClient {
    http: Client,
    api_url: String,
    api_key: String,
}

impl LastFmClient {
    pub fn new(http: Client, api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Builds a client from `LASTFM_API_URL` / `LASTFM_API_KEY`.
    pub fn from_env(http: Client) -> Result<Self, LookupError> {
        Ok(Self::new(
            http,
            config::lastfm_api_url(),
            config::lastfm_api_key()?,
        ))
    }

    /// Calls one Last.fm method and decodes the JSON body into `T`.
    pub(super) async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &[(&str, &str)],
    ) -> Result<T, LookupError> {
        let response = self
            .http
            .get(&self.api_url)
            .query(&[
                ("method", method),
                ("api_key", self.api_key.as_str()),
                ("format", "json"),
            ])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(method, status = status.as_u16(), "last.fm request failed");
            return Err(LookupError::UpstreamUnavailable {
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!(method, error = %e, "last.fm response did not match");
            LookupError::MalformedResponse(format!("{method}: {e}"))
        })
    }
}
