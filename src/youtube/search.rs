use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::{config, error::LookupError, error::SearchFailure, types::VideoSearchResponse};

use super::VideoSearch;

#[derive(Debug, Clone)]
pub struct YouTubeClient {
    http: Client,
    api_url: String,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(http: Client, api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Builds a client from `YOUTUBE_API_URL` / `YOUTUBE_API_KEY`.
    pub fn from_env(http: Client) -> Result<Self, LookupError> {
        Ok(Self::new(
            http,
            config::youtube_api_url(),
            config::youtube_api_key()?,
        ))
    }
}

#[async_trait]
impl VideoSearch for YouTubeClient {
    async fn search(&self, query: &str) -> Result<String, SearchFailure> {
        tracing::info!(query, "requesting youtube search");

        let response = self
            .http
            .get(&self.api_url)
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("key", self.api_key.as_str()),
                ("maxResults", "1"),
                ("type", "video"),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(query, error = %e, "youtube search transport failure");
                SearchFailure::Transport {
                    status: e.status().map(|s| s.as_u16()),
                }
            })?;

        let status = response.status();
        tracing::info!(query, status = status.as_u16(), "youtube search responded");

        if status == StatusCode::FORBIDDEN {
            tracing::error!(query, "youtube search quota exceeded");
            return Err(SearchFailure::QuotaExceeded);
        }
        if !status.is_success() {
            tracing::error!(query, status = status.as_u16(), "youtube search failed");
            return Err(SearchFailure::Transport {
                status: Some(status.as_u16()),
            });
        }

        let body = response.json::<VideoSearchResponse>().await.map_err(|e| {
            tracing::error!(query, error = %e, "youtube search body unreadable");
            SearchFailure::MalformedResponse(e.to_string())
        })?;

        let Some(first) = body.items.into_iter().next() else {
            tracing::warn!(query, "no youtube video found");
            return Err(SearchFailure::NoResults);
        };

        first.id.video_id.ok_or_else(|| {
            tracing::error!(query, "youtube item without videoId");
            SearchFailure::MalformedResponse("items[0].id.videoId missing".to_string())
        })
    }
}
