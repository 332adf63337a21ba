//! Error taxonomy for the lookup pipeline.
//!
//! Two families live here. [`LookupError`] is what a whole artist lookup
//! can fail with and is surfaced to HTTP clients. [`SearchFailure`] is the
//! outcome of a single video search and never leaves the link resolver:
//! it only degrades one track to "no link".

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    /// The metadata service answered with a non-success status.
    #[error("metadata service returned status {status}")]
    UpstreamUnavailable { status: u16 },

    /// An expected field was absent from an otherwise successful response.
    #[error("unexpected response structure: {0}")]
    MalformedResponse(String),

    /// The metadata service could not be reached at all.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("link cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl LookupError {
    /// HTTP status reported to the caller of the pipeline.
    pub fn status(&self) -> StatusCode {
        match self {
            LookupError::UpstreamUnavailable { status } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            LookupError::Http(_) => StatusCode::BAD_GATEWAY,
            LookupError::MalformedResponse(_)
            | LookupError::Config(_)
            | LookupError::Cache(_)
            | LookupError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(status = status.as_u16(), error = %self, "lookup failed");
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Why a single video search produced no identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchFailure {
    #[error("search quota exceeded")]
    QuotaExceeded,
    #[error("search returned no results")]
    NoResults,
    #[error("search transport error (status {status:?})")]
    Transport { status: Option<u16> },
    #[error("malformed search response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("serde error: {0}")]
    SerdeError(#[from] serde_json::Error),
}
