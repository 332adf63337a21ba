//! # API Module
//!
//! HTTP endpoints of the fancam backend. All responses are JSON.
//!
//! ## Endpoints
//!
//! - [`health`] - `GET /health`, status and version for monitoring.
//! - [`artist_info`] - `GET /artist_info?artist_name=...`, similar artists
//!   of an artist.
//! - [`top_tracks`] - `GET /artist/{artist_name}/toptracks?sort=...`, the
//!   artist's top tracks ranked by `popularity` (default) or `latest`, the
//!   first five carrying a `video_link`.
//!
//! ## Errors
//!
//! Handlers return [`crate::error::LookupError`], which renders as
//! `{ "detail": "..." }`. A failing metadata call is reflected with the
//! upstream's status; a response with an unexpected shape is a 500. Video
//! search problems never fail a request.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use fancam::server::{AppState, router};
//!
//! let state = Arc::new(AppState::from_env().await?);
//! let app = router(state);
//! ```

mod artists;
mod health;

pub use artists::{ArtistInfoQuery, TopTracksQuery, artist_info, top_tracks};
pub use health::health;
