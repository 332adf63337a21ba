//! Configuration management for the fancam backend.
//!
//! Values come from environment variables, optionally seeded from `.env`
//! files. The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the current working directory
//! 3. `.env` in the local data directory (`fancam/.env`)
//! 4. Application defaults (where applicable)
//!
//! API keys have no default; asking for one that is unset yields a
//! [`LookupError::Config`] instead of a panic.

use std::{env, path::PathBuf, time::Duration};

use crate::error::LookupError;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8000";
pub const DEFAULT_LASTFM_API_URL: &str = "http://ws.audioscrobbler.com/2.0/";
pub const DEFAULT_YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3/search";
pub const DEFAULT_PRIMARY_KEYWORD: &str = "직캠";
pub const DEFAULT_FALLBACK_KEYWORD: &str = "MV";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from `.env` files.
///
/// The working-directory `.env` is read first so it wins over the one in
/// the local data directory; `dotenv` never overrides variables that are
/// already set. Missing files are skipped silently.
///
/// # Directory Structure
///
/// The data directory `.env` is looked up in:
/// - Linux: `~/.local/share/fancam/.env`
/// - macOS: `~/Library/Application Support/fancam/.env`
/// - Windows: `%LOCALAPPDATA%/fancam/.env`
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if let Err(e) = dotenv::dotenv() {
        if !e.not_found() {
            return Err(e.to_string());
        }
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Root of everything fancam keeps on disk.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("fancam");
    path
}

/// Address the HTTP server binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    env_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Last.fm API key (`LASTFM_API_KEY`).
///
/// # Errors
///
/// Returns [`LookupError::Config`] when the variable is unset or empty.
pub fn lastfm_api_key() -> Result<String, LookupError> {
    required("LASTFM_API_KEY")
}

/// Base URL of the Last.fm REST endpoint (`LASTFM_API_URL`).
pub fn lastfm_api_url() -> String {
    env_or("LASTFM_API_URL", DEFAULT_LASTFM_API_URL)
}

/// YouTube Data API key (`YOUTUBE_API_KEY`).
///
/// # Errors
///
/// Returns [`LookupError::Config`] when the variable is unset or empty.
pub fn youtube_api_key() -> Result<String, LookupError> {
    required("YOUTUBE_API_KEY")
}

/// YouTube search endpoint (`YOUTUBE_API_URL`).
pub fn youtube_api_url() -> String {
    env_or("YOUTUBE_API_URL", DEFAULT_YOUTUBE_API_URL)
}

/// Location of the persisted link cache (`FANCAM_LINK_CACHE`).
///
/// Defaults to `cache/youtube-links.json` below [`data_dir`].
pub fn link_cache_path() -> PathBuf {
    match env::var("FANCAM_LINK_CACHE") {
        Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => data_dir().join("cache/youtube-links.json"),
    }
}

/// Optional JSON file with extra overrides (`FANCAM_OVERRIDES`).
pub fn overrides_path() -> Option<PathBuf> {
    env::var("FANCAM_OVERRIDES")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}

/// Keyword appended to the first, narrow search (`FANCAM_PRIMARY_KEYWORD`).
pub fn primary_keyword() -> String {
    env_or("FANCAM_PRIMARY_KEYWORD", DEFAULT_PRIMARY_KEYWORD)
}

/// Keyword appended to the broader fallback search (`FANCAM_FALLBACK_KEYWORD`).
pub fn fallback_keyword() -> String {
    env_or("FANCAM_FALLBACK_KEYWORD", DEFAULT_FALLBACK_KEYWORD)
}

/// Per-request deadline for upstream calls (`HTTP_TIMEOUT_SECS`).
///
/// Unparsable or zero values fall back to the default.
pub fn http_timeout() -> Duration {
    let secs = env::var("HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|s| *s > 0)
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

pub fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}

fn required(key: &str) -> Result<String, LookupError> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(LookupError::Config(format!("{key} must be set"))),
    }
}
