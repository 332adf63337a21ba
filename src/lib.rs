//! Fancam Finder Library
//!
//! Backend for looking up an artist's top tracks on Last.fm and attaching
//! a fan-recorded performance video from YouTube to the leading ones.
//! Resolved links are memoised in a JSON file so the search quota is spent
//! once per track.
//!
//! # Modules
//!
//! - `api` - HTTP handlers (JSON)
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration from environment variables and `.env` files
//! - `error` - Error types of the lookup pipeline
//! - `lastfm` - Last.fm metadata client
//! - `logging` - Tracing subscriber setup
//! - `management` - Override table and persistent link cache
//! - `resolver` - Video link resolution (override, cache, search)
//! - `selector` - Ranking and enrichment selection of top tracks
//! - `server` - Application state, router and server lifecycle
//! - `service` - End-to-end lookups shared by API and CLI
//! - `types` - Data structures and wire shapes
//! - `utils` - Small helpers (cache keys, queries, dates, HTTP client)
//! - `youtube` - YouTube search client
//!
//! # Example
//!
//! ```
//! use fancam::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> fancam::Res<()> {
//!     config::load_env().await.ok();
//!     let state = std::sync::Arc::new(server::AppState::from_env().await?);
//!     server::start_api_server(state).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod lastfm;
pub mod logging;
pub mod management;
pub mod resolver;
pub mod selector;
pub mod server;
pub mod service;
pub mod types;
pub mod utils;
pub mod youtube;

/// Result of anything that can fail a whole lookup.
pub type Res<T> = std::result::Result<T, error::LookupError>;

// Coloured CLI output. Server code logs through `tracing` instead.

/// `[o] message` in blue, for progress and status lines.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// `[✓] message` in green.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints `[!] message` in red and exits with status 1.
///
/// Only for fatal CLI errors; the expression diverges, so it can stand in
/// for any value in a `match` arm:
///
/// ```ignore
/// let state = match AppState::from_env().await {
///     Ok(state) => state,
///     Err(e) => error!("Cannot start server. Err: {}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// `[!] message` in yellow, for recoverable problems.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
