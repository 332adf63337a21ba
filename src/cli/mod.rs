//! # CLI Module
//!
//! Command-line front-end for fancam. Each command is a thin wrapper over
//! the same pieces the HTTP server uses, printing tables instead of JSON.
//!
//! ## Commands
//!
//! - [`serve`] - Runs the HTTP server until Ctrl-C, then flushes the link cache
//! - [`top_tracks`] - Top tracks of an artist with resolved video links
//! - [`similar`] - Similar artists of an artist
//! - [`cache`] - Lists the persisted link cache
//!
//! ## Usage Patterns
//!
//! ```bash
//! fancam serve                          # start the backend
//! fancam top-tracks NewJeans            # ranked by play count
//! fancam top-tracks NewJeans --sort latest
//! fancam similar NewJeans
//! fancam cache --search newjeans        # what has been resolved so far
//! ```
//!
//! ## Error Handling
//!
//! Fatal problems (missing API keys, unreachable Last.fm) print a red
//! message and exit with status 1. A link cache that cannot be written is
//! only a warning.

mod cache;
mod serve;
mod similar;
mod top_tracks;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use cache::cache;
pub use serve::serve;
pub use similar::similar;
pub use top_tracks::top_tracks;

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
