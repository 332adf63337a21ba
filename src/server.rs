use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{Extension, Router, routing::get};

use crate::{
    Res,
    api, config,
    error::LookupError,
    lastfm::{LastFmClient, MetadataSource},
    management::{LinkCacheManager, OverrideTable},
    resolver::{LinkResolver, QueryKeywords},
    utils,
    youtube::{VideoSearch, YouTubeClient},
};

/// Everything a request needs, built once per process.
pub struct AppState {
    pub metadata: Arc<dyn MetadataSource>,
    pub resolver: LinkResolver,
}

impl AppState {
    pub fn new(metadata: Arc<dyn MetadataSource>, resolver: LinkResolver) -> Self {
        Self { metadata, resolver }
    }

    /// Wires the Last.fm and YouTube clients, the override table and the
    /// link cache from the environment.
    ///
    /// # Errors
    ///
    /// Fails on missing API keys, an unreadable override file, or a link
    /// cache file that exists but cannot be parsed.
    pub async fn from_env() -> Res<Self> {
        let http = utils::http_client(config::http_timeout())?;
        let metadata: Arc<dyn MetadataSource> = Arc::new(LastFmClient::from_env(http.clone())?);
        let search: Arc<dyn VideoSearch> = Arc::new(YouTubeClient::from_env(http)?);

        let overrides = match config::overrides_path() {
            Some(path) => OverrideTable::load_with_file(&path).await?,
            None => OverrideTable::builtin(),
        };
        let cache = Arc::new(LinkCacheManager::load_default().await?);

        let resolver = LinkResolver::new(overrides, cache, search, QueryKeywords::from_env());
        Ok(Self::new(metadata, resolver))
    }

    pub fn cache(&self) -> &Arc<LinkCacheManager> {
        self.resolver.cache()
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/artist_info", get(api::artist_info))
        .route("/artist/{artist_name}/toptracks", get(api::top_tracks))
        .layer(Extension(state))
}

/// Serves until Ctrl-C, then flushes the link cache.
pub async fn start_api_server(state: Arc<AppState>) -> Res<()> {
    let addr = SocketAddr::from_str(&config::server_addr())
        .map_err(|e| LookupError::Config(format!("invalid SERVER_ADDRESS: {e}")))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, version = env!("CARGO_PKG_VERSION"), "fancam listening");

    axum::serve(listener, router(Arc::clone(&state)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    flush_cache(state.cache()).await;
    Ok(())
}

/// Writes the cache to disk. A failure is logged and swallowed: losing the
/// cache only costs extra searches later.
pub async fn flush_cache(cache: &LinkCacheManager) -> bool {
    match cache.flush().await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(path = %cache.path().display(), error = %e, "failed to flush link cache");
            false
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
