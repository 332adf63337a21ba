use std::sync::Arc;

use crate::{config, error, info, server, server::AppState};

pub async fn serve() {
    let state = match AppState::from_env().await {
        Ok(state) => Arc::new(state),
        Err(e) => error!("Cannot start server. Err: {}", e),
    };

    let cached = state.cache().count().await;
    info!(
        "Serving on http://{} with {} cached links",
        config::server_addr(),
        cached
    );

    if let Err(e) = server::start_api_server(state).await {
        error!("Server stopped unexpectedly. Err: {}", e);
    }
}
