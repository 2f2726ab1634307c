use axum::{
    Extension, Router,
    routing::{any, get},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, config, error, genius::GeniusClient, info, types::AppState};

/// Builds the service router. Every path except `/health` belongs to the
/// lyrics endpoint, which performs its own method filtering.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/", any(api::lyrics))
        .route("/{*query}", any(api::lyrics))
        .layer(Extension(state))
}

pub async fn start_api_server() {
    let state = Arc::new(AppState {
        proxy_secret: config::rapidapi_proxy_secret(),
        enforce_ip_allowlist: config::enforce_ip_allowlist(),
        genius: GeniusClient::from_env(),
    });

    if state.enforce_ip_allowlist {
        info!("Source-IP allowlist enforcement is enabled");
    }

    let app = router(state);

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    info!("Listening on {}", addr);

    // ConnectInfo supplies the peer address the allowlist falls back to when
    // no x-forwarded-for header is present.
    if let Err(e) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    {
        error!("Server error: {}", e);
    }
}
