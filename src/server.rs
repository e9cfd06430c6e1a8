use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{Error, Res, api, config::Config, management::AppState, success};

/// Builds the HTTP router with all service routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/auth-url", get(api::auth_url))
        .route("/get-token", post(api::get_token))
        .route("/generate-playlist", post(api::generate_playlist))
        .layer(Extension(state))
}

/// Binds the configured address and serves requests until the process ends.
///
/// # Errors
///
/// Returns [`Error::Config`] for an unparsable `SERVER_ADDRESS` and
/// [`Error::Io`] when the address cannot be bound.
pub async fn start_api_server(config: &Config) -> Res<()> {
    let state = Arc::new(AppState::from_config(config)?);

    let addr = SocketAddr::from_str(&config.server_addr).map_err(|e| {
        Error::Config(format!(
            "Failed to parse server address '{}': {}",
            config.server_addr, e
        ))
    })?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    success!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
