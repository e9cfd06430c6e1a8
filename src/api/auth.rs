use std::sync::Arc;

use axum::{Extension, Json};

use crate::{
    Res,
    management::AppState,
    types::{AuthRequest, AuthUrlResponse, TokenResponse},
};

/// `GET /auth-url`
pub async fn auth_url(Extension(state): Extension<Arc<AppState>>) -> Res<Json<AuthUrlResponse>> {
    let auth_url = state.spotify.authorize_url()?;
    Ok(Json(AuthUrlResponse { auth_url }))
}

/// `POST /get-token`
///
/// Exchanges the authorization code and passes Spotify's token payload
/// through. A refused exchange answers 400 with Spotify's status and body in
/// the `detail` field.
pub async fn get_token(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<AuthRequest>,
) -> Res<Json<TokenResponse>> {
    let token = state.spotify.exchange_code(&request.code).await?;
    Ok(Json(token))
}
