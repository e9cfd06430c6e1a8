use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Query, rejection::JsonRejection},
};

use crate::{
    Error, Res, info,
    management::AppState,
    types::{GenerateParams, MoodRequest, PlaylistResult},
    utils, warning,
};

/// `POST /generate-playlist?access_token=<token>`
///
/// A body that does not deserialize (negative `num_songs`, missing
/// `mood_description`, malformed JSON) is answered with a 400
/// `invalid_request` before any upstream call.
pub async fn generate_playlist(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<GenerateParams>,
    payload: Result<Json<MoodRequest>, JsonRejection>,
) -> Res<Json<PlaylistResult>> {
    let Some(token) = params.access_token else {
        return Err(Error::MissingToken);
    };
    let Json(request) = payload.map_err(|rejection| {
        let err = Error::InvalidRequest(rejection.body_text());
        warning!("{}", err);
        err
    })?;
    info!("Received access token: {}", utils::token_preview(&token));

    match state.generator.generate(&request, &token).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            warning!("Error in generate_playlist: {}", e);
            Err(e)
        }
    }
}
