use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::follows::{create_follow, delete_follow},
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowPayload {
    pub following_id: Uuid,
}

pub async fn follow_user_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<FollowPayload>,
) -> Result<StatusCode, (StatusCode, String)> {
    let follower_id = claims.user_id().map_err(|e| e.to_response())?;

    create_follow(follower_id, payload.following_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error creating follow: {}", e);
            e.to_response()
        })?;

    Ok(StatusCode::CREATED)
}

pub async fn unfollow_user_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(following_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    let follower_id = claims.user_id().map_err(|e| e.to_response())?;

    delete_follow(follower_id, following_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error deleting follow: {}", e);
            e.to_response()
        })?;

    Ok(StatusCode::NO_CONTENT)
}
