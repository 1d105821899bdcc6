use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    db::user::{create_user, get_user_by_id},
    models::User,
    state::AppState,
};

#[derive(Deserialize)]
pub struct CreateUserPayload {
    pub name: String,
}

pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<Json<String>, (StatusCode, String)> {
    match create_user(payload.name.clone(), state.postgres.clone()).await {
        Ok(token) => {
            tracing::info!("User signed in with name: {}", payload.name);
            Ok(Json(token))
        }
        Err(err) => {
            tracing::error!("Error creating user: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<User>, (StatusCode, String)> {
    let user = get_user_by_id(user_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving user: {}", e);
            e.to_response()
        })?;

    Ok(Json(user))
}
