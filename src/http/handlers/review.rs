use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use uuid::Uuid;

use crate::{auth::AuthClaims, db::review::create_review, models::Review, state::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewPayload {
    pub place_id: Uuid,
    pub rating_food: Option<f64>,
    pub rating_service: Option<f64>,
    pub rating_atmosphere: Option<f64>,
    pub rating_value: Option<f64>,
    pub text: Option<String>,
    #[serde(default)]
    pub photo_urls: Vec<String>,
}

pub async fn create_review_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<CreateReviewPayload>,
) -> Result<Json<Review>, (StatusCode, String)> {
    let user_id = claims.user_id().map_err(|e| e.to_response())?;

    let review = create_review(
        user_id,
        payload.place_id,
        payload.rating_food,
        payload.rating_service,
        payload.rating_atmosphere,
        payload.rating_value,
        payload.text,
        payload.photo_urls,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error creating review: {}", e);
        e.to_response()
    })?;

    Ok(Json(review))
}
