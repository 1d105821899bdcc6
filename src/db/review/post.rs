use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::Review};

pub async fn create_review(
    user_id: Uuid,
    place_id: Uuid,
    rating_food: Option<f64>,
    rating_service: Option<f64>,
    rating_atmosphere: Option<f64>,
    rating_value: Option<f64>,
    text: Option<String>,
    photo_urls: Vec<String>,
    postgres: PgPool,
) -> Result<Review, AppError> {
    for (label, rating) in [
        ("food", rating_food),
        ("service", rating_service),
        ("atmosphere", rating_atmosphere),
        ("value", rating_value),
    ] {
        if let Some(rating) = rating {
            if !(1.0..=5.0).contains(&rating) {
                return Err(AppError::BadRequest(format!(
                    "Rating '{}' must be between 1 and 5",
                    label
                )));
            }
        }
    }

    let place_exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM places WHERE id = $1)")
            .bind(place_id)
            .fetch_one(&postgres)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to check place: {}", e)))?;

    if !place_exists {
        return Err(AppError::NotFound("Place not found".into()));
    }

    let review = sqlx::query_as::<_, Review>(
        "INSERT INTO reviews
            (id, user_id, place_id, rating_food, rating_service, rating_atmosphere,
            rating_value, text, photo_urls)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, user_id, place_id, rating_food, rating_service, rating_atmosphere,
            rating_value, text, photo_urls, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(place_id)
    .bind(rating_food)
    .bind(rating_service)
    .bind(rating_atmosphere)
    .bind(rating_value)
    .bind(&text)
    .bind(&photo_urls)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create review: {}", e)))?;

    tracing::info!("User {} reviewed place {}", user_id, place_id);

    Ok(review)
}
