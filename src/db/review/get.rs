use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::Review};

const REVIEW_COLUMNS: &str = "r.id, r.user_id, r.place_id, r.rating_food, r.rating_service, \
    r.rating_atmosphere, r.rating_value, r.text, r.photo_urls, r.created_at";

pub async fn get_reviews_by_authors(
    author_ids: &[Uuid],
    postgres: PgPool,
) -> Result<Vec<Review>, AppError> {
    if author_ids.is_empty() {
        return Ok(Vec::new());
    }

    let reviews = sqlx::query_as::<_, Review>(&format!(
        "SELECT {REVIEW_COLUMNS} FROM reviews r
        WHERE r.user_id = ANY($1)
        ORDER BY r.created_at ASC"
    ))
    .bind(author_ids)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch reviews: {}", e)))?;

    Ok(reviews)
}

/// Community scope pushes the membership predicate into the query rather
/// than materializing all community members as an id set.
pub async fn get_community_reviews(postgres: PgPool) -> Result<Vec<Review>, AppError> {
    let reviews = sqlx::query_as::<_, Review>(&format!(
        "SELECT {REVIEW_COLUMNS} FROM reviews r
        JOIN users u ON u.id = r.user_id
        WHERE u.is_community_member = true
        ORDER BY r.created_at ASC"
    ))
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch community reviews: {}", e)))?;

    Ok(reviews)
}
