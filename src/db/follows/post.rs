use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;

pub async fn create_follow(
    follower_id: Uuid,
    following_id: Uuid,
    postgres: PgPool,
) -> Result<(), AppError> {
    if follower_id == following_id {
        return Err(AppError::BadRequest("Cannot follow yourself".into()));
    }

    sqlx::query(
        "INSERT INTO follows (follower_id, following_id)
        VALUES ($1, $2)
        ON CONFLICT (follower_id, following_id) DO NOTHING",
    )
    .bind(follower_id)
    .bind(following_id)
    .execute(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create follow: {}", e)))?;

    tracing::info!("User {} now follows {}", follower_id, following_id);

    Ok(())
}
