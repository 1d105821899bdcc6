use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;

pub async fn delete_follow(
    follower_id: Uuid,
    following_id: Uuid,
    postgres: PgPool,
) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND following_id = $2")
        .bind(follower_id)
        .bind(following_id)
        .execute(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete follow: {}", e)))?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Follow not found".into()));
    }

    tracing::info!("User {} unfollowed {}", follower_id, following_id);

    Ok(())
}
