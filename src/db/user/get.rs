use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::User};

pub async fn get_user_by_id(user_id: Uuid, postgres: PgPool) -> Result<User, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, is_community_member FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch user: {}", e)))?
    .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(user)
}

pub async fn get_users_by_ids(user_ids: &[Uuid], postgres: PgPool) -> Result<Vec<User>, AppError> {
    if user_ids.is_empty() {
        return Ok(Vec::new());
    }

    let users = sqlx::query_as::<_, User>(
        "SELECT id, name, is_community_member FROM users WHERE id = ANY($1)",
    )
    .bind(user_ids)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch users: {}", e)))?;

    Ok(users)
}
