use sqlx::PgPool;
use uuid::Uuid;

use crate::{auth::generate_jwt, errors::AppError, models::User};

/// Creates an account for the given display name and returns a JWT. An
/// existing name signs back in instead of erroring.
pub async fn create_user(name: String, postgres: PgPool) -> Result<String, AppError> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::BadRequest("Name must not be empty".into()));
    }

    let existing = sqlx::query_as::<_, User>(
        "SELECT id, name, is_community_member FROM users WHERE name = $1",
    )
    .bind(&name)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to query user: {}", e)))?;

    if let Some(user) = existing {
        return generate_jwt(&user);
    }

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (id, name, is_community_member)
        VALUES ($1, $2, false)
        RETURNING id, name, is_community_member",
    )
    .bind(Uuid::new_v4())
    .bind(&name)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create user: {}", e)))?;

    tracing::info!("Created new user: {} (ID: {})", user.name, user.id);

    generate_jwt(&user)
}
