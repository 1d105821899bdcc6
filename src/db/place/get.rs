use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::Place};

pub async fn get_all_places(postgres: PgPool) -> Result<Vec<Place>, AppError> {
    let places = sqlx::query_as::<_, Place>(
        "SELECT id, name, category, lat, lng, tags, created_by, created_at
        FROM places
        ORDER BY created_at ASC",
    )
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch places: {}", e)))?;

    Ok(places)
}

pub async fn get_places_by_ids(
    place_ids: &[Uuid],
    postgres: PgPool,
) -> Result<Vec<Place>, AppError> {
    if place_ids.is_empty() {
        return Ok(Vec::new());
    }

    let places = sqlx::query_as::<_, Place>(
        "SELECT id, name, category, lat, lng, tags, created_by, created_at
        FROM places
        WHERE id = ANY($1)",
    )
    .bind(place_ids)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch places: {}", e)))?;

    Ok(places)
}
