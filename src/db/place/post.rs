use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::Place};

pub async fn create_place(
    name: String,
    category: String,
    lat: f64,
    lng: f64,
    tags: Vec<String>,
    created_by: Uuid,
    postgres: PgPool,
) -> Result<Place, AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Place name must not be empty".into()));
    }
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(AppError::BadRequest("Invalid coordinates".into()));
    }

    let place = sqlx::query_as::<_, Place>(
        "INSERT INTO places (id, name, category, lat, lng, tags, created_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, name, category, lat, lng, tags, created_by, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(name.trim())
    .bind(&category)
    .bind(lat)
    .bind(lng)
    .bind(&tags)
    .bind(created_by)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create place: {}", e)))?;

    tracing::info!("Created place: {} (ID: {})", place.name, place.id);

    Ok(place)
}
