use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::FollowEdge};

/// Fetches every follow edge the scope resolver can need for a viewer: the
/// viewer's own edges plus the edges of everyone the viewer follows (the
/// second hop for friends-of-friends).
pub async fn get_scope_edges(viewer_id: Uuid, postgres: PgPool) -> Result<Vec<FollowEdge>, AppError> {
    let edges = sqlx::query_as::<_, FollowEdge>(
        "SELECT follower_id, following_id FROM follows
        WHERE follower_id = $1
            OR follower_id IN (SELECT following_id FROM follows WHERE follower_id = $1)",
    )
    .bind(viewer_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch follow edges: {}", e)))?;

    Ok(edges)
}
