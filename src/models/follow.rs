use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FollowEdge {
    pub follower_id: Uuid,
    pub following_id: Uuid,
}
