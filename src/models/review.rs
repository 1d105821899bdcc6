use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub user_id: Uuid,
    pub place_id: Uuid,

    // Sub-ratings are independent; a review may carry any subset of them.
    pub rating_food: Option<f64>,
    pub rating_service: Option<f64>,
    pub rating_atmosphere: Option<f64>,
    pub rating_value: Option<f64>,

    pub text: Option<String>,
    pub photo_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
}
