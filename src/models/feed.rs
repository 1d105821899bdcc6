use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::models::Place;

/// Social-graph boundary used to select whose reviews are eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedScope {
    #[serde(rename = "self")]
    Myself,
    Friends,
    FriendsOfFriends,
    Community,
}

/// Resolved scope membership. Community is a predicate on the author row,
/// not a finite id set, so the review query can filter server-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeSet {
    Authors(HashSet<Uuid>),
    Community,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingDimension {
    Food,
    Service,
    Atmosphere,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// The user's currently selected tag/rating/sort criteria. Tag sets are
/// inclusive-OR within a category and AND across categories. A sort
/// direction always accompanies the dimension; the pipeline holds no state
/// between calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveFilterSet {
    pub occasion: Vec<String>,
    pub food_type: Vec<String>,
    pub vibe: Vec<String>,
    pub price: Vec<String>,
    pub min_rating: f64,
    pub sort_by: Option<RatingDimension>,
    pub sort_dir: SortDirection,
}

/// One review line inside an aggregated place: the review projection plus
/// its author's display name and community flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewerInfo {
    pub review_id: Uuid,
    pub author_id: Uuid,
    pub author_name: String,
    pub is_community_member: bool,
    pub rating_food: Option<f64>,
    pub rating_service: Option<f64>,
    pub rating_atmosphere: Option<f64>,
    pub rating_value: Option<f64>,
    pub text: Option<String>,
    pub photo_urls: Vec<String>,
}

/// One place plus everyone eligible who reviewed it. Built fresh on every
/// query, never persisted or mutated. Averages are sparse-safe: a dimension
/// no review supplied is `None`, never `0.0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedPlace {
    pub place: Place,
    pub reviewers: Vec<ReviewerInfo>,
    pub avg_overall: Option<f64>,
    pub avg_value: Option<f64>,
    pub avg_atmosphere: Option<f64>,
    pub avg_food: Option<f64>,
    pub avg_service: Option<f64>,
}

/// Feed endpoint response. A failed upstream fetch yields an empty place
/// list plus a transient notice instead of an error status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub places: Vec<AggregatedPlace>,
    pub notice: Option<String>,
}
