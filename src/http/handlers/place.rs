use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    auth::AuthClaims,
    db::place::{create_place, get_all_places},
    feed::{apply_filters, filters::split_tag_list},
    models::{Place, feed::ActiveFilterSet},
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlacePayload {
    pub name: String,
    pub category: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub tags: Vec<String>,
}

pub async fn create_place_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<CreatePlacePayload>,
) -> Result<Json<Place>, (StatusCode, String)> {
    let created_by = claims.user_id().map_err(|e| e.to_response())?;

    let place = create_place(
        payload.name,
        payload.category,
        payload.lat,
        payload.lng,
        payload.tags,
        created_by,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error creating place: {}", e);
        e.to_response()
    })?;

    Ok(Json(place))
}

/// Tag filters for the explore/map path; raw places carry no ratings, so
/// only the tag categories apply here.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacesQuery {
    pub occasion: Option<String>,
    pub food_type: Option<String>,
    pub vibe: Option<String>,
    pub price: Option<String>,
}

impl PlacesQuery {
    fn into_filter_set(self) -> ActiveFilterSet {
        ActiveFilterSet {
            occasion: split_tag_list(self.occasion.as_deref()),
            food_type: split_tag_list(self.food_type.as_deref()),
            vibe: split_tag_list(self.vibe.as_deref()),
            price: split_tag_list(self.price.as_deref()),
            ..Default::default()
        }
    }
}

pub async fn get_places_handler(
    State(state): State<AppState>,
    Query(query): Query<PlacesQuery>,
) -> Result<Json<Vec<Place>>, (StatusCode, String)> {
    let places = get_all_places(state.postgres.clone()).await.map_err(|e| {
        tracing::error!("Error fetching places: {}", e);
        e.to_response()
    })?;

    let filters = query.into_filter_set();
    Ok(Json(apply_filters(&places, &filters)))
}
