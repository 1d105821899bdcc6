use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::collections::HashSet;
use uuid::Uuid;

use crate::{
    auth::OptionalAuthClaims,
    db::{
        follows::get_scope_edges,
        place::get_places_by_ids,
        review::{get_community_reviews, get_reviews_by_authors},
        user::get_users_by_ids,
    },
    feed::{aggregate_reviews, apply_filters, filters::split_tag_list, resolve_scope},
    models::feed::{
        ActiveFilterSet, FeedResponse, FeedScope, RatingDimension, ScopeSet, SortDirection,
    },
    state::{self, AppState},
};

const FEED_FETCH_NOTICE: &str = "Couldn't load your feed right now. Try again in a moment.";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedQuery {
    pub scope: Option<FeedScope>,
    pub occasion: Option<String>,
    pub food_type: Option<String>,
    pub vibe: Option<String>,
    pub price: Option<String>,
    pub min_rating: Option<f64>,
    pub sort_by: Option<RatingDimension>,
    pub sort_dir: Option<SortDirection>,
}

impl FeedQuery {
    fn filter_set(&self) -> ActiveFilterSet {
        ActiveFilterSet {
            occasion: split_tag_list(self.occasion.as_deref()),
            food_type: split_tag_list(self.food_type.as_deref()),
            vibe: split_tag_list(self.vibe.as_deref()),
            price: split_tag_list(self.price.as_deref()),
            min_rating: self.min_rating.unwrap_or(0.0),
            sort_by: self.sort_by,
            sort_dir: self.sort_dir.unwrap_or_default(),
        }
    }
}

/// The full pipeline: resolve scope, fetch eligible reviews plus the places
/// and authors they reference, aggregate, filter, sort.
///
/// Upstream fetch failures are caught here and become an empty result set
/// with a transient notice. A request superseded by a newer one from the
/// same viewer also returns empty; the client already issued a fresher
/// query and this response must not overwrite it.
pub async fn get_feed_handler(
    State(state): State<AppState>,
    OptionalAuthClaims(claims): OptionalAuthClaims,
    Query(query): Query<FeedQuery>,
) -> Result<Json<FeedResponse>, (StatusCode, String)> {
    let viewer = match &claims {
        Some(claims) => Some(claims.user_id().map_err(|e| e.to_response())?),
        None => None,
    };
    let scope = query.scope.unwrap_or(FeedScope::Community);
    let filters = query.filter_set();

    let generation = match viewer {
        Some(viewer) => Some(state::begin_feed_request(&state.feed_generations, viewer).await),
        None => None,
    };

    // A personalized scope without a viewer is a 401 (sign-in prompt), so
    // the scope is resolved before any best-effort fetching starts.
    let edges = match viewer {
        Some(viewer) if scope != FeedScope::Community => {
            match get_scope_edges(viewer, state.postgres.clone()).await {
                Ok(edges) => edges,
                Err(e) => {
                    tracing::error!("Failed to fetch follow edges: {}", e);
                    return Ok(Json(empty_feed()));
                }
            }
        }
        _ => Vec::new(),
    };

    let scope_set = resolve_scope(viewer, scope, &edges).map_err(|e| e.to_response())?;

    let reviews = match &scope_set {
        ScopeSet::Authors(author_ids) => {
            let author_ids: Vec<Uuid> = author_ids.iter().copied().collect();
            get_reviews_by_authors(&author_ids, state.postgres.clone()).await
        }
        ScopeSet::Community => get_community_reviews(state.postgres.clone()).await,
    };
    let reviews = match reviews {
        Ok(reviews) => reviews,
        Err(e) => {
            tracing::error!("Failed to fetch reviews: {}", e);
            return Ok(Json(empty_feed()));
        }
    };

    let place_ids: Vec<Uuid> = reviews
        .iter()
        .map(|r| r.place_id)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    let author_ids: Vec<Uuid> = reviews
        .iter()
        .map(|r| r.user_id)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();

    let places = match get_places_by_ids(&place_ids, state.postgres.clone()).await {
        Ok(places) => places,
        Err(e) => {
            tracing::error!("Failed to fetch places: {}", e);
            return Ok(Json(empty_feed()));
        }
    };
    let authors = match get_users_by_ids(&author_ids, state.postgres.clone()).await {
        Ok(authors) => authors,
        Err(e) => {
            tracing::error!("Failed to fetch review authors: {}", e);
            return Ok(Json(empty_feed()));
        }
    };

    if let (Some(viewer), Some(generation)) = (viewer, generation) {
        if !state::is_current_feed_request(&state.feed_generations, viewer, generation).await {
            tracing::debug!("Feed request for {} superseded, discarding result", viewer);
            return Ok(Json(FeedResponse {
                places: Vec::new(),
                notice: None,
            }));
        }
    }

    let aggregated = aggregate_reviews(&reviews, &places, &authors);
    let places = apply_filters(&aggregated, &filters);

    Ok(Json(FeedResponse {
        places,
        notice: None,
    }))
}

fn empty_feed() -> FeedResponse {
    FeedResponse {
        places: Vec::new(),
        notice: Some(FEED_FETCH_NOTICE.to_string()),
    }
}
