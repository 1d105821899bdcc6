use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::{
    http::handlers::{
        create_place_handler, create_review_handler, create_user_handler, follow_user_handler,
        get_feed_handler, get_places_handler, get_user_handler, unfollow_user_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/user", post(create_user_handler))
        .route("/user/{user_id}", get(get_user_handler))
        .route("/follow", post(follow_user_handler))
        .route("/follow/{following_id}", delete(unfollow_user_handler))
        .route("/place", post(create_place_handler))
        .route("/places", get(get_places_handler))
        .route("/review", post(create_review_handler))
        .route("/feed", get(get_feed_handler))
        .with_state(state)
}
