use sqlx::PgPool;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub postgres: PgPool,
    pub feed_generations: FeedGenerations,
}

// One counter per viewer. A feed request records the generation it started
// under; if a newer request bumps the counter while the older one is
// awaiting the store, the older result is discarded instead of being
// rendered out of order.
//
// The map grows by one u64 entry per viewer that ever loads a feed and is
// never evicted. TODO: clear a viewer's entry when their JWT expires.
pub type FeedGenerations = Arc<Mutex<HashMap<Uuid, u64>>>;

pub async fn begin_feed_request(generations: &FeedGenerations, viewer: Uuid) -> u64 {
    let mut map = generations.lock().await;
    let counter = map.entry(viewer).or_insert(0);
    *counter += 1;
    *counter
}

pub async fn is_current_feed_request(
    generations: &FeedGenerations,
    viewer: Uuid,
    generation: u64,
) -> bool {
    let map = generations.lock().await;
    map.get(&viewer).copied() == Some(generation)
}
