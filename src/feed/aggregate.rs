use std::collections::HashMap;
use uuid::Uuid;

use crate::models::{
    Place, Review, User,
    feed::{AggregatedPlace, ReviewerInfo},
};

/// Groups reviews by place and computes per-dimension averages plus the
/// contributing reviewer list. Pure: same inputs always produce the same
/// output, in first-seen place order.
///
/// A review whose `place_id` has no matching place is a data-quality issue,
/// not a user-facing error: it is logged and excluded, and no place is
/// synthesized for it.
pub fn aggregate_reviews(
    reviews: &[Review],
    places: &[Place],
    authors: &[User],
) -> Vec<AggregatedPlace> {
    let places_by_id: HashMap<Uuid, &Place> = places.iter().map(|p| (p.id, p)).collect();
    let authors_by_id: HashMap<Uuid, &User> = authors.iter().map(|u| (u.id, u)).collect();

    // Preserve first-seen order so the output is stable across calls.
    let mut group_order: Vec<Uuid> = Vec::new();
    let mut groups: HashMap<Uuid, Vec<&Review>> = HashMap::new();

    for review in reviews {
        if !places_by_id.contains_key(&review.place_id) {
            tracing::warn!(
                "Skipping review {} referencing unknown place {}",
                review.id,
                review.place_id
            );
            continue;
        }

        groups
            .entry(review.place_id)
            .or_insert_with(|| {
                group_order.push(review.place_id);
                Vec::new()
            })
            .push(review);
    }

    group_order
        .into_iter()
        .map(|place_id| {
            let group = &groups[&place_id];
            let place = places_by_id[&place_id];

            let reviewers = group
                .iter()
                .map(|review| build_reviewer_info(review, &authors_by_id))
                .collect();

            AggregatedPlace {
                place: place.clone(),
                reviewers,
                // Headline policy: the value rating is the canonical
                // overall proxy. One explicit field, not a four-way mean.
                avg_overall: sparse_mean(group, |r| r.rating_value),
                avg_value: sparse_mean(group, |r| r.rating_value),
                avg_atmosphere: sparse_mean(group, |r| r.rating_atmosphere),
                avg_food: sparse_mean(group, |r| r.rating_food),
                avg_service: sparse_mean(group, |r| r.rating_service),
            }
        })
        .collect()
}

/// Mean over only the reviews that supplied the dimension. `None` when no
/// review did; zero is a valid rating and must not stand in for "no data".
fn sparse_mean(group: &[&Review], pick: impl Fn(&Review) -> Option<f64>) -> Option<f64> {
    let values: Vec<f64> = group.iter().filter_map(|review| pick(review)).collect();
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn build_reviewer_info(review: &Review, authors_by_id: &HashMap<Uuid, &User>) -> ReviewerInfo {
    let author = authors_by_id.get(&review.user_id);
    ReviewerInfo {
        review_id: review.id,
        author_id: review.user_id,
        author_name: author.map(|u| u.name.clone()).unwrap_or_default(),
        is_community_member: author.map(|u| u.is_community_member).unwrap_or(false),
        rating_food: review.rating_food,
        rating_service: review.rating_service,
        rating_atmosphere: review.rating_atmosphere,
        rating_value: review.rating_value,
        text: review.text.clone(),
        photo_urls: review.photo_urls.clone(),
    }
}
