use chrono::Utc;
use std::collections::HashSet;
use uuid::Uuid;

use supper_club_be::feed::{aggregate_reviews, apply_filters, resolve_scope};
use supper_club_be::models::feed::{ActiveFilterSet, FeedScope, ScopeSet};
use supper_club_be::models::{FollowEdge, Place, Review, User};

// Viewer V follows A and B. A reviews P1 with food=5, value=3; B reviews P1
// with food=3 and no value. Friends scope resolves to {A, B}, aggregation
// yields avg_food=4 and avg_value=3 with two reviewers, and a minimum
// rating of 4 over the overall (value-proxied) average excludes P1.
#[test]
fn test_friends_feed_end_to_end() {
    let viewer = Uuid::new_v4();
    let a = User {
        id: Uuid::new_v4(),
        name: "Ada".to_string(),
        is_community_member: false,
    };
    let b = User {
        id: Uuid::new_v4(),
        name: "Ben".to_string(),
        is_community_member: false,
    };
    let p1 = Place {
        id: Uuid::new_v4(),
        name: "Chez Pierre".to_string(),
        category: "French".to_string(),
        tags: vec!["dinner".to_string(), "romantic".to_string()],
        lat: 48.8566,
        lng: 2.3522,
        created_by: a.id,
        created_at: Utc::now(),
    };

    let edges = vec![
        FollowEdge {
            follower_id: viewer,
            following_id: a.id,
        },
        FollowEdge {
            follower_id: viewer,
            following_id: b.id,
        },
    ];

    let scope_set = resolve_scope(Some(viewer), FeedScope::Friends, &edges).unwrap();
    let eligible = match &scope_set {
        ScopeSet::Authors(ids) => ids.clone(),
        ScopeSet::Community => panic!("Friends scope must produce an author set"),
    };
    assert_eq!(eligible, HashSet::from([a.id, b.id]));

    let review_a = Review {
        id: Uuid::new_v4(),
        user_id: a.id,
        place_id: p1.id,
        rating_food: Some(5.0),
        rating_service: None,
        rating_atmosphere: None,
        rating_value: Some(3.0),
        text: Some("Worth the trip".to_string()),
        photo_urls: Vec::new(),
        created_at: Utc::now(),
    };
    let review_b = Review {
        id: Uuid::new_v4(),
        user_id: b.id,
        place_id: p1.id,
        rating_food: Some(3.0),
        rating_service: None,
        rating_atmosphere: None,
        rating_value: None,
        text: None,
        photo_urls: Vec::new(),
        created_at: Utc::now(),
    };

    let aggregated = aggregate_reviews(
        &[review_a, review_b],
        &[p1.clone()],
        &[a.clone(), b.clone()],
    );

    assert_eq!(aggregated.len(), 1);
    let group = &aggregated[0];
    assert_eq!(group.place.id, p1.id);
    assert_eq!(group.avg_food, Some(4.0));
    assert_eq!(group.avg_value, Some(3.0)); // from A only
    assert_eq!(group.avg_overall, Some(3.0)); // value proxies overall
    assert_eq!(group.reviewers.len(), 2);

    let filters = ActiveFilterSet {
        min_rating: 4.0,
        ..Default::default()
    };
    let filtered = apply_filters(&aggregated, &filters);
    assert!(filtered.is_empty());

    // Relaxing the floor brings P1 back.
    let filters = ActiveFilterSet {
        min_rating: 3.0,
        ..Default::default()
    };
    let filtered = apply_filters(&aggregated, &filters);
    assert_eq!(filtered.len(), 1);
}
