use chrono::Utc;
use uuid::Uuid;

use supper_club_be::feed::apply_filters;
use supper_club_be::models::Place;
use supper_club_be::models::feed::{
    ActiveFilterSet, AggregatedPlace, RatingDimension, SortDirection,
};

fn make_place(name: &str, category: &str, tags: &[&str]) -> Place {
    Place {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category: category.to_string(),
        lat: 40.7128,
        lng: -74.006,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        created_by: Uuid::new_v4(),
        created_at: Utc::now(),
    }
}

fn make_aggregated(name: &str, category: &str, tags: &[&str]) -> AggregatedPlace {
    AggregatedPlace {
        place: make_place(name, category, tags),
        reviewers: Vec::new(),
        avg_overall: None,
        avg_value: None,
        avg_atmosphere: None,
        avg_food: None,
        avg_service: None,
    }
}

fn names(items: &[AggregatedPlace]) -> Vec<&str> {
    items.iter().map(|i| i.place.name.as_str()).collect()
}

#[test]
fn test_empty_filter_set_passes_everything() {
    let items = vec![
        make_aggregated("A", "Italian", &["romantic"]),
        make_aggregated("B", "Thai", &[]),
    ];

    let result = apply_filters(&items, &ActiveFilterSet::default());
    assert_eq!(names(&result), vec!["A", "B"]);
}

#[test]
fn test_vibe_filter_is_inclusive_or_within_category() {
    let items = vec![
        make_aggregated("Romantic spot", "Italian", &["romantic"]),
        make_aggregated("Casual spot", "Italian", &["casual"]),
    ];
    let filters = ActiveFilterSet {
        vibe: vec!["romantic".to_string(), "cozy".to_string()],
        ..Default::default()
    };

    let result = apply_filters(&items, &filters);
    assert_eq!(names(&result), vec!["Romantic spot"]);
}

#[test]
fn test_filters_and_across_categories() {
    let items = vec![
        make_aggregated("Both", "Italian", &["romantic", "dinner"]),
        make_aggregated("Vibe only", "Italian", &["romantic", "brunch"]),
        make_aggregated("Occasion only", "Italian", &["casual", "dinner"]),
    ];
    let filters = ActiveFilterSet {
        vibe: vec!["romantic".to_string()],
        occasion: vec!["dinner".to_string()],
        ..Default::default()
    };

    let result = apply_filters(&items, &filters);
    assert_eq!(names(&result), vec!["Both"]);
}

#[test]
fn test_food_type_matches_category_without_tag() {
    let items = vec![
        make_aggregated("Tagged", "Steakhouse", &["sushi"]),
        make_aggregated("By category", "Sushi", &["romantic"]),
        make_aggregated("Neither", "Diner", &["casual"]),
    ];
    let filters = ActiveFilterSet {
        food_type: vec!["sushi".to_string()],
        ..Default::default()
    };

    let result = apply_filters(&items, &filters);
    assert_eq!(names(&result), vec!["Tagged", "By category"]);
}

#[test]
fn test_food_type_category_match_is_case_insensitive() {
    let items = vec![make_aggregated("Nonna's", "ITALIAN", &[])];
    let filters = ActiveFilterSet {
        food_type: vec!["italian".to_string()],
        ..Default::default()
    };

    let result = apply_filters(&items, &filters);
    assert_eq!(result.len(), 1);
}

#[test]
fn test_price_filter_matches_vocabulary_tokens_in_tags() {
    let items = vec![
        make_aggregated("Cheap eats", "Thai", &["price_low"]),
        make_aggregated("Mid range", "Thai", &["price_medium"]),
        make_aggregated("Splurge", "Thai", &["premium"]),
        make_aggregated("Untagged", "Thai", &[]),
    ];
    let filters = ActiveFilterSet {
        price: vec!["low".to_string(), "premium".to_string()],
        ..Default::default()
    };

    let result = apply_filters(&items, &filters);
    assert_eq!(names(&result), vec!["Cheap eats", "Splurge"]);
}

#[test]
fn test_min_rating_zero_disables_the_floor() {
    let mut rated = make_aggregated("Rated", "Italian", &[]);
    rated.avg_overall = Some(2.0);
    let unrated = make_aggregated("Unrated", "Italian", &[]);

    let filters = ActiveFilterSet {
        min_rating: 0.0,
        ..Default::default()
    };

    let result = apply_filters(&[rated, unrated], &filters);
    assert_eq!(names(&result), vec!["Rated", "Unrated"]);
}

#[test]
fn test_min_rating_excludes_below_threshold_and_unrated() {
    let mut high = make_aggregated("High", "Italian", &[]);
    high.avg_overall = Some(4.5);
    let mut low = make_aggregated("Low", "Italian", &[]);
    low.avg_overall = Some(3.0);
    let unrated = make_aggregated("Unrated", "Italian", &[]);

    let filters = ActiveFilterSet {
        min_rating: 4.0,
        ..Default::default()
    };

    let result = apply_filters(&[high, low, unrated], &filters);
    assert_eq!(names(&result), vec!["High"]);
}

#[test]
fn test_sort_desc_by_food_with_missing_values_last() {
    let mut a = make_aggregated("A", "Italian", &[]);
    a.avg_food = Some(3.0);
    let mut b = make_aggregated("B", "Italian", &[]);
    b.avg_food = Some(5.0);
    let c = make_aggregated("C", "Italian", &[]);

    let filters = ActiveFilterSet {
        sort_by: Some(RatingDimension::Food),
        sort_dir: SortDirection::Desc,
        ..Default::default()
    };

    let result = apply_filters(&[a, b, c], &filters);
    assert_eq!(names(&result), vec!["B", "A", "C"]);
}

#[test]
fn test_sort_asc_keeps_missing_values_last() {
    let mut a = make_aggregated("A", "Italian", &[]);
    a.avg_service = Some(4.0);
    let b = make_aggregated("B", "Italian", &[]);
    let mut c = make_aggregated("C", "Italian", &[]);
    c.avg_service = Some(2.0);

    let filters = ActiveFilterSet {
        sort_by: Some(RatingDimension::Service),
        sort_dir: SortDirection::Asc,
        ..Default::default()
    };

    let result = apply_filters(&[a, b, c], &filters);
    assert_eq!(names(&result), vec!["C", "A", "B"]);
}

#[test]
fn test_sort_ties_preserve_input_order() {
    let mut a = make_aggregated("First", "Italian", &[]);
    a.avg_value = Some(4.0);
    let mut b = make_aggregated("Second", "Italian", &[]);
    b.avg_value = Some(4.0);
    let mut c = make_aggregated("Third", "Italian", &[]);
    c.avg_value = Some(4.0);

    let filters = ActiveFilterSet {
        sort_by: Some(RatingDimension::Value),
        ..Default::default()
    };

    let result = apply_filters(&[a, b, c], &filters);
    assert_eq!(names(&result), vec!["First", "Second", "Third"]);
}

#[test]
fn test_filtering_is_idempotent() {
    let mut a = make_aggregated("A", "Italian", &["romantic", "dinner"]);
    a.avg_overall = Some(4.5);
    a.avg_food = Some(4.0);
    let mut b = make_aggregated("B", "Thai", &["casual", "dinner"]);
    b.avg_overall = Some(3.5);
    b.avg_food = Some(5.0);
    let items = vec![a, b];

    let filters = ActiveFilterSet {
        occasion: vec!["dinner".to_string()],
        min_rating: 3.0,
        sort_by: Some(RatingDimension::Food),
        sort_dir: SortDirection::Desc,
        ..Default::default()
    };

    let once = apply_filters(&items, &filters);
    let twice = apply_filters(&once, &filters);

    assert_eq!(names(&once), names(&twice));
}

#[test]
fn test_apply_filters_does_not_mutate_input() {
    let items = vec![
        make_aggregated("Z", "Italian", &["casual"]),
        make_aggregated("Y", "Thai", &["romantic"]),
    ];
    let filters = ActiveFilterSet {
        vibe: vec!["romantic".to_string()],
        ..Default::default()
    };

    let _ = apply_filters(&items, &filters);
    assert_eq!(names(&items), vec!["Z", "Y"]);
}

#[test]
fn test_raw_places_filter_by_tags_and_category() {
    let places = vec![
        make_place("Sushi bar", "Sushi", &["dinner"]),
        make_place("Pizza joint", "Pizza", &["casual"]),
    ];
    let filters = ActiveFilterSet {
        food_type: vec!["sushi".to_string()],
        ..Default::default()
    };

    let result = apply_filters(&places, &filters);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Sushi bar");
}

#[test]
fn test_raw_places_are_excluded_by_positive_rating_floor() {
    // Raw places carry no ratings, so a positive floor filters them all out.
    let places = vec![make_place("Anywhere", "Diner", &[])];
    let filters = ActiveFilterSet {
        min_rating: 1.0,
        ..Default::default()
    };

    let result = apply_filters(&places, &filters);
    assert!(result.is_empty());
}
