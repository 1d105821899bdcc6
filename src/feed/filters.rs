use once_cell::sync::Lazy;
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::{
    Place,
    feed::{ActiveFilterSet, AggregatedPlace, RatingDimension, SortDirection},
};

/// Fixed price vocabulary. Price filtering matches substring-style: a tag
/// containing one of these tokens counts as carrying that price level.
pub static PRICE_VOCABULARY: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["low", "medium", "high", "premium"]));

/// Anything the filter pipeline can rank and select: aggregated places on
/// the feed path, raw places on the explore/map path.
pub trait Filterable {
    fn tags(&self) -> &[String];
    fn category(&self) -> &str;
    /// The headline number the minimum-rating filter compares against.
    fn headline_rating(&self) -> Option<f64>;
    fn rating_for(&self, dimension: RatingDimension) -> Option<f64>;
}

impl Filterable for AggregatedPlace {
    fn tags(&self) -> &[String] {
        &self.place.tags
    }

    fn category(&self) -> &str {
        &self.place.category
    }

    fn headline_rating(&self) -> Option<f64> {
        self.avg_overall
    }

    fn rating_for(&self, dimension: RatingDimension) -> Option<f64> {
        match dimension {
            RatingDimension::Food => self.avg_food,
            RatingDimension::Service => self.avg_service,
            RatingDimension::Atmosphere => self.avg_atmosphere,
            RatingDimension::Value => self.avg_value,
        }
    }
}

// Raw places carry no ratings; only tag/category filters apply to them.
impl Filterable for Place {
    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn headline_rating(&self) -> Option<f64> {
        None
    }

    fn rating_for(&self, _dimension: RatingDimension) -> Option<f64> {
        None
    }
}

/// Applies the active filter set and sort to a list of items, returning a
/// new list. Tag categories AND together; values within a category OR.
/// Never mutates its input, and applying the same filters twice yields the
/// same result.
pub fn apply_filters<T: Filterable + Clone>(items: &[T], filters: &ActiveFilterSet) -> Vec<T> {
    let mut kept: Vec<T> = items
        .iter()
        .filter(|item| passes(*item, filters))
        .cloned()
        .collect();

    if let Some(dimension) = filters.sort_by {
        sort_by_dimension(&mut kept, dimension, filters.sort_dir);
    }

    kept
}

fn passes<T: Filterable>(item: &T, filters: &ActiveFilterSet) -> bool {
    matches_tag_set(item.tags(), &filters.occasion)
        && matches_food_type(item, &filters.food_type)
        && matches_tag_set(item.tags(), &filters.vibe)
        && matches_price(item.tags(), &filters.price)
        && passes_rating_floor(item, filters.min_rating)
}

/// Inclusive-OR within a category; an empty active set passes everything.
fn matches_tag_set(tags: &[String], active: &[String]) -> bool {
    if active.is_empty() {
        return true;
    }
    tags.iter()
        .any(|tag| active.iter().any(|wanted| wanted.eq_ignore_ascii_case(tag)))
}

/// Food-type additionally checks the category label; a category match alone
/// is sufficient even without a tag match.
fn matches_food_type<T: Filterable>(item: &T, active: &[String]) -> bool {
    if active.is_empty() {
        return true;
    }
    matches_tag_set(item.tags(), active)
        || active
            .iter()
            .any(|wanted| wanted.eq_ignore_ascii_case(item.category()))
}

fn matches_price(tags: &[String], active: &[String]) -> bool {
    if active.is_empty() {
        return true;
    }
    let wanted_levels: Vec<&str> = PRICE_VOCABULARY
        .iter()
        .copied()
        .filter(|level| active.iter().any(|a| a.eq_ignore_ascii_case(level)))
        .collect();

    tags.iter().any(|tag| {
        let tag = tag.to_ascii_lowercase();
        wanted_levels.iter().any(|level| tag.contains(level))
    })
}

/// Threshold 0 disables the filter. With a positive threshold, items with
/// no headline rating are excluded: an unknown rating cannot satisfy a
/// floor.
fn passes_rating_floor<T: Filterable>(item: &T, min_rating: f64) -> bool {
    if min_rating <= 0.0 {
        return true;
    }
    match item.headline_rating() {
        Some(rating) => rating >= min_rating,
        None => false,
    }
}

/// Stable sort on one dimension. Items missing the dimension sort last in
/// either direction; ties keep their input order.
fn sort_by_dimension<T: Filterable>(
    items: &mut [T],
    dimension: RatingDimension,
    direction: SortDirection,
) {
    items.sort_by(|a, b| {
        match (a.rating_for(dimension), b.rating_for(dimension)) {
            (Some(x), Some(y)) => {
                let ordering = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

/// Splits a comma-separated query value into trimmed, non-empty tag values.
pub fn split_tag_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect()
    })
    .unwrap_or_default()
}
