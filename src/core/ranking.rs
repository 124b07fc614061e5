use std::collections::HashMap;
use crate::models::{Destination, DestinationReviews, Review};

/// Mean rating of a list of reviews, or zero when there are none
#[inline]
pub fn mean_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let total: f64 = reviews.iter().map(|r| r.rating).sum();
    total / reviews.len() as f64
}

/// Mean rating per place from the grouped review dataset
///
/// Groups without reviews are skipped. A place listed more than once takes
/// the mean of its last non-empty group.
pub fn average_ratings(groups: &[DestinationReviews]) -> HashMap<String, f64> {
    let mut averages = HashMap::with_capacity(groups.len());
    for group in groups.iter().filter(|g| !g.reviews.is_empty()) {
        averages.insert(group.place.clone(), mean_rating(&group.reviews));
    }
    averages
}

/// Reviews of one place, empty when the place has no review group
///
/// The first group listed for the place is used.
pub fn reviews_for(groups: &[DestinationReviews], place: &str) -> Vec<Review> {
    groups
        .iter()
        .find(|g| g.place == place)
        .map(|g| g.reviews.clone())
        .unwrap_or_default()
}

/// Score used for ranking a destination
#[inline]
pub fn destination_score(destination: &Destination, averages: &HashMap<String, f64>) -> f64 {
    averages.get(&destination.place).copied().unwrap_or(0.0)
}

/// Rank destinations by mean review rating and keep the best `n`
///
/// Sort is stable, so destinations with equal scores keep their input order.
pub fn top_recommendations(
    destinations: &[Destination],
    averages: &HashMap<String, f64>,
    n: usize,
) -> Vec<Destination> {
    let mut scored: Vec<(f64, &Destination)> = destinations
        .iter()
        .map(|d| (destination_score(d, averages), d))
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    scored
        .into_iter()
        .take(n)
        .map(|(_, d)| d.clone())
        .collect()
}
