use crate::models::{Dataset, Destination, FilterSelection, Hotel, Review};
use crate::core::{
    filters::filter_destinations,
    nearby::nearby_hotels,
    ranking::{average_ratings, reviews_for, top_recommendations},
};

/// Data behind the explore listing
#[derive(Debug, Clone)]
pub struct ExplorePage {
    pub filtered: Vec<Destination>,
    pub top_recommendations: Vec<Destination>,
    pub total_destinations: usize,
    pub has_filters: bool,
}

/// Data behind a single destination page
#[derive(Debug, Clone)]
pub struct DetailPage {
    pub destination: Destination,
    pub reviews: Vec<Review>,
    pub hotels: Vec<Hotel>,
}

/// Page sizes used by the explorer
#[derive(Debug, Clone, Copy)]
pub struct ExploreLimits {
    pub recommendation_count: usize,
    pub nearby_hotel_limit: usize,
}

impl Default for ExploreLimits {
    fn default() -> Self {
        Self {
            recommendation_count: 8,
            nearby_hotel_limit: 8,
        }
    }
}

/// Assembles listing and detail pages from the loaded dataset
///
/// # Explore page
/// 1. Destination filter over the full list
/// 2. Top recommendations by mean review rating
///
/// # Detail page
/// 1. Exact place lookup
/// 2. Review group of the place
/// 3. Nearby hotels by address keyword
#[derive(Debug, Clone)]
pub struct Explorer {
    limits: ExploreLimits,
}

impl Explorer {
    pub fn new(limits: ExploreLimits) -> Self {
        Self { limits }
    }

    pub fn with_default_limits() -> Self {
        Self {
            limits: ExploreLimits::default(),
        }
    }

    pub fn limits(&self) -> ExploreLimits {
        self.limits
    }

    /// Build the explore listing for a filter selection
    pub fn explore_page(&self, dataset: &Dataset, selection: &FilterSelection) -> ExplorePage {
        let filtered = filter_destinations(&dataset.destinations, selection);
        let top_recommendations = self.recommendations(dataset, self.limits.recommendation_count);

        tracing::debug!(
            "Explore page: {} of {} destinations after filtering",
            filtered.len(),
            dataset.destinations.len()
        );

        ExplorePage {
            filtered,
            top_recommendations,
            total_destinations: dataset.destinations.len(),
            has_filters: selection.is_active(),
        }
    }

    /// Best rated destinations, at most `limit`
    pub fn recommendations(&self, dataset: &Dataset, limit: usize) -> Vec<Destination> {
        let averages = average_ratings(&dataset.reviews);
        top_recommendations(&dataset.destinations, &averages, limit)
    }

    /// Build the detail page of a place, `None` when the place is unknown
    pub fn detail_page(&self, dataset: &Dataset, place: &str) -> Option<DetailPage> {
        let destination = dataset.destination(place)?.clone();
        let reviews = reviews_for(&dataset.reviews, place);
        let hotels = nearby_hotels(&destination, &dataset.hotels, self.limits.nearby_hotel_limit);

        Some(DetailPage {
            destination,
            reviews,
            hotels,
        })
    }

    /// Destinations on a favorites list, in dataset order
    pub fn favorites(&self, dataset: &Dataset, places: &[String]) -> Vec<Destination> {
        dataset
            .destinations
            .iter()
            .filter(|d| places.contains(&d.place))
            .cloned()
            .collect()
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::with_default_limits()
    }
}
