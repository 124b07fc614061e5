// Core algorithm exports
pub mod explorer;
pub mod filters;
pub mod guides;
pub mod itinerary;
pub mod nearby;
pub mod ranking;

pub use explorer::{DetailPage, ExploreLimits, ExplorePage, Explorer};
pub use filters::{filter_destinations, matches_activity, matches_crowdedness, matches_experience, matches_query};
pub use guides::search_guides;
pub use itinerary::{generate_itinerary, Itinerary};
pub use nearby::{location_keywords, nearby_hotels, top_rated_hotels};
pub use ranking::{average_ratings, mean_rating, reviews_for, top_recommendations};
