//! Bali Explore - listing queries for destinations, hotels and tour guides
//!
//! This library provides the destination filter, recommendation ranking,
//! nearby hotel matching and guide search used by the explore service.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Explorer, ExploreLimits, filter_destinations, nearby_hotels, search_guides, top_recommendations};
pub use crate::models::{Dataset, Destination, FilterSelection, Hotel, Review, TourGuide};
