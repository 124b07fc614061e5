// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Activity, Choice, Crowdedness, Dataset, Destination, DestinationReviews, Experience, FilterSelection, Hotel, Review, TourGuide};
pub use requests::{ContactRequest, ExploreQuery, GuideApplicationRequest, GuideSearchQuery, ItineraryRequest, LoginRequest, LogoutRequest, RecommendationQuery, SessionQuery, ToggleFavoriteRequest};
pub use responses::{ContactResponse, DetailResponse, ErrorResponse, ExploreResponse, FavoritesResponse, GuideApplicationResponse, GuidesResponse, HealthResponse, ItineraryResponse, LoginResponse, LogoutResponse, SessionResponse, ToggleFavoriteResponse};
