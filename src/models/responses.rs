use serde::{Deserialize, Serialize};
use crate::models::domain::{Destination, Hotel, Review, TourGuide};
use crate::models::requests::ContactRequest;

/// Response for the explore listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExploreResponse {
    pub destinations: Vec<Destination>,
    #[serde(rename = "topRecommendations")]
    pub top_recommendations: Vec<Destination>,
    #[serde(rename = "showAll")]
    pub show_all: bool,
    pub total_results: usize,
}

/// Response for a single destination page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailResponse {
    pub destination: Destination,
    pub reviews: Vec<Review>,
    pub hotels: Vec<Hotel>,
}

/// Response for the tour guide listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuidesResponse {
    pub guides: Vec<TourGuide>,
    pub total_results: usize,
}

/// Generated itinerary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryResponse {
    pub place: String,
    pub days: u8,
    pub itinerary: String,
}

/// Successful dummy login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub session: String,
    pub username: String,
}

/// Result of closing a dummy session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub logged_out: bool,
}

/// Owner of an open dummy session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session: String,
    pub username: String,
}

/// Favorites of one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesResponse {
    pub places: Vec<String>,
    pub destinations: Vec<Destination>,
}

/// Result of toggling a favorite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleFavoriteResponse {
    pub place: String,
    pub added: bool,
}

/// Acknowledgement of a tour guide application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideApplicationResponse {
    pub success: bool,
    pub application_id: String,
    pub received_at: chrono::DateTime<chrono::Utc>,
}

/// Acknowledgement of a contact form message, echoing what was sent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message_id: String,
    pub received_at: chrono::DateTime<chrono::Utc>,
    pub submitted: ContactRequest,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub destinations: usize,
    pub hotels: usize,
    pub guides: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
