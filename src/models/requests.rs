use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::FilterSelection;

/// Query string of the explore listing
///
/// GET /api/v1/destinations?q=&experience=&activity=&crowdness=&show=all
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExploreQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub activity: Option<String>,
    #[serde(default, alias = "crowdedness")]
    pub crowdness: Option<String>,
    #[serde(default)]
    pub show: Option<String>,
}

impl ExploreQuery {
    pub fn selection(&self) -> FilterSelection {
        FilterSelection::from_raw(
            self.q.as_deref(),
            self.experience.as_deref(),
            self.activity.as_deref(),
            self.crowdness.as_deref(),
        )
    }

    pub fn show_all(&self) -> bool {
        self.show.as_deref() == Some("all")
    }
}

/// Query string for top recommendations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationQuery {
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Query string of the tour guide listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuideSearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// Request to generate an itinerary
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ItineraryRequest {
    #[serde(default = "default_place")]
    pub place: String,
    #[validate(range(min = 1, max = 10))]
    #[serde(default = "default_days")]
    pub days: u8,
}

fn default_place() -> String {
    "your destination".to_string()
}

fn default_days() -> u8 {
    3
}

/// Dummy login request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "email")]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Add or remove a place from the session's favorites
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ToggleFavoriteRequest {
    #[validate(length(min = 1))]
    pub session: String,
    #[validate(length(min = 1))]
    pub place: String,
}

/// Query string carrying a session id
///
/// GET /api/v1/favorites?session= and GET /api/v1/auth/session?session=
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionQuery {
    #[serde(default)]
    pub session: String,
}

/// End a dummy session
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogoutRequest {
    #[validate(length(min = 1))]
    pub session: String,
}

/// Application to join as a tour guide
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GuideApplicationRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Contact is required"))]
    pub contact: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub picture: String,
    #[validate(length(min = 1, message = "CV is required"))]
    #[serde(rename = "cvFileName", default)]
    pub cv_file_name: String,
}

/// Message from the home page contact form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContactRequest {
    #[validate(length(max = 200))]
    pub name: String,
    #[validate(length(max = 200))]
    pub email: String,
    #[validate(length(max = 50))]
    pub phone: String,
    #[validate(length(max = 100))]
    pub country: String,
    #[validate(length(max = 200))]
    pub company: String,
    #[validate(length(max = 200))]
    pub interested: String,
    #[validate(length(max = 5000))]
    pub message: String,
}
