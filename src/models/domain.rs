use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Tourist destination as stored in `destinationBali.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    #[serde(rename = "Place")]
    pub place: String,
    #[serde(rename = "Picture", default)]
    pub picture: String,
    #[serde(rename = "Location", default)]
    pub location: String,
    #[serde(rename = "Coordinate", default)]
    pub coordinate: String,
    #[serde(rename = "Google Maps Rating", default)]
    pub maps_rating: f64,
    #[serde(rename = "Google Reviews (Count)", default)]
    pub review_count: u64,
    #[serde(rename = "Source", default)]
    pub source: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Tourism/Visitor Fee (approx in USD)", default)]
    pub visitor_fee: String,
}

/// Single visitor review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub review: String,
    #[serde(default)]
    pub rating: f64,
}

/// Reviews grouped by place, as stored in `destinationReview.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationReviews {
    pub place: String,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Hotel listing as stored in `hotelsBali.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Picture", default)]
    pub picture: String,
    #[serde(rename = "Category", default)]
    pub category: String,
    #[serde(rename = "Rating", default)]
    pub rating: Option<f64>,
    #[serde(rename = "Address", default)]
    pub address: Option<String>,
    #[serde(rename = "Contact", default)]
    pub contact: String,
    #[serde(rename = "Price", default)]
    pub price: String,
    #[serde(rename = "Amenities", default)]
    pub amenities: String,
}

impl Hotel {
    /// Rating with missing values treated as zero
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }
}

/// Tour guide as stored in `tourGuides.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourGuide {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub picture: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Every collection the explorer works over, loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub destinations: Vec<Destination>,
    pub reviews: Vec<DestinationReviews>,
    pub hotels: Vec<Hotel>,
    pub guides: Vec<TourGuide>,
}

impl Dataset {
    /// Look up a destination by its exact place name
    pub fn destination(&self, place: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.place == place)
    }
}

/// Kind of experience a visitor is looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Experience {
    Nature,
    Beach,
    CulturalTemple,
    Adventure,
    Wildlife,
    RelaxationScenic,
    HistoricalSites,
}

impl Experience {
    pub const ALL: [Experience; 7] = [
        Experience::Nature,
        Experience::Beach,
        Experience::CulturalTemple,
        Experience::Adventure,
        Experience::Wildlife,
        Experience::RelaxationScenic,
        Experience::HistoricalSites,
    ];

    /// Label used by the explore filter UI and query string
    pub fn label(self) -> &'static str {
        match self {
            Experience::Nature => "Nature",
            Experience::Beach => "Beach",
            Experience::CulturalTemple => "Cultural & Temple Visits",
            Experience::Adventure => "Adventure",
            Experience::Wildlife => "Wildlife",
            Experience::RelaxationScenic => "Relaxation & Scenic Views",
            Experience::HistoricalSites => "Historical Sites",
        }
    }
}

impl FromStr for Experience {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Experience::ALL
            .into_iter()
            .find(|e| e.label() == s)
            .ok_or(())
    }
}

/// Activity a visitor wants to do at the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    Sightseeing,
    HikingTrekking,
    SwimmingSnorkeling,
    Photography,
    SpiritualReligious,
    ShoppingMarkets,
}

impl Activity {
    pub const ALL: [Activity; 6] = [
        Activity::Sightseeing,
        Activity::HikingTrekking,
        Activity::SwimmingSnorkeling,
        Activity::Photography,
        Activity::SpiritualReligious,
        Activity::ShoppingMarkets,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Activity::Sightseeing => "Sightseeing",
            Activity::HikingTrekking => "Hiking & Trekking",
            Activity::SwimmingSnorkeling => "Swimming & Snorkeling",
            Activity::Photography => "Photography",
            Activity::SpiritualReligious => "Spiritual & Religious",
            Activity::ShoppingMarkets => "Shopping & Local Markets",
        }
    }
}

impl FromStr for Activity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Activity::ALL.into_iter().find(|a| a.label() == s).ok_or(())
    }
}

/// Coarse visitor-volume bucket derived from the review count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crowdedness {
    PopularCrowded,
    QuietLessTouristy,
    DoesntMatter,
}

impl Crowdedness {
    pub const ALL: [Crowdedness; 3] = [
        Crowdedness::PopularCrowded,
        Crowdedness::QuietLessTouristy,
        Crowdedness::DoesntMatter,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Crowdedness::PopularCrowded => "Popular & Crowded",
            Crowdedness::QuietLessTouristy => "Quiet & Less Touristy",
            Crowdedness::DoesntMatter => "Doesn't Matter",
        }
    }
}

impl FromStr for Crowdedness {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Crowdedness::ALL.into_iter().find(|c| c.label() == s).ok_or(())
    }
}

/// A category value picked in the filter UI.
///
/// Values outside the closed vocabulary are kept as `Unrecognized` and match
/// nothing, which is not the same as leaving the field empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Choice<T> {
    Known(T),
    Unrecognized(String),
}

impl<T: FromStr> Choice<T> {
    /// Parse a raw query value; empty or missing means no constraint
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let raw = raw?;
        if raw.is_empty() {
            return None;
        }
        Some(match raw.parse::<T>() {
            Ok(value) => Choice::Known(value),
            Err(_) => Choice::Unrecognized(raw.to_string()),
        })
    }
}

/// Current filter intent for the destination listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterSelection {
    pub query: Option<String>,
    pub experience: Option<Choice<Experience>>,
    pub activity: Option<Choice<Activity>>,
    pub crowdedness: Option<Choice<Crowdedness>>,
}

impl FilterSelection {
    /// Build a selection from raw query-string values
    pub fn from_raw(
        query: Option<&str>,
        experience: Option<&str>,
        activity: Option<&str>,
        crowdedness: Option<&str>,
    ) -> Self {
        Self {
            query: query.filter(|q| !q.is_empty()).map(str::to_string),
            experience: Choice::parse(experience),
            activity: Choice::parse(activity),
            crowdedness: Choice::parse(crowdedness),
        }
    }

    /// True when any field constrains the listing
    pub fn is_active(&self) -> bool {
        self.query.is_some()
            || self.experience.is_some()
            || self.activity.is_some()
            || self.crowdedness.is_some()
    }
}
