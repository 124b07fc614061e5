use crate::models::{Activity, Choice, Crowdedness, Destination, Experience, FilterSelection};

/// Review count above which a destination counts as popular
pub const POPULAR_REVIEW_THRESHOLD: u64 = 10_000;

/// Review count at or below which a destination counts as quiet
pub const QUIET_REVIEW_THRESHOLD: u64 = 5_000;

impl Experience {
    /// Description substrings that trigger this experience
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Experience::Nature => &[
                "nature", "mountain", "rice fields", "valley", "waterfall", "garden", "forest", "park",
            ],
            Experience::Beach => &["beach", "coast"],
            Experience::CulturalTemple => &["temple", "cultural", "hindu"],
            Experience::Adventure => &[
                "volcano", "trek", "swing", "rafting", "safari", "water park", "zoo",
            ],
            Experience::Wildlife => &["monkey", "zoo", "bird", "reptile", "animal"],
            Experience::RelaxationScenic => &[
                "scenic", "gardens", "ridge walk", "retreat", "hot spring",
            ],
            Experience::HistoricalSites => &[
                "ancient", "historical", "monument", "palace", "sanctuary",
            ],
        }
    }
}

impl Activity {
    /// Description substrings that trigger this activity
    pub fn description_keywords(self) -> &'static [&'static str] {
        match self {
            Activity::Sightseeing => &[
                "tourist", "icon", "destination", "cultural park", "landmark", "village", "scenic",
            ],
            Activity::HikingTrekking => &["trek", "hiking"],
            Activity::SwimmingSnorkeling => &["bathing", "swimming", "water park"],
            Activity::Photography => &["photography", "scenic", "views", "gardens"],
            Activity::SpiritualReligious => &[
                "temple", "hindu", "pilgrimage", "spiritual", "holy spring",
            ],
            Activity::ShoppingMarkets => &["market", "souvenirs", "handicrafts", "produce"],
        }
    }

    /// Place-name substrings that trigger this activity
    pub fn place_keywords(self) -> &'static [&'static str] {
        match self {
            Activity::HikingTrekking => &["mount"],
            Activity::SwimmingSnorkeling => &["beach", "waterboom"],
            _ => &[],
        }
    }
}

impl Crowdedness {
    pub fn admits(self, review_count: u64) -> bool {
        match self {
            Crowdedness::PopularCrowded => review_count > POPULAR_REVIEW_THRESHOLD,
            Crowdedness::QuietLessTouristy => review_count <= QUIET_REVIEW_THRESHOLD,
            Crowdedness::DoesntMatter => true,
        }
    }
}

#[inline]
fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Check the experience predicate (Stage 1)
#[inline]
pub fn matches_experience(destination: &Destination, experience: &Choice<Experience>) -> bool {
    match experience {
        Choice::Known(experience) => {
            let description = destination.description.to_lowercase();
            contains_any(&description, experience.keywords())
        }
        Choice::Unrecognized(_) => false,
    }
}

/// Check the activity predicate (Stage 2)
///
/// Matches against the description and, for some activities, the place name.
#[inline]
pub fn matches_activity(destination: &Destination, activity: &Choice<Activity>) -> bool {
    match activity {
        Choice::Known(activity) => {
            let description = destination.description.to_lowercase();
            let place = destination.place.to_lowercase();
            contains_any(&description, activity.description_keywords())
                || contains_any(&place, activity.place_keywords())
        }
        Choice::Unrecognized(_) => false,
    }
}

/// Check the crowdedness predicate (Stage 3)
///
/// Review counts between 5001 and 10000 are neither popular nor quiet.
#[inline]
pub fn matches_crowdedness(destination: &Destination, crowdedness: &Choice<Crowdedness>) -> bool {
    match crowdedness {
        Choice::Known(crowdedness) => crowdedness.admits(destination.review_count),
        Choice::Unrecognized(_) => false,
    }
}

/// Check the text query against the place name (Stage 4)
#[inline]
pub fn matches_query(destination: &Destination, query: &str) -> bool {
    destination
        .place
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Apply every active predicate of the selection to the destination list
///
/// Keeps input order and never widens: each present field narrows the
/// working set produced by the previous stage. An unrecognized category
/// value empties the result.
pub fn filter_destinations(
    destinations: &[Destination],
    selection: &FilterSelection,
) -> Vec<Destination> {
    destinations
        .iter()
        // Stage 1: Experience
        .filter(|d| {
            selection
                .experience
                .as_ref()
                .map_or(true, |experience| matches_experience(d, experience))
        })
        // Stage 2: Activity
        .filter(|d| {
            selection
                .activity
                .as_ref()
                .map_or(true, |activity| matches_activity(d, activity))
        })
        // Stage 3: Crowdedness
        .filter(|d| {
            selection
                .crowdedness
                .as_ref()
                .map_or(true, |crowdedness| matches_crowdedness(d, crowdedness))
        })
        // Stage 4: Text query
        .filter(|d| {
            selection
                .query
                .as_deref()
                .filter(|q| !q.is_empty())
                .map_or(true, |q| matches_query(d, q))
        })
        .cloned()
        .collect()
}
