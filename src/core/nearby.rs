use crate::models::{Destination, Hotel};

/// Split a destination location into lowercase search keywords
///
/// "Ubud, Gianyar , " becomes ["ubud", "gianyar"].
pub fn location_keywords(location: &str) -> Vec<String> {
    location
        .split(',')
        .map(|segment| segment.trim().to_lowercase())
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Check if a hotel address mentions any of the keywords
#[inline]
pub fn address_matches(hotel: &Hotel, keywords: &[String]) -> bool {
    match hotel.address.as_deref() {
        Some(address) if !address.is_empty() => {
            let address = address.to_lowercase();
            keywords.iter().any(|k| address.contains(k.as_str()))
        }
        _ => false,
    }
}

/// Highest rated hotels of the whole collection
///
/// Works on a copy so the caller's ordering is left alone.
pub fn top_rated_hotels(hotels: &[Hotel], limit: usize) -> Vec<Hotel> {
    let mut sorted = hotels.to_vec();
    sorted.sort_by(|a, b| b.rating_or_zero().total_cmp(&a.rating_or_zero()));
    sorted.truncate(limit);
    sorted
}

/// Find hotels near a destination by address keyword
///
/// Genuine matches are returned in collection order, truncated to `limit`.
/// Only when nothing matches does it fall back to the top rated hotels.
pub fn nearby_hotels(destination: &Destination, hotels: &[Hotel], limit: usize) -> Vec<Hotel> {
    let keywords = location_keywords(&destination.location);

    let matched: Vec<Hotel> = hotels
        .iter()
        .filter(|hotel| address_matches(hotel, &keywords))
        .take(limit)
        .cloned()
        .collect();

    if matched.is_empty() {
        tracing::debug!(
            "No hotel address matches location '{}', using top rated fallback",
            destination.location
        );
        return top_rated_hotels(hotels, limit);
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_hotel(name: &str, address: Option<&str>, rating: Option<f64>) -> Hotel {
        Hotel {
            name: name.to_string(),
            picture: String::new(),
            category: "Hotel".to_string(),
            rating,
            address: address.map(str::to_string),
            contact: String::new(),
            price: String::new(),
            amenities: String::new(),
        }
    }

    fn create_destination(location: &str) -> Destination {
        Destination {
            place: "Test Place".to_string(),
            picture: String::new(),
            location: location.to_string(),
            coordinate: String::new(),
            maps_rating: 0.0,
            review_count: 0,
            source: None,
            description: String::new(),
            visitor_fee: String::new(),
        }
    }

    #[test]
    fn test_location_keywords() {
        assert_eq!(location_keywords(" Ubud, Gianyar ,, "), vec!["ubud", "gianyar"]);
        assert!(location_keywords("").is_empty());
    }

    #[test]
    fn test_matches_keep_collection_order() {
        let hotels = vec![
            create_hotel("Low", Some("Jl. Raya UBUD 1"), Some(3.0)),
            create_hotel("Elsewhere", Some("Kuta"), Some(5.0)),
            create_hotel("High", Some("Gianyar regency"), Some(4.9)),
        ];

        let result = nearby_hotels(&create_destination("Ubud, Gianyar"), &hotels, 8);
        let names: Vec<&str> = result.iter().map(|h| h.name.as_str()).collect();

        assert_eq!(names, vec!["Low", "High"]);
    }

    #[test]
    fn test_fallback_top_rated() {
        let hotels = vec![
            create_hotel("A", Some("Kuta"), Some(4.0)),
            create_hotel("B", None, None),
            create_hotel("C", Some("Sanur"), Some(4.8)),
            create_hotel("D", Some("Canggu"), Some(4.5)),
        ];

        let result = nearby_hotels(&create_destination("Nowhereville"), &hotels, 2);
        let names: Vec<&str> = result.iter().map(|h| h.name.as_str()).collect();

        assert_eq!(names, vec!["C", "D"]);
        // Caller's collection is untouched
        assert_eq!(hotels[0].name, "A");
    }

    #[test]
    fn test_fallback_ties_keep_collection_order() {
        let hotels = vec![
            create_hotel("Unrated", Some("Kuta"), None),
            create_hotel("First", Some("Sanur"), Some(4.2)),
            create_hotel("Zero", Some("Canggu"), Some(0.0)),
            create_hotel("Second", Some("Seminyak"), Some(4.2)),
        ];

        let result = top_rated_hotels(&hotels, 4);
        let names: Vec<&str> = result.iter().map(|h| h.name.as_str()).collect();

        assert_eq!(names, vec!["First", "Second", "Unrated", "Zero"]);
    }

    #[test]
    fn test_missing_address_never_matches() {
        let hotel = create_hotel("No address", None, Some(5.0));
        let empty = create_hotel("Empty", Some(""), Some(5.0));
        let keywords = location_keywords("Ubud");

        assert!(!address_matches(&hotel, &keywords));
        assert!(!address_matches(&empty, &keywords));
    }

    #[test]
    fn test_limit_applies_to_matches() {
        let hotels: Vec<Hotel> = (0..12)
            .map(|i| create_hotel(&format!("H{}", i), Some("Seminyak"), Some(i as f64)))
            .collect();

        let result = nearby_hotels(&create_destination("Seminyak"), &hotels, 8);

        assert_eq!(result.len(), 8);
        assert_eq!(result[0].name, "H0");
    }
}
