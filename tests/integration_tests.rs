// Integration tests for Bali Explore

use bali_explore::core::{
    filters::filter_destinations,
    nearby::{location_keywords, nearby_hotels, top_rated_hotels},
    ranking::{average_ratings, destination_score, top_recommendations},
    Explorer,
};
use bali_explore::models::{
    Activity, Choice, Crowdedness, Dataset, Destination, DestinationReviews, Experience, FilterSelection, Hotel, Review,
};

const DESCRIPTIONS: &[&str] = &[
    "Sacred monkey forest sanctuary with ancient temple",
    "A serene beach with white coast, great for swimming",
    "Active volcano with sunrise trek and scenic views",
    "Traditional village market selling handicrafts and produce",
    "Hindu water temple with holy spring for bathing",
    "Rice fields and waterfall in a lush valley",
    "Bird park and reptile zoo for families",
    "Royal palace and historical monument",
    "Cliff-top retreat with hot spring and gardens",
];

const PLACES: &[&str] = &[
    "Ubud Monkey Forest",
    "Pandawa Beach",
    "Mount Batur",
    "Sukawati Art Market",
    "Tirta Empul",
    "Tegalalang",
    "Bali Bird Park",
    "Puri Saren",
    "Uluwatu Retreat",
    "Waterboom Bali",
    "Tanah Lot Temple",
    "Kuta Beach",
];

const LOCATIONS: &[&str] = &["Ubud, Gianyar", "Kutuh, Badung", "Kintamani, Bangli", "Tabanan", "Nowhereville"];

fn create_dataset() -> Dataset {
    let destinations: Vec<Destination> = PLACES
        .iter()
        .enumerate()
        .map(|(i, place)| Destination {
            place: place.to_string(),
            picture: format!("./public/img/{}.jpg", i),
            location: LOCATIONS[i % LOCATIONS.len()].to_string(),
            coordinate: String::new(),
            maps_rating: 4.0 + (i % 10) as f64 / 10.0,
            review_count: [800, 5000, 5001, 7000, 10000, 10001, 45000][i % 7],
            source: None,
            description: DESCRIPTIONS[i % DESCRIPTIONS.len()].to_string(),
            visitor_fee: "5".to_string(),
        })
        .collect();

    let reviews: Vec<DestinationReviews> = PLACES
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 4 != 0)
        .map(|(i, place)| DestinationReviews {
            place: place.to_string(),
            reviews: (0..(i % 3 + 1))
                .map(|j| Review {
                    review: format!("Review {}", j),
                    rating: ((i + j) % 5 + 1) as f64,
                })
                .collect(),
        })
        .collect();

    let hotels: Vec<Hotel> = (0..15)
        .map(|i| Hotel {
            name: format!("Hotel {}", i),
            picture: String::new(),
            category: "Hotel".to_string(),
            rating: if i % 5 == 0 { None } else { Some((i % 7) as f64 * 0.7) },
            address: match i % 4 {
                0 => Some("Jl. Raya Ubud".to_string()),
                1 => Some("Kuta, Badung".to_string()),
                2 => None,
                _ => Some("Tabanan Regency".to_string()),
            },
            contact: String::new(),
            price: String::new(),
            amenities: String::new(),
        })
        .collect();

    Dataset {
        destinations,
        reviews,
        hotels,
        guides: vec![],
    }
}

fn all_selections() -> Vec<FilterSelection> {
    let mut experiences: Vec<Option<Choice<Experience>>> =
        Experience::ALL.iter().map(|e| Some(Choice::Known(*e))).collect();
    experiences.push(None);
    experiences.push(Some(Choice::Unrecognized("Nightlife".to_string())));

    let mut activities: Vec<Option<Choice<Activity>>> =
        Activity::ALL.iter().map(|a| Some(Choice::Known(*a))).collect();
    activities.push(None);

    let mut crowdedness: Vec<Option<Choice<Crowdedness>>> =
        Crowdedness::ALL.iter().map(|c| Some(Choice::Known(*c))).collect();
    crowdedness.push(None);

    let queries = [None, Some("a".to_string()), Some("BEACH".to_string())];

    let mut selections = Vec::new();
    for experience in &experiences {
        for activity in &activities {
            for crowd in &crowdedness {
                for query in &queries {
                    selections.push(FilterSelection {
                        query: query.clone(),
                        experience: experience.clone(),
                        activity: activity.clone(),
                        crowdedness: crowd.clone(),
                    });
                }
            }
        }
    }
    selections
}

#[test]
fn test_filter_is_idempotent() {
    let dataset = create_dataset();

    for selection in all_selections() {
        let once = filter_destinations(&dataset.destinations, &selection);
        let twice = filter_destinations(&once, &selection);
        assert_eq!(once, twice, "selection {:?}", selection);
    }
}

#[test]
fn test_filter_is_ordered_subsequence() {
    let dataset = create_dataset();

    for selection in all_selections() {
        let result = filter_destinations(&dataset.destinations, &selection);
        assert!(result.len() <= dataset.destinations.len());

        // Every output element appears in the input, in input order
        let mut cursor = dataset.destinations.iter();
        for d in &result {
            assert!(cursor.any(|x| x == d), "{} out of order", d.place);
        }
    }
}

#[test]
fn test_unrecognized_category_empties_result() {
    let dataset = create_dataset();
    let selection = FilterSelection {
        activity: Some(Choice::Unrecognized("Diving".to_string())),
        ..Default::default()
    };

    assert!(filter_destinations(&dataset.destinations, &selection).is_empty());
}

#[test]
fn test_recommendation_count_and_order() {
    let dataset = create_dataset();
    let averages = average_ratings(&dataset.reviews);

    for n in [0, 1, 8, 12, 50] {
        let top = top_recommendations(&dataset.destinations, &averages, n);
        assert_eq!(top.len(), n.min(dataset.destinations.len()));

        for pair in top.windows(2) {
            assert!(destination_score(&pair[0], &averages) >= destination_score(&pair[1], &averages));
        }
    }
}

#[test]
fn test_recommendations_do_not_touch_input() {
    let dataset = create_dataset();
    let before = dataset.destinations.clone();
    let averages = average_ratings(&dataset.reviews);

    let _ = top_recommendations(&dataset.destinations, &averages, 8);

    assert_eq!(dataset.destinations, before);
}

#[test]
fn test_hotel_fallback_exclusivity() {
    let dataset = create_dataset();

    for destination in &dataset.destinations {
        let keywords = location_keywords(&destination.location);
        let result = nearby_hotels(destination, &dataset.hotels, 8);

        let all_match = result.iter().all(|h| {
            h.address
                .as_deref()
                .map(|a| keywords.iter().any(|k| a.to_lowercase().contains(k.as_str())))
                .unwrap_or(false)
        });

        if !all_match {
            assert_eq!(result, top_rated_hotels(&dataset.hotels, 8), "{}", destination.place);
        }
        assert!(result.len() <= 8);
    }
}

#[test]
fn test_end_to_end_detail_pages() {
    let dataset = create_dataset();
    let explorer = Explorer::default();

    for destination in &dataset.destinations {
        let page = explorer.detail_page(&dataset, &destination.place).unwrap();
        assert_eq!(&page.destination, destination);
        assert!(page.hotels.len() <= 8);
    }

    let nowhere = explorer.detail_page(&dataset, "Tirta Empul").unwrap();
    let names: Vec<&str> = nowhere.hotels.iter().map(|h| h.name.as_str()).collect();
    let expected = top_rated_hotels(&dataset.hotels, 8);
    let expected: Vec<&str> = expected.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_duplicate_review_groups() {
    let mut dataset = create_dataset();
    dataset.destinations.truncate(2);
    let first = dataset.destinations[0].place.clone();
    let second = dataset.destinations[1].place.clone();

    let rating = |value: f64| Review {
        review: String::new(),
        rating: value,
    };
    dataset.reviews = vec![
        DestinationReviews { place: second.clone(), reviews: vec![] },
        DestinationReviews { place: second.clone(), reviews: vec![rating(5.0)] },
        DestinationReviews { place: first.clone(), reviews: vec![rating(3.0)] },
    ];

    let explorer = Explorer::default();
    let ranked: Vec<String> = explorer
        .recommendations(&dataset, 8)
        .into_iter()
        .map(|d| d.place)
        .collect();
    assert_eq!(ranked, vec![second.clone(), first]);

    // Detail page shows the first group listed for the place
    let page = explorer.detail_page(&dataset, &second).unwrap();
    assert!(page.reviews.is_empty());
}
