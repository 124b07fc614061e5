// Criterion benchmarks for Bali Explore

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use bali_explore::core::{average_ratings, filter_destinations, nearby_hotels, top_recommendations};
use bali_explore::models::{Choice, Crowdedness, Destination, DestinationReviews, Experience, FilterSelection, Hotel, Review};

const DESCRIPTIONS: &[&str] = &[
    "Sacred monkey forest sanctuary",
    "A serene beach with white coast",
    "Volcano trek with scenic views",
    "Village market with handicrafts",
];

fn create_destination(id: usize) -> Destination {
    Destination {
        place: format!("Place {}", id),
        picture: String::new(),
        location: format!("Village {}, Regency {}", id % 40, id % 9),
        coordinate: String::new(),
        maps_rating: 4.0,
        review_count: (id as u64 * 137) % 20_000,
        source: None,
        description: DESCRIPTIONS[id % DESCRIPTIONS.len()].to_string(),
        visitor_fee: "Free".to_string(),
    }
}

fn create_hotel(id: usize) -> Hotel {
    Hotel {
        name: format!("Hotel {}", id),
        picture: String::new(),
        category: "Hotel".to_string(),
        rating: Some((id % 50) as f64 / 10.0),
        address: Some(format!("Jl. Raya {}, Village {}", id, id % 60)),
        contact: String::new(),
        price: String::new(),
        amenities: String::new(),
    }
}

fn bench_filtering(c: &mut Criterion) {
    let selection = FilterSelection {
        query: Some("place 1".to_string()),
        experience: Some(Choice::Known(Experience::Beach)),
        activity: None,
        crowdedness: Some(Choice::Known(Crowdedness::QuietLessTouristy)),
    };

    let mut group = c.benchmark_group("filtering");

    for count in [100, 1000, 10000].iter() {
        let destinations: Vec<Destination> = (0..*count).map(create_destination).collect();

        group.bench_with_input(BenchmarkId::new("filter_destinations", count), count, |b, _| {
            b.iter(|| filter_destinations(black_box(&destinations), black_box(&selection)));
        });
    }

    group.finish();
}

fn bench_ranking(c: &mut Criterion) {
    let destinations: Vec<Destination> = (0..1000).map(create_destination).collect();
    let groups: Vec<DestinationReviews> = destinations
        .iter()
        .enumerate()
        .map(|(i, d)| DestinationReviews {
            place: d.place.clone(),
            reviews: (0..(i % 10))
                .map(|j| Review { review: String::new(), rating: ((i + j) % 5 + 1) as f64 })
                .collect(),
        })
        .collect();
    let averages = average_ratings(&groups);

    c.bench_function("top_recommendations_1000", |b| {
        b.iter(|| top_recommendations(black_box(&destinations), black_box(&averages), 8));
    });
}

fn bench_nearby_hotels(c: &mut Criterion) {
    let hotels: Vec<Hotel> = (0..2000).map(create_hotel).collect();
    let matching = create_destination(7);
    let mut unmatched = create_destination(8);
    unmatched.location = "Nowhereville".to_string();

    c.bench_function("nearby_hotels_match", |b| {
        b.iter(|| nearby_hotels(black_box(&matching), black_box(&hotels), 8));
    });

    c.bench_function("nearby_hotels_fallback", |b| {
        b.iter(|| nearby_hotels(black_box(&unmatched), black_box(&hotels), 8));
    });
}

criterion_group!(
    benches,
    bench_filtering,
    bench_ranking,
    bench_nearby_hotels
);

criterion_main!(benches);
