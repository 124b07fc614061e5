/// Plan for a single day
#[derive(Debug, Clone, Copy)]
pub struct DayPlan {
    pub title: &'static str,
    pub stops: &'static [(&'static str, &'static str)],
}

/// Fixed three-day Bali template
pub const TEMPLATE: [DayPlan; 3] = [
    DayPlan {
        title: "Cultural Immersion",
        stops: &[
            ("09:00 - 11:00", "Ubud Monkey Forest"),
            ("11:30 - 13:00", "Ubud Art Market (Shopping)"),
            ("13:00 - 14:00", "Lunch at local Warung"),
            ("14:30 - 16:00", "Goa Gajah (Elephant Cave)"),
            ("17:00 - 18:30", "Tanah Lot Temple (Sunset)"),
        ],
    },
    DayPlan {
        title: "Nature & Adventure",
        stops: &[
            ("08:00 - 11:00", "Mount Batur (Sunrise Trek)"),
            ("12:00 - 13:30", "Tegalalang Rice Terrace"),
            ("14:00 - 15:30", "Tirta Empul Temple"),
            ("16:00 - 17:00", "Bali Swing"),
        ],
    },
    DayPlan {
        title: "Beach & Relaxation",
        stops: &[
            ("10:00 - 13:00", "Kuta Beach (Surfing)"),
            ("13:00 - 14:30", "Lunch at Seminyak"),
            ("15:00 - 17:00", "Uluwatu Temple"),
            ("17:30 - 19:00", "Jimbaran Bay (Seafood Dinner)"),
        ],
    },
];

/// Number of template days shown for a requested trip length
///
/// One and two day trips are cut short; anything else gets the full template.
#[inline]
pub fn days_shown(days: u8) -> usize {
    match days {
        1 => 1,
        2 => 2,
        _ => TEMPLATE.len(),
    }
}

fn render_day(number: usize, day: &DayPlan) -> String {
    let mut out = format!("Day {}: {}", number, day.title);
    for (slot, stop) in day.stops {
        out.push_str(&format!("\n  {}: {}", slot, stop));
    }
    out
}

/// Generated trip plan
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub place: String,
    pub days: u8,
    pub text: String,
}

/// Build the itinerary for a trip to `place`
///
/// The place only labels the plan; the stops come from the fixed template.
pub fn generate_itinerary(place: &str, days: u8) -> Itinerary {
    let text = TEMPLATE
        .iter()
        .take(days_shown(days))
        .enumerate()
        .map(|(i, day)| render_day(i + 1, day))
        .collect::<Vec<_>>()
        .join("\n\n");

    Itinerary {
        place: place.to_string(),
        days,
        text,
    }
}
