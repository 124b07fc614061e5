use crate::models::TourGuide;

/// Search tour guides by name, language or description
///
/// An empty query returns every guide in the original order.
pub fn search_guides(guides: &[TourGuide], query: &str) -> Vec<TourGuide> {
    if query.is_empty() {
        return guides.to_vec();
    }

    let query = query.to_lowercase();
    guides
        .iter()
        .filter(|guide| {
            guide.name.to_lowercase().contains(&query)
                || guide.language.to_lowercase().contains(&query)
                || guide.description.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}
