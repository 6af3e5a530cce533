use std::fmt::Write;

use crate::models::Hotel;

/// Renders a snapshot of the hotel list as text, one block per hotel.
/// Pure: state in, text out. The caller re-renders after every mutation
/// of the list instead of the list notifying anyone.
pub fn render(hotels: &[Hotel], locale: &str) -> String {
    let mut out = String::new();
    for hotel in hotels {
        let _ = writeln!(out, "{}", hotel.name(locale).unwrap_or(&hotel.id));
        if let Some(address) = hotel.address(locale) {
            let _ = writeln!(out, "  {address}");
        }
        let _ = writeln!(
            out,
            "  price: {}  stars: {}  score: {}  distance: {} m",
            hotel.price_label().as_deref().unwrap_or("-"),
            hotel
                .star_rating
                .map(|s| s.to_string())
                .as_deref()
                .unwrap_or("-"),
            hotel.priority_score,
            hotel.distance_in_meters,
        );
        // A review with zero submissions is hidden, same as an empty one.
        if let Some(review) = hotel.review.as_ref().filter(|r| r.count > 0) {
            let _ = writeln!(
                out,
                "  {} ({}, {} reviews)",
                review.score,
                review.description(locale).unwrap_or("-"),
                review.count,
            );
        }
    }
    out
}
