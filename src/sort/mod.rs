use std::cmp::Ordering;
use std::str::FromStr;

use crate::models::Hotel;

/// Sort criterion selected by the user. Nothing is persisted: every
/// selection re-sorts the current list in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Recommended,
    LowestPrice,
    StarRating,
    Distance,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recommended" => Ok(SortBy::Recommended),
            "lowest-price" => Ok(SortBy::LowestPrice),
            "star-rating" => Ok(SortBy::StarRating),
            "distance" => Ok(SortBy::Distance),
            other => Err(format!(
                "unknown sort mode {other:?}, expected one of: recommended, lowest-price, star-rating, distance"
            )),
        }
    }
}

/// Re-sorts the list in place. Equal keys keep no particular order
/// beyond what the underlying sort guarantees.
pub fn sort_hotels(hotels: &mut [Hotel], sort_by: SortBy) {
    match sort_by {
        SortBy::Recommended => hotels.sort_by(by_recommended),
        SortBy::LowestPrice => hotels.sort_by(by_lowest_price),
        SortBy::StarRating => hotels.sort_by(by_star_rating),
        SortBy::Distance => hotels.sort_by(by_distance),
    }
}

/// Descending by priority score; the score is always present.
fn by_recommended(a: &Hotel, b: &Hotel) -> Ordering {
    b.priority_score.total_cmp(&a.priority_score)
}

/// Ascending by price. A hotel without a price sorts after every hotel
/// with one; two priceless hotels compare equal, with no secondary key.
fn by_lowest_price(a: &Hotel, b: &Hotel) -> Ordering {
    match (a.price, b.price) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Descending by star rating, absent rating treated as zero.
fn by_star_rating(a: &Hotel, b: &Hotel) -> Ordering {
    b.star_rating
        .unwrap_or(0.0)
        .total_cmp(&a.star_rating.unwrap_or(0.0))
}

/// Ascending by distance; the distance is always present.
fn by_distance(a: &Hotel, b: &Hotel) -> Ordering {
    a.distance_in_meters.total_cmp(&b.distance_in_meters)
}
