use std::collections::HashMap;
use std::env;

use serde::Deserialize;

use crate::models::Hotel;

/// Catalog endpoint used when `HOTELS_ENDPOINT` is not set.
pub const DEFAULT_ENDPOINT: &str =
    "https://sgerges.s3-eu-west-1.amazonaws.com/iostesttaskhotels.json";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("catalog payload did not decode: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Top-level payload shape: `{ "hotels": { <id>: <record>, ... } }`.
#[derive(Deserialize)]
struct CatalogDocument {
    hotels: HashMap<String, Hotel>,
}

/// Fetches the hotel catalog from a fixed endpoint.
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    pub fn new(http: reqwest::Client, endpoint: String) -> Self {
        Self { http, endpoint }
    }

    /// Endpoint from `HOTELS_ENDPOINT`, or the built-in default.
    pub fn from_env() -> Self {
        let endpoint = env::var("HOTELS_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::new(reqwest::Client::new(), endpoint)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One GET, one decode. The keyed document is flattened into a list
    /// in decoder order; the map key becomes each hotel's id. No order is
    /// guaranteed against the source document.
    ///
    /// Errors are surfaced, not swallowed: the caller decides whether to
    /// keep its previous list.
    pub async fn fetch(&self) -> Result<Vec<Hotel>, CatalogError> {
        let body = self
            .http
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        decode_catalog(&body)
    }
}

fn decode_catalog(body: &[u8]) -> Result<Vec<Hotel>, CatalogError> {
    let document: CatalogDocument = serde_json::from_slice(body)?;
    let hotels = document
        .hotels
        .into_iter()
        .map(|(id, mut hotel)| {
            hotel.id = id;
            hotel
        })
        .collect();
    Ok(hotels)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_HOTELS: &str = r#"{
        "hotels": {
            "h1": {
                "name": { "en": "Palm View" },
                "thumbnailUrl": "https://img.example.com/h1.jpg",
                "price": 604.0,
                "currency": "AED",
                "starRating": 4.0,
                "priorityScore": 8.2,
                "review": null,
                "address": { "en": "Dubai" },
                "distanceInMeters": 2300.0
            },
            "h2": {
                "name": { "en": "Marina Stay" },
                "thumbnailUrl": "https://img.example.com/h2.jpg",
                "price": null,
                "currency": null,
                "starRating": null,
                "priorityScore": 3.1,
                "review": null,
                "address": { "en": "Dubai Marina" },
                "distanceInMeters": 900.0
            }
        }
    }"#;

    #[test]
    fn flattens_the_keyed_document_and_keeps_ids() {
        let mut hotels = decode_catalog(TWO_HOTELS.as_bytes()).unwrap();
        hotels.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(hotels.len(), 2);
        assert_eq!(hotels[0].id, "h1");
        assert_eq!(hotels[0].name("en"), Some("Palm View"));
        assert_eq!(hotels[1].id, "h2");
        assert!(hotels[1].price.is_none());
    }

    #[test]
    fn unexpected_top_level_shape_is_a_decode_error() {
        let err = decode_catalog(br#"{ "results": [1, 2, 3] }"#).unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = decode_catalog(b"not json at all").unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }
}
