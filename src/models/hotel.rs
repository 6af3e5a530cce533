use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One hotel record from the catalog payload.
///
/// The payload keys records by a string id; the id is filled in when the
/// document is flattened, so it is skipped during deserialization.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    #[serde(skip)]
    pub id: String,
    /// Locale code to display name, e.g. `"en"` or `"ar"`.
    #[serde(default)]
    pub name: HashMap<String, String>,
    pub thumbnail_url: String,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub star_rating: Option<f64>,
    pub priority_score: f64,
    pub review: Option<Review>,
    #[serde(default)]
    pub address: HashMap<String, String>,
    pub distance_in_meters: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub score: f64,
    #[serde(default)]
    pub score_description: HashMap<String, String>,
    pub count: u64,
}

impl Hotel {
    /// Display name for the given locale, falling back to English.
    pub fn name(&self, locale: &str) -> Option<&str> {
        self.name
            .get(locale)
            .or_else(|| self.name.get("en"))
            .map(String::as_str)
    }

    pub fn address(&self, locale: &str) -> Option<&str> {
        self.address
            .get(locale)
            .or_else(|| self.address.get("en"))
            .map(String::as_str)
    }

    /// `"<price> <currency>"` when both parts are present.
    pub fn price_label(&self) -> Option<String> {
        match (self.price, self.currency.as_deref()) {
            (Some(price), Some(currency)) => Some(format!("{price} {currency}")),
            _ => None,
        }
    }
}

impl Review {
    /// Localized score description, falling back to English.
    pub fn description(&self, locale: &str) -> Option<&str> {
        self.score_description
            .get(locale)
            .or_else(|| self.score_description.get("en"))
            .map(String::as_str)
    }
}
