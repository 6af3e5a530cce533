use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, thiserror::Error)]
pub enum ThumbnailError {
    #[error("thumbnail request failed: {0}")]
    Http(#[from] reqwest::Error),
}

type Slot = Arc<tokio::sync::Mutex<Option<Vec<u8>>>>;

/// Byte cache for hotel thumbnails, keyed by URL.
///
/// Each URL gets one async slot. The first fetcher holds the slot lock
/// while the request is in flight, so concurrent fetches of the same URL
/// coalesce into a single upstream request. A failed fetch leaves the
/// slot empty and the next fetch re-attempts it. Dropping the cache (or
/// an individual fetch future) abandons any in-flight request.
pub struct ThumbnailCache {
    http: reqwest::Client,
    slots: Mutex<HashMap<String, Slot>>,
}

impl ThumbnailCache {
    pub fn new(http: reqwest::Client) -> Self {
        Self {
            http,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Cached bytes for the URL, fetching them on a miss.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, ThumbnailError> {
        let slot = self.slot(url);
        let mut entry = slot.lock().await;
        if let Some(bytes) = entry.as_ref() {
            return Ok(bytes.clone());
        }
        let bytes = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?
            .to_vec();
        *entry = Some(bytes.clone());
        Ok(bytes)
    }

    /// Whether the thumbnail has been downloaded. Bytes are present in
    /// the cache if and only if this returns true.
    pub fn is_ready(&self, url: &str) -> bool {
        let slots = self.slots.lock().unwrap();
        slots
            .get(url)
            .is_some_and(|slot| slot.try_lock().map(|entry| entry.is_some()).unwrap_or(false))
    }

    fn slot(&self, url: &str) -> Slot {
        let mut slots = self.slots.lock().unwrap();
        slots.entry(url.to_string()).or_default().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_url_is_not_ready() {
        let cache = ThumbnailCache::new(reqwest::Client::new());
        assert!(!cache.is_ready("https://img.example.com/none.jpg"));
    }
}
