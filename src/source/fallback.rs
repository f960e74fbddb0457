use async_trait::async_trait;

use crate::app::Result;
use crate::domain::Entry;
use crate::source::EntrySource;

const FALLBACK_LISTING: &str = include_str!("fallback.json");

/// The embedded listing used whenever no remote source is usable.
pub fn fallback_entries() -> Vec<Entry> {
    serde_json::from_str(FALLBACK_LISTING).unwrap_or_else(|e| {
        tracing::error!("Embedded gallery listing is invalid: {}", e);
        Vec::new()
    })
}

/// [`EntrySource`] over the embedded listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSource;

#[async_trait]
impl EntrySource for StaticSource {
    async fn fetch_entries(&self) -> Result<Vec<Entry>> {
        Ok(fallback_entries())
    }

    fn describe(&self) -> String {
        "embedded listing".to_string()
    }
}
