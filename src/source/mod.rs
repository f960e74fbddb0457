//! Entry acquisition.
//!
//! The [`Loader`] makes one attempt against the configured [`EntrySource`]
//! and substitutes the embedded listing on any failure, so that startup
//! always ends with a usable collection.

pub mod fallback;
pub mod file_source;
pub mod http_source;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::app::{Result, VitrineError};
use crate::domain::Entry;

pub use fallback::{fallback_entries, StaticSource};
pub use file_source::FileSource;
pub use http_source::HttpSource;

#[async_trait]
pub trait EntrySource {
    async fn fetch_entries(&self) -> Result<Vec<Entry>>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Parse a JSON array of entries.
pub fn parse_listing(body: &[u8]) -> Result<Vec<Entry>> {
    Ok(serde_json::from_slice(body)?)
}

/// Build a source from a `--source` value: an http(s) URL or a file path.
pub fn source_from_location(
    location: &str,
    timeout: Duration,
) -> Result<Arc<dyn EntrySource + Send + Sync>> {
    match Url::parse(location) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            Ok(Arc::new(HttpSource::new(url.as_str(), timeout)?))
        }
        Ok(url) if url.scheme() == "file" => {
            let path = url
                .to_file_path()
                .map_err(|_| VitrineError::InvalidSource(location.to_string()))?;
            Ok(Arc::new(FileSource::new(path)))
        }
        Ok(url) if url.scheme().len() > 1 => Err(VitrineError::InvalidSource(format!(
            "unsupported scheme '{}' in {}",
            url.scheme(),
            location
        ))),
        // Relative paths and Windows drive letters fall through to the filesystem.
        _ => Ok(Arc::new(FileSource::new(location))),
    }
}

pub struct Loader {
    source: Arc<dyn EntrySource + Send + Sync>,
}

impl Loader {
    /// Loader over `remote`, or over the embedded listing when there is none.
    pub fn new(remote: Option<Arc<dyn EntrySource + Send + Sync>>) -> Self {
        Self {
            source: remote.unwrap_or_else(|| Arc::new(StaticSource)),
        }
    }

    pub fn static_only() -> Self {
        Self::new(None)
    }

    /// Load the session's entry collection. Never fails.
    pub async fn load(&self) -> Vec<Entry> {
        let entries = match self.source.fetch_entries().await {
            Ok(entries) => {
                tracing::info!(
                    "Loaded {} entries from {}",
                    entries.len(),
                    self.source.describe()
                );
                entries
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to load entries from {}: {}; using static gallery data",
                    self.source.describe(),
                    e
                );
                fallback_entries()
            }
        };

        dedupe_ids(entries)
    }
}

/// Keep the first entry for each id.
fn dedupe_ids(entries: Vec<Entry>) -> Vec<Entry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| {
            let fresh = seen.insert(entry.id.clone());
            if !fresh {
                tracing::warn!("Dropping entry with duplicate id {}", entry.id);
            }
            fresh
        })
        .collect()
}
