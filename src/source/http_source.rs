use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::app::Result;
use crate::domain::Entry;
use crate::source::{parse_listing, EntrySource};

/// Fetches the listing with a single GET. No retries.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("vitrine/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl EntrySource for HttpSource {
    async fn fetch_entries(&self) -> Result<Vec<Entry>> {
        let response = self.client.get(&self.url).send().await?;
        response.error_for_status_ref()?;
        let body = response.bytes().await?;
        parse_listing(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
