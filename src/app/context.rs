use std::sync::Arc;

use crate::config::Config;
use crate::source::{source_from_location, Loader};

pub struct AppContext {
    pub loader: Loader,
    pub config: Arc<Config>,
}

impl AppContext {
    /// Wire up the loader. `source` overrides the configured listing.
    ///
    /// An unusable location falls back to the embedded listing.
    pub fn new(config: Config, source: Option<&str>) -> Self {
        let location = source.or(config.source.url.as_deref());
        let loader = match location {
            Some(location) => match source_from_location(location, config.source.timeout()) {
                Ok(remote) => Loader::new(Some(remote)),
                Err(e) => {
                    tracing::warn!(
                        "Cannot use source {}: {}; using static gallery data",
                        location,
                        e
                    );
                    Loader::static_only()
                }
            },
            None => Loader::static_only(),
        };

        Self {
            loader,
            config: Arc::new(config),
        }
    }
}
