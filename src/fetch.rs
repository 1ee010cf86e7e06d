//! HTTP transport behind a small trait.
//!
//! Scrapers only need "give me the body of this url". [`Fetch`] captures that,
//! [`HttpFetcher`] implements it with `reqwest`, and tests plug in an
//! in-memory implementation so the extraction logic runs against fixtures.

use crate::error::{Result, ScrapeError};
use std::time::Instant;
use tracing::{debug, instrument, warn};

/// Trait for fetching a raw document.
pub trait Fetch {
    /// Fetch `url` and return the response body.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Transport`] when the request fails or the server
    /// answers with a non-success status.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// [`Fetch`] implementation backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Fetch for HttpFetcher {
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch(&self, url: &str) -> Result<String> {
        let t0 = Instant::now();
        let transport = |e: reqwest::Error| ScrapeError::Transport {
            url: url.to_string(),
            source: Box::new(e),
        };

        let res = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status());
        let response = match res {
            Ok(r) => r,
            Err(e) => {
                warn!(elapsed_ms = t0.elapsed().as_millis(), error = %e, "GET failed");
                return Err(transport(e));
            }
        };
        let body = response.text().await.map_err(transport)?;

        debug!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis(),
            "Fetched document"
        );
        Ok(body)
    }
}
