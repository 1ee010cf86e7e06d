//! Error type shared by the fetch, extraction and output layers.
//!
//! Transport failures and malformed pages are kept apart so callers can tell
//! a flaky network from a layout change on the site.

use thiserror::Error;

/// Boxed source error carried by [`ScrapeError::Transport`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The fetch failed or the server answered with a non-success status.
    #[error("failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The site answered 200 with its "Page not found" body.
    #[error("listing page {page} not found")]
    PageNotFound { page: i64 },

    /// An expected DOM region, element or attribute is missing.
    #[error("malformed page {url}: {what}")]
    Extraction { url: String, what: String },

    /// Lists that must stay aligned disagree, or a fixed layout count is off.
    #[error("structural mismatch: {what} (expected {expected}, found {found})")]
    StructuralMismatch {
        what: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid date format: {0}")]
    InvalidFormat(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ScrapeError {
    pub(crate) fn extraction(url: &str, what: impl Into<String>) -> Self {
        ScrapeError::Extraction {
            url: url.to_string(),
            what: what.into(),
        }
    }

    pub(crate) fn mismatch(what: impl Into<String>, expected: usize, found: usize) -> Self {
        ScrapeError::StructuralMismatch {
            what: what.into(),
            expected,
            found,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = ScrapeError::PageNotFound { page: 7 };
        assert_eq!(e.to_string(), "listing page 7 not found");

        let e = ScrapeError::mismatch("categories vs titles", 12, 11);
        assert_eq!(
            e.to_string(),
            "structural mismatch: categories vs titles (expected 12, found 11)"
        );

        let e = ScrapeError::extraction("https://example.com/a/", "missing div.hero__meta");
        assert!(e.to_string().contains("https://example.com/a/"));
        assert!(e.to_string().contains("div.hero__meta"));
    }

    #[test]
    fn test_transport_keeps_source() {
        use std::error::Error as _;
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let e = ScrapeError::Transport {
            url: "https://example.com/1/".to_string(),
            source: Box::new(io),
        };
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("failed to fetch https://example.com/1/"));
    }
}
