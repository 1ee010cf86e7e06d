//! Resolution of the scraper's configuration.
//!
//! The only required setting is the blog's listing root url. It is looked up
//! in order:
//!
//! 1. `--base-url` or the `BLOG_URL` environment variable
//! 2. `base_url` in the YAML file given with `--config`
//! 3. a dotenv-style file (`--env-file`, default `.env`), using its
//!    `BLOG_URL=` line or else its first `KEY=value` line
//!
//! ```yaml
//! base_url: https://blog.example.com/blog/
//! concurrency: 4
//! ```

use crate::error::{Result, ScrapeError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use url::Url;

pub const BASE_URL_VAR: &str = "BLOG_URL";
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Contents of the optional YAML config file.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub concurrency: Option<usize>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    /// Listing root, always ending in `/`.
    pub base_url: Url,
    /// Article fetches allowed in flight at once.
    pub concurrency: usize,
}

/// Explicit settings from the command line, highest precedence.
#[derive(Debug, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub config: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    pub concurrency: Option<usize>,
}

#[instrument(level = "info", skip_all)]
pub fn resolve(overrides: &Overrides) -> Result<ScraperConfig> {
    let file = match &overrides.config {
        Some(path) => load_yaml(path)?,
        None => FileConfig::default(),
    };

    let (raw, origin) = if let Some(url) = &overrides.base_url {
        (url.clone(), "command line")
    } else if let Some(url) = &file.base_url {
        (url.clone(), "config file")
    } else {
        let env_file = overrides.env_file.as_deref();
        match read_env_file(env_file.unwrap_or(Path::new(DEFAULT_ENV_FILE)), env_file.is_some())? {
            Some(url) => (url, "env file"),
            None => {
                return Err(ScrapeError::Config(format!(
                    "no base url: pass --base-url, set {BASE_URL_VAR}, or provide a config or {DEFAULT_ENV_FILE} file"
                )));
            }
        }
    };

    let base_url = parse_base_url(&raw)?;
    let concurrency = overrides.concurrency.or(file.concurrency).unwrap_or(1).max(1);
    info!(%base_url, origin, concurrency, "Resolved configuration");
    Ok(ScraperConfig {
        base_url,
        concurrency,
    })
}

pub fn load_yaml(path: &Path) -> Result<FileConfig> {
    let contents = fs::read_to_string(path)?;
    let config: FileConfig = serde_yaml::from_str(&contents)?;
    debug!(path = %path.display(), ?config, "Loaded config file");
    Ok(config)
}

/// Base url from a dotenv-style file.
///
/// A missing file is an error only when it was asked for explicitly.
pub fn read_env_file(path: &Path, required: bool) -> Result<Option<String>> {
    match dotenvy::from_path_iter(path) {
        Ok(iter) => pick_base_url(iter),
        Err(e) if !required && e.not_found() => Ok(None),
        Err(e) => Err(env_file_error(e)),
    }
}

/// Base url from dotenv-formatted text.
pub fn parse_env_file(contents: &str) -> Result<Option<String>> {
    pick_base_url(dotenvy::from_read_iter(contents.as_bytes()))
}

/// Value of `BLOG_URL`, or of the first non-empty pair.
fn pick_base_url<R: std::io::Read>(iter: dotenvy::Iter<R>) -> Result<Option<String>> {
    let pairs = iter
        .collect::<std::result::Result<Vec<(String, String)>, _>>()
        .map_err(env_file_error)?;
    let mut pairs = pairs
        .into_iter()
        .map(|(k, v)| (k, v.trim().to_string()))
        .filter(|(_, v)| !v.is_empty());
    let first = pairs.next();
    let base_url = match first {
        Some((k, v)) if k == BASE_URL_VAR => Some(v),
        first => pairs
            .find(|(k, _)| k == BASE_URL_VAR)
            .or(first)
            .map(|(_, v)| v),
    };
    Ok(base_url)
}

fn env_file_error(e: dotenvy::Error) -> ScrapeError {
    match e {
        dotenvy::Error::Io(e) => ScrapeError::Io(e),
        other => ScrapeError::Config(format!("invalid env file: {other}")),
    }
}

/// Parse the listing root, which must be an absolute http(s) url.
///
/// A trailing `/` is added so page urls can be joined onto it.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    let with_slash = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    let url = Url::parse(&with_slash)
        .map_err(|e| ScrapeError::Config(format!("invalid base url {raw:?}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ScrapeError::Config(format!(
            "base url {raw:?} must use http or https"
        )));
    }
    Ok(url)
}
