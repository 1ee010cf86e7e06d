//! Output sinks for scraped rows.
//!
//! # Submodules
//!
//! - [`json`]: a JSON array of row objects, all columns including `url`
//! - [`markdown`]: a Markdown table with the `title | date | author |
//!   categories | tags | text` columns
//!
//! Both render into a `String`; [`write_output`] sends it to a file or stdout.

pub mod json;
pub mod markdown;

use crate::error::Result;
use crate::models::PageRow;
use crate::utils::ensure_parent_dir;
use clap::ValueEnum;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Markdown,
}

/// Render `rows` in `format`; serializer failures surface as [`ScrapeError::Json`].
///
/// [`ScrapeError::Json`]: crate::error::ScrapeError::Json
pub fn render(rows: &[PageRow], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(json::rows_to_json(rows)?),
        OutputFormat::Markdown => Ok(markdown::rows_to_markdown(rows)),
    }
}

/// Render `rows` and write them to `path`, or to stdout when `path` is `None`.
#[instrument(level = "info", skip_all, fields(rows = rows.len(), ?format))]
pub async fn write_output(
    rows: &[PageRow],
    format: OutputFormat,
    path: Option<&Path>,
) -> Result<()> {
    let rendered = render(rows, format)?;
    match path {
        Some(path) => {
            ensure_parent_dir(path).await?;
            fs::write(path, rendered).await?;
            info!(path = %path.display(), "Wrote output file");
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(rendered.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;
    use crate::models::{ArticleRecord, ListingRow};

    pub(crate) fn sample_rows() -> Vec<PageRow> {
        vec![
            PageRow::merge(
                ListingRow {
                    title: "Scaling Postgres".to_string(),
                    url: "https://blog.example.com/scaling-postgres/".to_string(),
                    categories: vec!["Engineering".to_string(), "Databases".to_string()],
                },
                ArticleRecord {
                    date: "2020-06-17".to_string(),
                    author: "Jane Roe".to_string(),
                    tags: vec!["postgres".to_string()],
                    text: "Lead | with pipe\nand newline".to_string(),
                },
            ),
            PageRow::merge(
                ListingRow {
                    title: "Hiring".to_string(),
                    url: "https://blog.example.com/hiring/".to_string(),
                    categories: vec![],
                },
                ArticleRecord {
                    date: "May 2nd, 1997".to_string(),
                    author: "Ann".to_string(),
                    tags: vec![],
                    text: "We are hiring.".to_string(),
                },
            ),
        ]
    }

    #[tokio::test]
    async fn test_write_output_to_file() {
        let dir = std::env::temp_dir().join(format!("blog_scrap_outputs_{}", std::process::id()));
        let path = dir.join("out").join("rows.json");
        write_output(&sample_rows(), OutputFormat::Json, Some(&path))
            .await
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_render_dispatch() {
        let rows = sample_rows();
        assert!(render(&rows, OutputFormat::Json).unwrap().starts_with('['));
        assert!(render(&rows, OutputFormat::Markdown).unwrap().starts_with("| title"));
    }

    #[tokio::test]
    async fn test_write_output_under_a_file_is_io_error() {
        let dir = std::env::temp_dir().join(format!("blog_scrap_outputs_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("not_a_dir");
        std::fs::write(&blocker, "x").unwrap();

        let err = write_output(&sample_rows(), OutputFormat::Markdown, Some(&blocker.join("rows.md")))
            .await
            .unwrap_err();
        assert!(matches!(err, ScrapeError::Io(_)));
    }

    #[test]
    fn test_serializer_error_converts_to_json_variant() {
        let err: ScrapeError = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err().into();
        assert!(matches!(err, ScrapeError::Json(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }
}
