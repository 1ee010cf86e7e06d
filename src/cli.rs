//! Command-line interface definitions for blog_scrap.
//!
//! Every option can be passed as a flag; the base url also falls back to the
//! `BLOG_URL` environment variable, a YAML config file, or a `.env` file.

use crate::config::Overrides;
use crate::outputs::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # First listing page as JSON on stdout, base url from .env
/// blog_scrap
///
/// # Pages 2 to 5 as a Markdown table, skipping pages that fail
/// blog_scrap --page 2 --last-page 5 --skip-failed-pages -f markdown -o pages.md
///
/// # Explicit base url, ISO dates, four article fetches in flight
/// blog_scrap -b https://blog.example.com/blog/ --normalize-dates --concurrency 4
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Listing root url; page N is fetched from `{base_url}{N}/`
    #[arg(short, long, env = "BLOG_URL")]
    pub base_url: Option<String>,

    /// Optional path to a config.yaml file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Dotenv-style file holding the base url (defaults to `.env` when present)
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Listing page to scrape (1 is the front page)
    #[arg(short, long, default_value_t = 1)]
    pub page: i64,

    /// Scrape every page from --page through this one
    #[arg(long)]
    pub last_page: Option<i64>,

    /// Log and skip pages that fail instead of aborting the run
    #[arg(long)]
    pub skip_failed_pages: bool,

    /// Rewrite "June 17th, 2020" dates as "2020-06-17"
    #[arg(long)]
    pub normalize_dates: bool,

    /// Article pages fetched concurrently (output order is unaffected)
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            config: self.config.clone(),
            env_file: self.env_file.clone(),
            concurrency: self.concurrency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["blog_scrap", "--env-file", "site.env"]);
        assert_eq!(cli.page, 1);
        assert_eq!(cli.last_page, None);
        assert!(!cli.skip_failed_pages);
        assert!(!cli.normalize_dates);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.output, None);
        assert_eq!(cli.env_file, Some(PathBuf::from("site.env")));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "blog_scrap",
            "-b",
            "https://blog.example.com/blog/",
            "-p",
            "3",
            "-f",
            "markdown",
            "-o",
            "/tmp/rows.md",
        ]);

        assert_eq!(cli.base_url.as_deref(), Some("https://blog.example.com/blog/"));
        assert_eq!(cli.page, 3);
        assert_eq!(cli.format, OutputFormat::Markdown);
        assert_eq!(cli.output, Some(PathBuf::from("/tmp/rows.md")));
    }

    #[test]
    fn test_cli_range_and_overrides() {
        let cli = Cli::parse_from([
            "blog_scrap",
            "--base-url",
            "https://blog.example.com/blog/",
            "--page",
            "2",
            "--last-page",
            "6",
            "--skip-failed-pages",
            "--concurrency",
            "4",
            "--config",
            "scrap.yaml",
        ]);

        assert_eq!(cli.last_page, Some(6));
        assert!(cli.skip_failed_pages);
        let overrides = cli.overrides();
        assert_eq!(overrides.concurrency, Some(4));
        assert_eq!(overrides.config, Some(PathBuf::from("scrap.yaml")));
        assert_eq!(overrides.base_url.as_deref(), Some("https://blog.example.com/blog/"));
    }

    #[test]
    fn test_cli_accepts_negative_page() {
        let cli = Cli::parse_from(["blog_scrap", "--page=-5"]);
        assert_eq!(cli.page, -5);
    }
}
