//! # blog_scrap
//!
//! Scrapes a blog's paginated listing pages and the articles they link to,
//! producing one row per article with its title, date, author, categories,
//! tags and text.
//!
//! ## Usage
//!
//! ```sh
//! blog_scrap --base-url https://blog.example.com/blog/ --page 2 -f markdown
//! ```
//!
//! ## Architecture
//!
//! 1. **Configuration**: resolve the listing root url (flag, env, YAML, `.env`)
//! 2. **Indexing**: read listing page(s) into ordered listing rows
//! 3. **Fetching**: fetch each listed article and merge it with its row
//! 4. **Output**: write the rows as JSON or a Markdown table

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod dates;
mod dom;
mod error;
mod fetch;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use error::ScrapeError;
use fetch::HttpFetcher;
use outputs::write_output;
use scrapers::{BlogScraper, PageFailurePolicy};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("blog_scrap starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = config::resolve(&args.overrides())?;
    let scraper = BlogScraper::new(HttpFetcher::new(), config.base_url)
        .with_concurrency(config.concurrency)
        .with_normalized_dates(args.normalize_dates);
    info!(base_url = %scraper.base_url(), "Scraper ready");

    // ---- Index, fetch and merge ----
    let rows = match args.last_page {
        Some(last) if last < args.page => {
            return Err(ScrapeError::InvalidArgument(format!(
                "--last-page {last} is before --page {}",
                args.page
            ))
            .into());
        }
        Some(last) => {
            let policy = if args.skip_failed_pages {
                PageFailurePolicy::Skip
            } else {
                PageFailurePolicy::Abort
            };
            scraper.scrape_pages(args.page..=last, policy).await?
        }
        None => scraper.scrape_page(args.page).await?,
    };

    // ---- Output ----
    write_output(&rows, args.format, args.output.as_deref()).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        rows = rows.len(),
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
