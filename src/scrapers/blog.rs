//! Fetch-and-extract driver for one blog.
//!
//! [`BlogScraper`] ties the extractors to a [`Fetch`] implementation and the
//! configured base url. Every public operation is one-shot: it fetches what it
//! needs, builds fresh rows and returns them. Any failure inside a page fails
//! the whole page.

use super::article::{parse_article, parse_breadcrumb_categories};
use super::listing::{parse_first_page, parse_page};
use crate::dates::normalize_date;
use crate::error::{Result, ScrapeError};
use crate::fetch::{Fetch, HttpFetcher};
use crate::models::{ArticleRecord, ListingRow, PageRow};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::ops::RangeInclusive;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// What the batch driver does when a page fails for a reason other than
/// running past the last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageFailurePolicy {
    #[default]
    Abort,
    Skip,
}

#[derive(Debug)]
pub struct BlogScraper<F = HttpFetcher> {
    fetcher: F,
    base_url: Url,
    concurrency: usize,
    normalize_dates: bool,
}

impl<F: Fetch> BlogScraper<F> {
    /// `base_url` is the listing root; page `n` lives at `{base_url}{n}/`.
    pub fn new(fetcher: F, base_url: Url) -> Self {
        Self {
            fetcher,
            base_url,
            concurrency: 1,
            normalize_dates: false,
        }
    }

    /// Allow up to `concurrency` article fetches in flight (minimum 1).
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Rewrite article dates to `YYYY-MM-DD`.
    pub fn with_normalized_dates(mut self, normalize: bool) -> Self {
        self.normalize_dates = normalize;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Url of listing page `page`.
    pub fn page_url(&self, page: i64) -> Result<Url> {
        self.base_url
            .join(&format!("{page}/"))
            .map_err(|e| ScrapeError::Config(format!("cannot build url for page {page}: {e}")))
    }

    /// Fetch one article page and extract its record.
    #[instrument(level = "info", skip_all, fields(%url))]
    pub async fn scrape_article(&self, url: &str) -> Result<ArticleRecord> {
        let body = self.fetcher.fetch(url).await?;
        let mut record = parse_article(&body, url)?;
        if self.normalize_dates {
            record.date = normalize_date(&record.date)?;
        }
        Ok(record)
    }

    /// Rows of listing page 1: top article, picks, then the grid articles.
    ///
    /// Costs two fetches: the listing itself and the top article, whose
    /// categories only appear in its own breadcrumbs.
    #[instrument(level = "info", skip_all)]
    pub async fn first_page(&self) -> Result<Vec<ListingRow>> {
        let page_url = self.page_url(1)?;
        let body = self.fetcher.fetch(page_url.as_str()).await?;
        let listing = parse_first_page(&body, &page_url)?;

        let top_body = self.fetcher.fetch(&listing.top_url).await?;
        let top_categories = parse_breadcrumb_categories(&top_body, &listing.top_url)?;

        let rows = listing.into_rows(top_categories);
        info!(count = rows.len(), "Indexed listing page 1");
        Ok(rows)
    }

    /// Rows of listing page `page`, which must be 2 or more.
    #[instrument(level = "info", skip(self))]
    pub async fn listing_page(&self, page: i64) -> Result<Vec<ListingRow>> {
        if page < 2 {
            return Err(ScrapeError::InvalidArgument(format!(
                "page number must be an integer >= 2, got {page}"
            )));
        }
        let page_url = self.page_url(page)?;
        let body = self.fetcher.fetch(page_url.as_str()).await?;
        let rows = parse_page(&body, page, &page_url)?;
        info!(page, count = rows.len(), "Indexed listing page");
        Ok(rows)
    }

    /// Scrape every listed article and merge it with its listing row.
    ///
    /// Output order is listing order whatever the concurrency. The first
    /// failing article fails the whole call.
    #[instrument(level = "info", skip_all, fields(rows = rows.len(), concurrency = self.concurrency))]
    pub async fn build_page(&self, rows: Vec<ListingRow>) -> Result<Vec<PageRow>> {
        let merged: Vec<PageRow> = stream::iter(rows)
            .map(|row| async move {
                let article = self.scrape_article(&row.url).await?;
                debug!(title = %row.title, "Merged article");
                Ok::<_, ScrapeError>(PageRow::merge(row, article))
            })
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        info!(count = merged.len(), "Built page rows");
        Ok(merged)
    }

    /// Listing rows of `page` merged with their articles.
    pub async fn scrape_page(&self, page: i64) -> Result<Vec<PageRow>> {
        let rows = if page == 1 {
            self.first_page().await?
        } else {
            self.listing_page(page).await?
        };
        self.build_page(rows).await
    }

    /// Scrape a range of pages in order.
    ///
    /// Reaching the site's "Page not found" page past page 1 ends the range
    /// early. Other failures abort or skip the page according to `policy`.
    #[instrument(level = "info", skip(self))]
    pub async fn scrape_pages(
        &self,
        pages: RangeInclusive<i64>,
        policy: PageFailurePolicy,
    ) -> Result<Vec<PageRow>> {
        let mut all = Vec::new();
        for page in pages {
            match self.scrape_page(page).await {
                Ok(rows) => all.extend(rows),
                Err(ScrapeError::PageNotFound { page }) => {
                    info!(page, "Reached end of pagination");
                    break;
                }
                Err(e) if policy == PageFailurePolicy::Skip => {
                    warn!(page, error = %e, "Skipping failed page");
                }
                Err(e) => return Err(e),
            }
        }
        info!(count = all.len(), "Scraped page range");
        Ok(all)
    }
}
