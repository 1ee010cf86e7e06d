//! Blog scraping: listing pages, article pages, and the driver joining them.
//!
//! Scraping follows the usual two phases:
//!
//! 1. **Indexing**: read a listing page into [`ListingRow`](crate::models::ListingRow)s
//! 2. **Fetching**: fetch each listed article and merge it into a
//!    [`PageRow`](crate::models::PageRow)
//!
//! | Module | Role |
//! |--------|------|
//! | [`article`] | Article page fields and breadcrumb categories |
//! | [`listing`] | Page 1 (magazine layout) and page N (grid layout) |
//! | [`blog`] | [`BlogScraper`]: fetching, aggregation, page ranges |
//!
//! Extraction functions work on already-fetched bodies, so the parsed
//! documents never outlive a single synchronous call.

pub mod article;
pub mod blog;
pub mod listing;
mod selectors;

#[cfg(test)]
pub(crate) mod fixtures;

pub use blog::{BlogScraper, PageFailurePolicy};
