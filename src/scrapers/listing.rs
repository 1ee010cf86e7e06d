//! Listing page extraction.
//!
//! The blog paginates its index as `{base}1/`, `{base}2/`, ... Page 1 uses a
//! magazine layout:
//!
//! ```text
//! h1.hero__title a        top article (categories only on its own page)
//! ul.grid[0]              2 picks: title in h3.card__title span,
//!                                  url in div.card__image a
//! ul.grid[1], ul.grid[2]  15 others: h3.card__title a
//! div.card__category      17 category regions, picks then others
//! ```
//!
//! Later pages are a uniform grid of `h3.card__title a[title][href]` cards,
//! each with a `div.card__category` region. An unknown page number still
//! answers 200, with an `h1` reading "Page not found".

use super::selectors::SELECTORS;
use crate::dom::{attr, link_texts, resolve_href, select_all, select_first, text, zip_categories};
use crate::error::{Result, ScrapeError};
use crate::models::ListingRow;
use scraper::{ElementRef, Html};
use tracing::debug;
use url::Url;

/// Featured "pick" articles right under the hero on page 1.
pub const PICK_COUNT: usize = 2;
/// Articles in the two grids after the picks on page 1.
pub const OTHER_COUNT: usize = 15;
/// Category regions on page 1; the top article has none.
pub const CATEGORY_COUNT: usize = PICK_COUNT + OTHER_COUNT;
/// Rows produced for page 1.
pub const FIRST_PAGE_ARTICLES: usize = 1 + CATEGORY_COUNT;

/// Grid regions holding the non-pick articles on page 1.
const OTHER_GRIDS: [usize; 2] = [1, 2];

const NOT_FOUND_HEADING: &str = "Page not found";

/// Page 1 minus the top article's categories, which live on its own page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstPageListing {
    pub top_title: String,
    pub top_url: String,
    /// Picks then others, `CATEGORY_COUNT` rows.
    pub rest: Vec<ListingRow>,
}

impl FirstPageListing {
    /// All rows in page order, the top article first.
    pub fn into_rows(self, top_categories: Vec<String>) -> Vec<ListingRow> {
        let mut rows = Vec::with_capacity(FIRST_PAGE_ARTICLES);
        rows.push(ListingRow {
            title: self.top_title,
            url: self.top_url,
            categories: top_categories,
        });
        rows.extend(self.rest);
        rows
    }
}

pub fn parse_first_page(html: &str, page_url: &Url) -> Result<FirstPageListing> {
    extract_first_page(&Html::parse_document(html), page_url)
}

/// Extract the first listing page.
///
/// # Errors
///
/// [`ScrapeError::StructuralMismatch`] when the page does not hold exactly
/// `PICK_COUNT` picks, `OTHER_COUNT` others and `CATEGORY_COUNT` category
/// regions; [`ScrapeError::Extraction`] when a region or link is missing.
pub fn extract_first_page(document: &Html, page_url: &Url) -> Result<FirstPageListing> {
    let url = page_url.as_str();
    let root = document.root_element();

    let hero = select_first(root, &SELECTORS.hero_title, url, "h1.hero__title")?;
    let hero_link = select_first(hero, &SELECTORS.link, url, "h1.hero__title a")?;
    let top_title = text(hero_link).trim().to_string();
    let top_url = resolve_href(page_url, attr(hero_link, "href", url, "h1.hero__title a")?, url)?;

    let card_titles = select_all(root, &SELECTORS.card_title);
    let card_images = select_all(root, &SELECTORS.card_image);
    require_at_least("pick titles (h3.card__title)", PICK_COUNT, card_titles.len())?;
    require_at_least("pick images (div.card__image)", PICK_COUNT, card_images.len())?;

    let mut teasers = Vec::with_capacity(CATEGORY_COUNT);
    for (title, image) in card_titles.iter().zip(&card_images).take(PICK_COUNT) {
        let span = select_first(*title, &SELECTORS.card_title_span, url, "pick title span")?;
        let link = select_first(*image, &SELECTORS.link, url, "pick image link")?;
        teasers.push((
            text(span).trim().to_string(),
            resolve_href(page_url, attr(link, "href", url, "pick image link")?, url)?,
        ));
    }

    let grids = select_all(root, &SELECTORS.grid);
    require_at_least("grid regions (ul.grid)", OTHER_GRIDS[1] + 1, grids.len())?;
    let mut others = Vec::with_capacity(OTHER_COUNT);
    for grid in OTHER_GRIDS.map(|i| grids[i]) {
        for title in select_all(grid, &SELECTORS.card_title) {
            others.push(card_link(title, page_url, |a| Ok(text(a).trim().to_string()))?);
        }
    }
    if others.len() != OTHER_COUNT {
        return Err(ScrapeError::mismatch(
            "page 1 grid articles",
            OTHER_COUNT,
            others.len(),
        ));
    }
    teasers.extend(others);

    let categories = category_regions(root);
    if categories.len() != CATEGORY_COUNT {
        return Err(ScrapeError::mismatch(
            "page 1 category regions",
            CATEGORY_COUNT,
            categories.len(),
        ));
    }

    let rest = zip_categories(teasers, categories, "page 1")?;
    debug!(%top_title, %top_url, rows = rest.len() + 1, "Extracted first listing page");
    Ok(FirstPageListing {
        top_title,
        top_url,
        rest,
    })
}

pub fn parse_page(html: &str, page: i64, page_url: &Url) -> Result<Vec<ListingRow>> {
    extract_page(&Html::parse_document(html), page, page_url)
}

/// Extract a listing page after the first.
///
/// # Errors
///
/// [`ScrapeError::PageNotFound`] when the page is the site's not-found page,
/// checked before anything else; [`ScrapeError::StructuralMismatch`] when the
/// category regions do not pair one-to-one with the titles.
pub fn extract_page(document: &Html, page: i64, page_url: &Url) -> Result<Vec<ListingRow>> {
    if is_page_not_found(document) {
        return Err(ScrapeError::PageNotFound { page });
    }
    let root = document.root_element();

    let teasers = select_all(root, &SELECTORS.card_title)
        .into_iter()
        .map(|title| {
            card_link(title, page_url, |a| {
                attr(a, "title", page_url.as_str(), "h3.card__title a").map(str::to_string)
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let rows = zip_categories(teasers, category_regions(root), &format!("page {page}"))?;
    debug!(page, rows = rows.len(), "Extracted listing page");
    Ok(rows)
}

/// True when the page's first `h1` text is exactly "Page not found".
pub fn is_page_not_found(document: &Html) -> bool {
    document
        .select(&SELECTORS.heading)
        .next()
        .is_some_and(|h1| text(h1) == NOT_FOUND_HEADING)
}

/// (title, absolute url) from an `h3.card__title`'s link.
fn card_link(
    title: ElementRef<'_>,
    page_url: &Url,
    title_of: impl Fn(ElementRef<'_>) -> Result<String>,
) -> Result<(String, String)> {
    let url = page_url.as_str();
    let link = select_first(title, &SELECTORS.link, url, "h3.card__title a")?;
    let href = attr(link, "href", url, "h3.card__title a")?;
    Ok((title_of(link)?, resolve_href(page_url, href, url)?))
}

fn category_regions(root: ElementRef<'_>) -> Vec<Vec<String>> {
    select_all(root, &SELECTORS.card_category)
        .into_iter()
        .map(|region| link_texts(region, &SELECTORS.link))
        .collect()
}

fn require_at_least(what: &str, expected: usize, found: usize) -> Result<()> {
    if found < expected {
        return Err(ScrapeError::mismatch(what, expected, found));
    }
    Ok(())
}
