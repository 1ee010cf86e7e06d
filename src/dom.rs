//! Thin query helpers over `scraper`.
//!
//! Extraction code asks for "all X under Y", "the first X or fail", "the text
//! of X" and "attribute N of X". Missing pieces become
//! [`ScrapeError::Extraction`] tagged with the page url.

use crate::error::{Result, ScrapeError};
use crate::models::ListingRow;
use scraper::{ElementRef, Selector};
use url::Url;

/// All elements under `scope` matching `selector`, in document order.
pub fn select_all<'a>(scope: ElementRef<'a>, selector: &Selector) -> Vec<ElementRef<'a>> {
    scope.select(selector).collect()
}

/// First element under `scope` matching `selector`.
pub fn select_first<'a>(
    scope: ElementRef<'a>,
    selector: &Selector,
    url: &str,
    what: &str,
) -> Result<ElementRef<'a>> {
    scope
        .select(selector)
        .next()
        .ok_or_else(|| ScrapeError::extraction(url, format!("missing {what}")))
}

/// Full text content of an element, untrimmed.
pub fn text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// Attribute value of an element.
pub fn attr<'a>(element: ElementRef<'a>, name: &str, url: &str, what: &str) -> Result<&'a str> {
    element
        .value()
        .attr(name)
        .ok_or_else(|| ScrapeError::extraction(url, format!("{what} has no `{name}` attribute")))
}

/// Trimmed texts of every link under `scope`.
pub fn link_texts(scope: ElementRef<'_>, links: &Selector) -> Vec<String> {
    scope.select(links).map(|a| text(a).trim().to_string()).collect()
}

/// Resolve an href against the page it was found on.
pub fn resolve_href(base: &Url, href: &str, url: &str) -> Result<String> {
    base.join(href.trim())
        .map(|u| u.to_string())
        .map_err(|e| ScrapeError::extraction(url, format!("bad href {href:?}: {e}")))
}

/// Pair each teaser with its category list, refusing to truncate.
pub fn zip_categories(
    teasers: Vec<(String, String)>,
    categories: Vec<Vec<String>>,
    what: &str,
) -> Result<Vec<ListingRow>> {
    if teasers.len() != categories.len() {
        return Err(ScrapeError::mismatch(
            format!("{what}: category regions vs titles"),
            teasers.len(),
            categories.len(),
        ));
    }
    Ok(teasers
        .into_iter()
        .zip(categories)
        .map(|((title, url), categories)| ListingRow {
            title,
            url,
            categories,
        })
        .collect())
}
