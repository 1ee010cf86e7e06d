//! Article page extraction.
//!
//! An article page carries a hero metadata line (`June 17th, 2020 | Jane Roe`),
//! a tag list, a content region with the lead and body, and a breadcrumb trail
//! whose links name the article's categories.

use super::selectors::SELECTORS;
use crate::dom::{link_texts, select_all, select_first, text};
use crate::error::{Result, ScrapeError};
use crate::models::ArticleRecord;
use crate::utils::truncate_for_log;
use scraper::Html;
use tracing::debug;

/// Breadcrumb entry that links back to the home page rather than a category.
const HOME_CRUMB: &str = "Home";

/// Parse an article body and extract its record.
pub fn parse_article(html: &str, url: &str) -> Result<ArticleRecord> {
    extract_article(&Html::parse_document(html), url)
}

/// Extract date, author, tags and text from a parsed article page.
///
/// # Errors
///
/// [`ScrapeError::Extraction`] when the metadata line, its `|` delimiter, a
/// tag link or the content region is missing. An article without tags is
/// fine and yields an empty list.
pub fn extract_article(document: &Html, url: &str) -> Result<ArticleRecord> {
    let root = document.root_element();

    let meta = select_first(root, &SELECTORS.hero_meta, url, "div.hero__meta")?;
    let meta = select_first(meta, &SELECTORS.hero_meta_span, url, "div.hero__meta span")?;
    let meta = text(meta);
    let mut parts = meta.split('|');
    let date = parts.next().unwrap_or_default().trim().to_string();
    let author = parts
        .next()
        .ok_or_else(|| {
            ScrapeError::extraction(url, format!("metadata {:?} has no `|` delimiter", meta.trim()))
        })?
        .trim()
        .to_string();

    let tags = select_all(root, &SELECTORS.tag_item)
        .into_iter()
        .map(|item| {
            select_first(item, &SELECTORS.link, url, "li.tags__tag a").map(|a| text(a).trim().to_string())
        })
        .collect::<Result<Vec<_>>>()?;

    let content = select_first(root, &SELECTORS.content, url, "div.entry-content__content")?;
    let text = select_all(content, &SELECTORS.content_blocks)
        .into_iter()
        .map(text)
        .collect::<Vec<_>>()
        .join(" ");

    debug!(
        %url,
        %date,
        %author,
        tags = tags.len(),
        text = %truncate_for_log(&text, 120),
        "Extracted article"
    );
    Ok(ArticleRecord {
        date,
        author,
        tags,
        text,
    })
}

/// Parse an article body and extract its breadcrumb categories.
pub fn parse_breadcrumb_categories(html: &str, url: &str) -> Result<Vec<String>> {
    extract_breadcrumb_categories(&Html::parse_document(html), url)
}

/// Category names from the breadcrumb trail, without the "Home" entry.
pub fn extract_breadcrumb_categories(document: &Html, url: &str) -> Result<Vec<String>> {
    let nav = select_first(document.root_element(), &SELECTORS.breadcrumbs, url, "nav.breadcrumbs")?;
    Ok(link_texts(nav, &SELECTORS.link)
        .into_iter()
        .filter(|crumb| crumb != HOME_CRUMB)
        .collect())
}
