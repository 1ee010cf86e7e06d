//! Data models for scraped blog articles.
//!
//! - [`ListingRow`]: one article teaser as found on a listing page
//! - [`ArticleRecord`]: the fields scraped from the article's own page
//! - [`PageRow`]: both merged, one per article, in listing order
//!
//! Tags and categories are kept as ordered lists and rendered comma-joined
//! when serialized.

use itertools::Itertools;
use serde::{Serialize, Serializer};

/// Separator used when rendering tags and categories as text.
pub const LIST_SEPARATOR: &str = ", ";

/// An article teaser from a listing page.
///
/// Title, url and categories are collected together per article so the three
/// can never drift out of alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub title: String,
    /// Absolute url of the article page.
    pub url: String,
    pub categories: Vec<String>,
}

/// Fields scraped from a single article page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    /// As printed on the page (`June 17th, 2020`) or normalized (`2020-06-17`).
    pub date: String,
    pub author: String,
    pub tags: Vec<String>,
    /// Lead and body headings/paragraphs in document order, space-joined.
    pub text: String,
}

/// A listing row merged with its article record.
///
/// Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRow {
    pub title: String,
    pub url: String,
    pub date: String,
    pub author: String,
    #[serde(serialize_with = "serialize_joined")]
    pub categories: Vec<String>,
    #[serde(serialize_with = "serialize_joined")]
    pub tags: Vec<String>,
    pub text: String,
}

impl PageRow {
    pub fn merge(listing: ListingRow, article: ArticleRecord) -> Self {
        Self {
            title: listing.title,
            url: listing.url,
            date: article.date,
            author: article.author,
            categories: listing.categories,
            tags: article.tags,
            text: article.text,
        }
    }

    pub fn categories_text(&self) -> String {
        join_list(&self.categories)
    }

    pub fn tags_text(&self) -> String {
        join_list(&self.tags)
    }
}

/// Join a list the way the output columns render it.
pub fn join_list(items: &[String]) -> String {
    items.iter().join(LIST_SEPARATOR)
}

fn serialize_joined<S>(items: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&join_list(items))
}
