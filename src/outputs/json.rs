//! JSON rendering of page rows.
//!
//! Each row becomes an object with `title`, `url`, `date`, `author`,
//! `categories`, `tags` and `text`. Categories and tags are comma-joined
//! strings so the output stays flat and tabular.

use crate::models::PageRow;

/// Serialize rows as a pretty-printed JSON array.
pub fn rows_to_json(rows: &[PageRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}
