//! Markdown table rendering of page rows.

use crate::models::PageRow;
use std::fmt::Write;

const COLUMNS: [&str; 6] = ["title", "date", "author", "categories", "tags", "text"];

/// Render rows as a GitHub-flavored Markdown table.
///
/// The url column is left out; cells are escaped so pipes and line breaks in
/// article text cannot break the table.
pub fn rows_to_markdown(rows: &[PageRow]) -> String {
    let mut md = String::new();
    writeln!(md, "| {} |", COLUMNS.join(" | ")).unwrap();
    writeln!(md, "|{}", "---|".repeat(COLUMNS.len())).unwrap();

    for row in rows {
        let cells = [
            row.title.clone(),
            row.date.clone(),
            row.author.clone(),
            row.categories_text(),
            row.tags_text(),
            row.text.clone(),
        ];
        let cells: Vec<String> = cells.iter().map(|c| escape_cell(c)).collect();
        writeln!(md, "| {} |", cells.join(" | ")).unwrap();
    }
    md
}

fn escape_cell(cell: &str) -> String {
    cell.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}
