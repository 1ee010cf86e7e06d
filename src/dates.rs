//! Conversion of the blog's "Month Dth, YYYY" dates to ISO `YYYY-MM-DD`.
//!
//! Article pages print dates like `June 17th, 2020`. The ordinal suffix is
//! accepted as-is and never checked against the day, so `February 2st, 2017`
//! normalizes just like `February 2nd, 2017`.

use crate::error::{Result, ScrapeError};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

static BLOG_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(January|February|March|April|May|June|July|August|September|October|November|December) ([1-9]|[12][0-9]|3[01])(?:st|nd|rd|th), ([0-9]{4})$",
    )
    .unwrap()
});

const FORMAT_HINT: &str = "expected a date like 'February 1st, 2017'  'May 2nd, 1997'  'June 3rd, 2008'  'March 4th, 2015'";

/// Convert a scraped date to `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns [`ScrapeError::InvalidFormat`] when `date` does not match
/// `<FullMonthName> <1-31><st|nd|rd|th>, <YYYY>` exactly, or when it matches
/// but names a day the calendar does not have.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_date("June 17th, 2020")?, "2020-06-17");
/// ```
pub fn normalize_date(date: &str) -> Result<String> {
    let invalid = || ScrapeError::InvalidFormat(format!("{date:?}: {FORMAT_HINT}"));
    let caps = BLOG_DATE.captures(date).ok_or_else(invalid)?;

    let month = MONTHS
        .iter()
        .position(|m| *m == &caps[1])
        .map(|i| i as u32 + 1)
        .ok_or_else(invalid)?;
    let day: u32 = caps[2].parse().map_err(|_| invalid())?;
    let year: i32 = caps[3].parse().map_err(|_| invalid())?;

    let parsed = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ScrapeError::InvalidFormat(format!("{date:?} is not a calendar date"))
    })?;

    let iso = parsed.format("%Y-%m-%d").to_string();
    debug!(%date, %iso, "Normalized date");
    Ok(iso)
}
