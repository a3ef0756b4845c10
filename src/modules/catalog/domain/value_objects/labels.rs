//! Display labels for upstream enum codes
//!
//! Fixed tables; any code without an entry is returned unchanged so new
//! upstream values still render.

use chrono::NaiveDate;

/// A selectable filter value with its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn option(value: &'static str, label: &'static str) -> LabeledOption {
    LabeledOption { value, label }
}

pub const SEASONS: [LabeledOption; 4] = [
    option("WINTER", "Winter"),
    option("SPRING", "Spring"),
    option("SUMMER", "Summer"),
    option("FALL", "Fall"),
];

pub const FORMATS: [LabeledOption; 7] = [
    option("TV", "TV"),
    option("TV_SHORT", "TV Short"),
    option("MOVIE", "Movie"),
    option("SPECIAL", "Special"),
    option("OVA", "OVA"),
    option("ONA", "ONA"),
    option("MUSIC", "Music"),
];

pub const STATUSES: [LabeledOption; 4] = [
    option("RELEASING", "Airing"),
    option("FINISHED", "Finished"),
    option("NOT_YET_RELEASED", "Coming Soon"),
    option("CANCELLED", "Cancelled"),
];

pub const SORT_OPTIONS: [LabeledOption; 4] = [
    option("POPULARITY_DESC", "Popular"),
    option("SCORE_DESC", "Highest Rated"),
    option("TRENDING_DESC", "Trending"),
    option("START_DATE_DESC", "Newest"),
];

/// Oldest year offered by year pickers
pub const FIRST_CATALOG_YEAR: i32 = 1940;

fn lookup<'a>(table: &[LabeledOption], code: &'a str) -> &'a str {
    table
        .iter()
        .find(|entry| entry.value == code)
        .map(|entry| entry.label)
        .unwrap_or(code)
}

pub fn season_label(code: &str) -> &str {
    lookup(&SEASONS, code)
}

pub fn format_label(code: &str) -> &str {
    lookup(&FORMATS, code)
}

pub fn status_label(code: &str) -> &str {
    lookup(&STATUSES, code)
}

pub fn sort_label(code: &str) -> &str {
    lookup(&SORT_OPTIONS, code)
}

/// "MAIN" -> "Main", "SUPPORTING" -> "Supporting"
pub fn role_label(role: &str) -> String {
    let mut chars = role.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Years for a year picker, newest first, down to [`FIRST_CATALOG_YEAR`]
pub fn year_options(current_year: i32) -> Vec<i32> {
    (FIRST_CATALOG_YEAR..=current_year).rev().collect()
}

/// Human readable date from a partial (fuzzy) date.
///
/// Missing month or day default to 1; without a year the date is "Unknown".
/// Impossible dates fall back to `year-month-day` with the known parts.
pub fn format_date(year: Option<i32>, month: Option<i32>, day: Option<i32>) -> String {
    let Some(year) = year.filter(|y| *y != 0) else {
        return "Unknown".to_string();
    };
    let month = month.filter(|m| *m != 0);
    let day = day.filter(|d| *d != 0);

    let parsed = u32::try_from(month.unwrap_or(1))
        .ok()
        .zip(u32::try_from(day.unwrap_or(1)).ok())
        .and_then(|(m, d)| NaiveDate::from_ymd_opt(year, m, d));

    match parsed {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => {
            let mut out = year.to_string();
            if let Some(m) = month {
                out.push_str(&format!("-{}", m));
            }
            if let Some(d) = day {
                out.push_str(&format!("-{}", d));
            }
            out
        }
    }
}
