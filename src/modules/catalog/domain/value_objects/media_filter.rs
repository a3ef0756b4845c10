use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{MediaFormat, MediaStatus, Season};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Listing constraints; every field is optional and `None` means unconstrained.
///
/// `per_page` is passed through as given. The upstream enforces its own ceiling
/// (50 for AniList).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaFilter {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub season: Option<Season>,
    pub season_year: Option<i32>,
    pub format: Option<MediaFormat>,
    pub status: Option<MediaStatus>,
    /// Empty means any genre
    pub genres: BTreeSet<String>,
    /// Upstream `MediaSort` value, e.g. `POPULARITY_DESC`
    pub sort: Option<String>,
}

impl MediaFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    pub fn with_season_year(mut self, year: i32) -> Self {
        self.season_year = Some(year);
        self
    }

    pub fn with_format(mut self, format: MediaFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_status(mut self, status: MediaStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genres.insert(genre.into());
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres.extend(genres.into_iter().map(Into::into));
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn effective_page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn effective_per_page(&self) -> u32 {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE)
    }

    /// Search text, or `None` when absent or blank
    pub fn search_text(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Sort value, or `None` when absent or blank
    pub fn sort_key(&self) -> Option<&str> {
        self.sort.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let filter = MediaFilter::new();
        assert_eq!(filter.effective_page(), 1);
        assert_eq!(filter.effective_per_page(), 20);
        assert!(filter.genres.is_empty());
    }

    #[test]
    fn test_builder() {
        let filter = MediaFilter::new()
            .with_season(Season::Winter)
            .with_season_year(2025)
            .with_per_page(5)
            .with_genres(["Action", "Comedy"])
            .with_genre("Action");

        assert_eq!(filter.season, Some(Season::Winter));
        assert_eq!(filter.season_year, Some(2025));
        assert_eq!(filter.effective_per_page(), 5);
        assert_eq!(filter.genres.len(), 2);
    }

    #[test]
    fn test_blank_text_is_absent() {
        let filter = MediaFilter::new().with_search("  ").with_sort("");
        assert_eq!(filter.search_text(), None);
        assert_eq!(filter.sort_key(), None);

        let filter = MediaFilter::new().with_search(" frieren ");
        assert_eq!(filter.search_text(), Some("frieren"));
    }

    #[test]
    fn test_deserializes_from_partial_json() {
        let filter: MediaFilter =
            serde_json::from_str(r#"{"seasonYear": 2024, "season": "FALL", "genres": ["Drama"]}"#)
                .unwrap();
        assert_eq!(filter.season, Some(Season::Fall));
        assert_eq!(filter.season_year, Some(2024));
        assert!(filter.genres.contains("Drama"));
        assert_eq!(filter.page, None);
    }
}
