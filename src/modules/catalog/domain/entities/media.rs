//! Normalized catalog entries
//!
//! These are the values handed to the view layer. They are built fresh from
//! every response and never mutated afterwards.

use serde::Serialize;

use crate::modules::catalog::domain::value_objects::labels;

const UNKNOWN_TITLE: &str = "Unknown Title";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaTitle {
    pub english: Option<String>,
    pub romaji: Option<String>,
    pub native: Option<String>,
}

impl MediaTitle {
    /// English title, falling back to romaji, then native
    pub fn preferred(&self) -> Option<&str> {
        self.english
            .as_deref()
            .or(self.romaji.as_deref())
            .or(self.native.as_deref())
    }

    /// Title for display: English, then romaji, then a placeholder
    pub fn display(&self) -> &str {
        self.english
            .as_deref()
            .or(self.romaji.as_deref())
            .unwrap_or(UNKNOWN_TITLE)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverImage {
    pub extra_large: Option<String>,
    pub large: Option<String>,
    pub medium: Option<String>,
    /// Dominant color as a hex string, e.g. `#e4a15d`
    pub color: Option<String>,
}

impl CoverImage {
    /// Largest available image URL
    pub fn best(&self) -> Option<&str> {
        self.extra_large
            .as_deref()
            .or(self.large.as_deref())
            .or(self.medium.as_deref())
    }
}

/// Partial date; any component may be unknown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FuzzyDate {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day: Option<i32>,
}

impl FuzzyDate {
    pub fn is_unknown(&self) -> bool {
        self.year.is_none()
    }

    pub fn display(&self) -> String {
        labels::format_date(self.year, self.month, self.day)
    }
}

/// Listing projection of a catalog entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSummary {
    pub id: i32,
    pub title: MediaTitle,
    pub cover_image: CoverImage,
    /// Upstream season code, e.g. `WINTER`
    pub season: Option<String>,
    pub season_year: Option<i32>,
    pub description: Option<String>,
    pub episodes: Option<i32>,
    pub genres: Vec<String>,
    /// 0-100
    pub average_score: Option<i32>,
    pub popularity: Option<i32>,
    /// Upstream status code, e.g. `RELEASING`
    pub status: Option<String>,
    /// Upstream format code, e.g. `TV_SHORT`
    pub format: Option<String>,
    pub start_date: FuzzyDate,
}

impl MediaSummary {
    pub fn format_label(&self) -> Option<&str> {
        self.format.as_deref().map(labels::format_label)
    }

    pub fn status_label(&self) -> Option<&str> {
        self.status.as_deref().map(labels::status_label)
    }

    pub fn season_label(&self) -> Option<String> {
        self.season.as_deref().map(|code| match self.season_year {
            Some(year) => format!("{} {}", labels::season_label(code), year),
            None => labels::season_label(code).to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Studio {
    pub id: i32,
    pub name: String,
    pub is_animation_studio: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: i32,
    pub name: Option<String>,
    pub image: Option<String>,
    pub gender: Option<String>,
    pub description: Option<String>,
    /// `MAIN`, `SUPPORTING` or `BACKGROUND`
    pub role: Option<String>,
}

impl Character {
    pub fn role_label(&self) -> Option<String> {
        self.role.as_deref().map(labels::role_label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trailer {
    pub id: String,
    pub site: String,
}

impl Trailer {
    /// Embeddable player URL for sites we know how to embed
    pub fn embed_url(&self) -> Option<String> {
        match self.site.to_lowercase().as_str() {
            "youtube" => Some(format!("https://www.youtube.com/embed/{}", self.id)),
            "dailymotion" => Some(format!("https://www.dailymotion.com/embed/video/{}", self.id)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaTag {
    pub id: i32,
    pub name: String,
    /// Relevance 0-100
    pub rank: Option<i32>,
}

/// Full projection of a single catalog entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDetail {
    #[serde(flatten)]
    pub summary: MediaSummary,
    pub banner_image: Option<String>,
    /// Minutes per episode
    pub duration: Option<i32>,
    pub end_date: FuzzyDate,
    pub studios: Vec<Studio>,
    /// First page of characters, main roles first
    pub characters: Vec<Character>,
    pub trailer: Option<Trailer>,
    /// Ordered by rank, highest first
    pub tags: Vec<MediaTag>,
}

impl MediaDetail {
    pub fn animation_studios(&self) -> impl Iterator<Item = &Studio> {
        self.studios.iter().filter(|s| s.is_animation_studio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(english: Option<&str>, romaji: Option<&str>, native: Option<&str>) -> MediaTitle {
        MediaTitle {
            english: english.map(String::from),
            romaji: romaji.map(String::from),
            native: native.map(String::from),
        }
    }

    #[test]
    fn test_title_preference() {
        assert_eq!(title(Some("Frieren"), Some("Sousou no Frieren"), None).display(), "Frieren");
        assert_eq!(title(None, Some("Sousou no Frieren"), None).display(), "Sousou no Frieren");
        assert_eq!(title(None, None, Some("葬送のフリーレン")).display(), "Unknown Title");
        assert_eq!(
            title(None, None, Some("葬送のフリーレン")).preferred(),
            Some("葬送のフリーレン")
        );
        assert_eq!(title(None, None, None).preferred(), None);
    }

    #[test]
    fn test_trailer_embed() {
        let trailer = Trailer {
            id: "abc123".into(),
            site: "youtube".into(),
        };
        assert_eq!(
            trailer.embed_url().as_deref(),
            Some("https://www.youtube.com/embed/abc123")
        );

        let trailer = Trailer {
            id: "x".into(),
            site: "vimeo".into(),
        };
        assert_eq!(trailer.embed_url(), None);
    }

    #[test]
    fn test_fuzzy_date_display() {
        let date = FuzzyDate {
            year: Some(2023),
            month: Some(9),
            day: Some(29),
        };
        assert_eq!(date.display(), "September 29, 2023");
        assert!(FuzzyDate::default().is_unknown());
        assert_eq!(FuzzyDate::default().display(), "Unknown");
    }
}
