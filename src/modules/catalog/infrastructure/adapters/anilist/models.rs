//! AniList GraphQL response models
//!
//! Decode contracts for the selection sets in `queries.rs`. Fields the upstream
//! may legitimately null are `Option`; ids and page counters are required so
//! a malformed payload fails here instead of leaking into the view layer.

use serde::Deserialize;
use serde_json::Value;

/// Top-level GraphQL envelope; `data` is decoded per operation afterwards
#[derive(Debug, Clone, Deserialize)]
pub struct AniListResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<AniListError>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AniListError {
    pub message: String,
    #[serde(default)]
    pub status: Option<i32>,
}

// Operation payloads

#[derive(Debug, Clone, Deserialize)]
pub struct PageData {
    #[serde(rename = "Page")]
    pub page: PagePayload,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagePayload {
    pub page_info: PageInfoPayload,
    #[serde(default)]
    pub media: Vec<MediaPayload>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfoPayload {
    pub total: u32,
    pub current_page: u32,
    pub last_page: u32,
    pub has_next_page: bool,
    pub per_page: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaData {
    #[serde(rename = "Media")]
    pub media: Option<MediaPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenreCollectionData {
    #[serde(rename = "GenreCollection")]
    pub genres: Vec<String>,
}

// Media

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPayload {
    pub id: i32,
    pub title: Option<TitlePayload>,
    pub cover_image: Option<CoverImagePayload>,
    pub banner_image: Option<String>,
    pub season: Option<String>,
    pub season_year: Option<i32>,
    pub description: Option<String>,
    pub episodes: Option<i32>,
    pub duration: Option<i32>,
    pub genres: Option<Vec<String>>,
    pub average_score: Option<i32>,
    pub popularity: Option<i32>,
    pub status: Option<String>,
    pub format: Option<String>,
    pub start_date: Option<FuzzyDatePayload>,
    pub end_date: Option<FuzzyDatePayload>,
    pub studios: Option<StudioConnection>,
    pub characters: Option<CharacterConnection>,
    pub trailer: Option<TrailerPayload>,
    pub tags: Option<Vec<TagPayload>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TitlePayload {
    pub english: Option<String>,
    pub romaji: Option<String>,
    pub native: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverImagePayload {
    pub extra_large: Option<String>,
    pub large: Option<String>,
    pub medium: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct FuzzyDatePayload {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day: Option<i32>,
}

// Studio structures
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudioConnection {
    #[serde(default)]
    pub nodes: Vec<Option<StudioPayload>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioPayload {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub is_animation_studio: bool,
}

// Character structures
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CharacterConnection {
    #[serde(default)]
    pub edges: Vec<Option<CharacterEdge>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CharacterEdge {
    pub role: Option<String>,
    pub node: Option<CharacterPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CharacterPayload {
    pub id: i32,
    pub name: Option<CharacterName>,
    pub image: Option<CharacterImage>,
    pub gender: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CharacterName {
    pub full: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CharacterImage {
    pub large: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrailerPayload {
    pub id: Option<String>,
    pub site: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagPayload {
    pub id: i32,
    pub name: String,
    pub rank: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_errors() {
        let json = r#"{"data": null, "errors": [{"message": "Too Many Requests.", "status": 429}]}"#;
        let response: AniListResponse = serde_json::from_str(json).unwrap();
        assert!(response.data.as_ref().map_or(true, Value::is_null));
        let errors = response.errors.unwrap();
        assert_eq!(errors[0].message, "Too Many Requests.");
        assert_eq!(errors[0].status, Some(429));
    }

    #[test]
    fn test_media_null_decodes_to_none() {
        let data: MediaData = serde_json::from_str(r#"{"Media": null}"#).unwrap();
        assert!(data.media.is_none());
    }

    #[test]
    fn test_page_requires_page_info() {
        let result = serde_json::from_str::<PageData>(r#"{"Page": {"media": []}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_media_requires_id() {
        let result = serde_json::from_str::<MediaPayload>(r#"{"title": {"romaji": "x"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_optional_fields() {
        let json = r#"{
            "id": 2,
            "title": { "romaji": "Test Anime 2", "english": null },
            "episodes": null,
            "averageScore": null
        }"#;
        let media: MediaPayload = serde_json::from_str(json).unwrap();
        assert_eq!(media.id, 2);
        assert!(media.episodes.is_none());
        assert!(media.average_score.is_none());
        assert!(media.studios.is_none());
    }
}
