use super::models::*;
use crate::modules::catalog::domain::entities::{
    Character, CoverImage, FuzzyDate, MediaDetail, MediaPage, MediaSummary, MediaTag, MediaTitle,
    PageInfo, Studio, Trailer,
};

/// Converts AniList payloads into the catalog's view types
#[derive(Debug, Clone, Default)]
pub struct AniListMapper;

impl AniListMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn to_page(&self, payload: PagePayload) -> MediaPage {
        MediaPage {
            items: payload
                .media
                .into_iter()
                .map(|media| self.to_summary(media))
                .collect(),
            page_info: Self::map_page_info(payload.page_info),
        }
    }

    pub fn to_summary(&self, media: MediaPayload) -> MediaSummary {
        MediaSummary {
            id: media.id,
            title: Self::map_title(media.title),
            cover_image: Self::map_cover(media.cover_image),
            season: media.season,
            season_year: media.season_year,
            description: media.description,
            episodes: media.episodes,
            genres: media.genres.unwrap_or_default(),
            average_score: media.average_score,
            popularity: media.popularity,
            status: media.status,
            format: media.format,
            start_date: Self::map_date(media.start_date),
        }
    }

    pub fn to_detail(&self, mut media: MediaPayload) -> MediaDetail {
        let banner_image = media.banner_image.take();
        let duration = media.duration.take();
        let end_date = Self::map_date(media.end_date.take());
        let studios = media
            .studios
            .take()
            .map(|conn| conn.nodes.into_iter().flatten().map(Self::map_studio).collect())
            .unwrap_or_default();
        let characters = media
            .characters
            .take()
            .map(|conn| {
                conn.edges
                    .into_iter()
                    .flatten()
                    .filter_map(Self::map_character)
                    .collect()
            })
            .unwrap_or_default();
        let trailer = media.trailer.take().and_then(Self::map_trailer);
        let tags = Self::map_tags(media.tags.take().unwrap_or_default());

        MediaDetail {
            summary: self.to_summary(media),
            banner_image,
            duration,
            end_date,
            studios,
            characters,
            trailer,
            tags,
        }
    }

    fn map_page_info(info: PageInfoPayload) -> PageInfo {
        PageInfo {
            total: info.total,
            current_page: info.current_page,
            last_page: info.last_page,
            has_next_page: info.has_next_page,
            per_page: info.per_page,
        }
    }

    fn map_title(title: Option<TitlePayload>) -> MediaTitle {
        let title = title.unwrap_or_default();
        MediaTitle {
            english: non_blank(title.english),
            romaji: non_blank(title.romaji),
            native: non_blank(title.native),
        }
    }

    fn map_cover(cover: Option<CoverImagePayload>) -> CoverImage {
        let cover = cover.unwrap_or_default();
        CoverImage {
            extra_large: cover.extra_large,
            large: cover.large,
            medium: cover.medium,
            color: cover.color,
        }
    }

    fn map_date(date: Option<FuzzyDatePayload>) -> FuzzyDate {
        let date = date.unwrap_or_default();
        FuzzyDate {
            year: date.year,
            month: date.month,
            day: date.day,
        }
    }

    fn map_studio(studio: StudioPayload) -> Studio {
        Studio {
            id: studio.id,
            name: studio.name,
            is_animation_studio: studio.is_animation_studio,
        }
    }

    /// Edges without a node carry nothing to show
    fn map_character(edge: CharacterEdge) -> Option<Character> {
        let node = edge.node?;
        Some(Character {
            id: node.id,
            name: node.name.and_then(|n| non_blank(n.full)),
            image: node.image.and_then(|i| i.large),
            gender: node.gender,
            description: node.description,
            role: edge.role,
        })
    }

    /// A trailer is only usable with both an id and a site
    fn map_trailer(trailer: TrailerPayload) -> Option<Trailer> {
        Some(Trailer {
            id: non_blank(trailer.id)?,
            site: non_blank(trailer.site)?,
        })
    }

    fn map_tags(tags: Vec<TagPayload>) -> Vec<MediaTag> {
        let mut tags: Vec<MediaTag> = tags
            .into_iter()
            .map(|tag| MediaTag {
                id: tag.id,
                name: tag.name,
                rank: tag.rank,
            })
            .collect();
        // stable: equal ranks keep upstream order
        tags.sort_by(|a, b| b.rank.cmp(&a.rank));
        tags
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail_payload() -> MediaPayload {
        serde_json::from_value(json!({
            "id": 154587,
            "title": { "english": "Frieren: Beyond Journey's End", "romaji": "Sousou no Frieren", "native": "葬送のフリーレン" },
            "coverImage": { "extraLarge": "https://img/xl.jpg", "large": "https://img/l.jpg", "medium": null, "color": "#e4a15d" },
            "bannerImage": "https://img/banner.jpg",
            "season": "FALL",
            "seasonYear": 2023,
            "description": "The adventure is over but life goes on.",
            "episodes": 28,
            "duration": 24,
            "genres": ["Adventure", "Drama", "Fantasy"],
            "averageScore": 90,
            "popularity": 400000,
            "status": "FINISHED",
            "format": "TV",
            "startDate": { "year": 2023, "month": 9, "day": 29 },
            "endDate": { "year": 2024, "month": 3, "day": 22 },
            "studios": { "nodes": [
                { "id": 11, "name": "MADHOUSE", "isAnimationStudio": true },
                null,
                { "id": 143, "name": "Aniplex", "isAnimationStudio": false }
            ]},
            "characters": { "edges": [
                { "role": "MAIN", "node": { "id": 176754, "name": { "full": "Frieren" }, "image": { "large": "https://img/c.jpg" }, "gender": "Female", "description": null } },
                { "role": "SUPPORTING", "node": null },
                null
            ]},
            "trailer": { "id": "qgQFtz4uAbA", "site": "youtube" },
            "tags": [
                { "id": 1, "name": "Travel", "rank": 80 },
                { "id": 2, "name": "Elf", "rank": 95 },
                { "id": 3, "name": "Magic", "rank": null }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_detail_mapping() {
        let detail = AniListMapper::new().to_detail(detail_payload());

        assert_eq!(detail.summary.id, 154587);
        assert_eq!(detail.summary.title.display(), "Frieren: Beyond Journey's End");
        assert_eq!(detail.summary.cover_image.best(), Some("https://img/xl.jpg"));
        assert_eq!(detail.summary.start_date.display(), "September 29, 2023");
        assert_eq!(detail.end_date.year, Some(2024));
        assert_eq!(detail.duration, Some(24));

        assert_eq!(detail.studios.len(), 2);
        let animation: Vec<&str> = detail.animation_studios().map(|s| s.name.as_str()).collect();
        assert_eq!(animation, vec!["MADHOUSE"]);

        assert_eq!(detail.characters.len(), 1);
        assert_eq!(detail.characters[0].name.as_deref(), Some("Frieren"));
        assert_eq!(detail.characters[0].role_label().as_deref(), Some("Main"));

        assert_eq!(
            detail.trailer.as_ref().and_then(|t| t.embed_url()).as_deref(),
            Some("https://www.youtube.com/embed/qgQFtz4uAbA")
        );

        let tag_names: Vec<&str> = detail.tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(tag_names, vec!["Elf", "Travel", "Magic"]);
    }

    #[test]
    fn test_sparse_media_maps_to_empty_collections() {
        let payload: MediaPayload = serde_json::from_value(json!({ "id": 1 })).unwrap();
        let detail = AniListMapper::new().to_detail(payload);
        assert!(detail.studios.is_empty());
        assert!(detail.characters.is_empty());
        assert!(detail.tags.is_empty());
        assert!(detail.trailer.is_none());
        assert!(detail.summary.genres.is_empty());
        assert_eq!(detail.summary.title.display(), "Unknown Title");
    }

    #[test]
    fn test_incomplete_trailer_dropped() {
        let payload: MediaPayload =
            serde_json::from_value(json!({ "id": 1, "trailer": { "id": "abc", "site": null } }))
                .unwrap();
        assert!(AniListMapper::new().to_detail(payload).trailer.is_none());
    }
}
