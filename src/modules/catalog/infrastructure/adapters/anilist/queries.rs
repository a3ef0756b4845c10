//! AniList GraphQL queries
//!
//! Each template's selection set must stay in step with the decode contract in
//! `models.rs`; the variables builders here are the only place filter values
//! are translated into upstream arguments.

use serde::Serialize;
use serde_json::{json, Value};

use crate::modules::catalog::domain::{MediaFilter, MediaFormat, MediaStatus, Season};

/// Paged listing with every supported filter - backs list and upcoming views
pub const MEDIA_LIST_QUERY: &str = r#"
query ($page: Int, $perPage: Int, $search: String, $season: MediaSeason, $seasonYear: Int, $format: MediaFormat, $status: MediaStatus, $genres: [String], $sort: [MediaSort]) {
  Page(page: $page, perPage: $perPage) {
    pageInfo {
      total
      currentPage
      lastPage
      hasNextPage
      perPage
    }
    media(
      type: ANIME,
      search: $search,
      season: $season,
      seasonYear: $seasonYear,
      format: $format,
      status: $status,
      genre_in: $genres,
      sort: $sort
    ) {
      id
      title {
        english
        romaji
        native
      }
      coverImage {
        extraLarge
        large
        medium
        color
      }
      season
      seasonYear
      description
      episodes
      genres
      averageScore
      popularity
      status
      format
      startDate {
        year
        month
        day
      }
    }
  }
}
"#;

/// Media detail query - single entry with characters, studios, trailer and tags
pub const MEDIA_DETAIL_QUERY: &str = r#"
query ($id: Int) {
  Media(id: $id, type: ANIME) {
    id
    title {
      english
      romaji
      native
    }
    coverImage {
      extraLarge
      large
      medium
      color
    }
    bannerImage
    season
    seasonYear
    description
    episodes
    duration
    genres
    averageScore
    popularity
    status
    format
    startDate {
      year
      month
      day
    }
    endDate {
      year
      month
      day
    }
    studios {
      nodes {
        id
        name
        isAnimationStudio
      }
    }
    characters(sort: ROLE, page: 1, perPage: 8) {
      edges {
        role
        node {
          id
          name {
            full
          }
          image {
            large
          }
          gender
          description
        }
      }
    }
    trailer {
      id
      site
    }
    tags {
      id
      name
      rank
    }
  }
}
"#;

/// Every genre the catalog knows about
pub const GENRE_COLLECTION_QUERY: &str = r#"
query {
  GenreCollection
}
"#;

/// Variables for [`MEDIA_LIST_QUERY`]. Unset filters are left out entirely so
/// they never constrain the listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MediaListVariables<'a> {
    page: u32,
    per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    season: Option<Season>,
    #[serde(skip_serializing_if = "Option::is_none")]
    season_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<MediaFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<MediaStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    genres: Option<Vec<&'a str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<[&'a str; 1]>,
}

pub fn media_list_variables(filter: &MediaFilter) -> Value {
    let genres = (!filter.genres.is_empty())
        .then(|| filter.genres.iter().map(String::as_str).collect::<Vec<_>>());

    let variables = MediaListVariables {
        page: filter.effective_page(),
        per_page: filter.effective_per_page(),
        search: filter.search_text(),
        season: filter.season,
        season_year: filter.season_year,
        format: filter.format,
        status: filter.status,
        genres,
        sort: filter.sort_key().map(|sort| [sort]),
    };

    // Plain data with string keys; serialization cannot fail
    serde_json::to_value(variables).unwrap_or_else(|_| json!({}))
}

pub fn media_detail_variables(id: i32) -> Value {
    json!({ "id": id })
}
