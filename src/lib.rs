pub mod modules;
pub mod shared;

pub use modules::catalog::{
    CatalogClient, MediaDetail, MediaFilter, MediaFormat, MediaPage, MediaStatus, MediaSummary,
    PageInfo, RetryPolicy, Season, SeasonCursor,
};
pub use shared::{AppResult, CatalogConfig, CatalogError, ConfigError};
