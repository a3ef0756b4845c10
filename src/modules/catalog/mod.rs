pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{
    labels, Character, CoverImage, FuzzyDate, LabeledOption, MediaDetail, MediaFilter,
    MediaFormat, MediaPage, MediaStatus, MediaSummary, MediaTag, MediaTitle, PageInfo, Season,
    SeasonCursor, Studio, Trailer, UnknownCode,
};
pub use infrastructure::{
    CatalogClient, GraphqlRequest, GraphqlTransport, RawResponse, ReqwestTransport, RetryPolicy,
};
