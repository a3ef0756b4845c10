pub mod media;
pub mod page;

pub use media::{
    Character, CoverImage, FuzzyDate, MediaDetail, MediaSummary, MediaTag, MediaTitle, Studio,
    Trailer,
};
pub use page::{MediaPage, PageInfo};
