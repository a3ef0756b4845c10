pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::{
    labels, LabeledOption, MediaFilter, MediaFormat, MediaStatus, Season, SeasonCursor,
    UnknownCode,
};
