pub mod labels;
pub mod media_filter;
pub mod media_format;
pub mod media_status;
pub mod season;

pub use labels::LabeledOption;
pub use media_filter::{MediaFilter, DEFAULT_PAGE, DEFAULT_PER_PAGE};
pub use media_format::MediaFormat;
pub use media_status::MediaStatus;
pub use season::{Season, SeasonCursor};

use thiserror::Error;

/// A code that does not name any known enum value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{value}'")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownCode {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
