use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{labels, UnknownCode};

/// Release status as understood by the upstream `MediaStatus` enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaStatus {
    Finished,
    Releasing,
    NotYetReleased,
    Cancelled,
    Hiatus,
}

impl MediaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Finished => "FINISHED",
            Self::Releasing => "RELEASING",
            Self::NotYetReleased => "NOT_YET_RELEASED",
            Self::Cancelled => "CANCELLED",
            Self::Hiatus => "HIATUS",
        }
    }

    pub fn label(&self) -> &'static str {
        labels::status_label(self.as_str())
    }

    pub fn all() -> [Self; 5] {
        [
            Self::Finished,
            Self::Releasing,
            Self::NotYetReleased,
            Self::Cancelled,
            Self::Hiatus,
        ]
    }
}

impl fmt::Display for MediaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaStatus {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "AIRING" => return Ok(Self::Releasing),
            "UPCOMING" => return Ok(Self::NotYetReleased),
            _ => {}
        }
        Self::all()
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| UnknownCode::new("status", s))
    }
}
