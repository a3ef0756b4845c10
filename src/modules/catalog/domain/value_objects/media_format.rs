use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{labels, UnknownCode};

/// Release format as understood by the upstream `MediaFormat` enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaFormat {
    Tv,
    TvShort,
    Movie,
    Special,
    Ova,
    Ona,
    Music,
}

impl MediaFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tv => "TV",
            Self::TvShort => "TV_SHORT",
            Self::Movie => "MOVIE",
            Self::Special => "SPECIAL",
            Self::Ova => "OVA",
            Self::Ona => "ONA",
            Self::Music => "MUSIC",
        }
    }

    pub fn label(&self) -> &'static str {
        labels::format_label(self.as_str())
    }

    pub fn all() -> [Self; 7] {
        [
            Self::Tv,
            Self::TvShort,
            Self::Movie,
            Self::Special,
            Self::Ova,
            Self::Ona,
            Self::Music,
        ]
    }
}

impl fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaFormat {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', ' '], "_");
        Self::all()
            .into_iter()
            .find(|format| format.as_str() == normalized)
            .ok_or_else(|| UnknownCode::new("format", s))
    }
}
