use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::UnknownCode;

/// Catalog season: releases are bucketed by calendar quarter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// Upstream enum value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Winter => "WINTER",
            Self::Spring => "SPRING",
            Self::Summer => "SUMMER",
            Self::Fall => "FALL",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Winter => "Winter",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
        }
    }

    /// Season for a month (1-12): Jan-Mar winter, Apr-Jun spring,
    /// Jul-Sep summer, Oct-Dec fall
    pub fn from_month(month: u32) -> Option<Self> {
        match month {
            1..=3 => Some(Self::Winter),
            4..=6 => Some(Self::Spring),
            7..=9 => Some(Self::Summer),
            10..=12 => Some(Self::Fall),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Winter => Self::Spring,
            Self::Spring => Self::Summer,
            Self::Summer => Self::Fall,
            Self::Fall => Self::Winter,
        }
    }

    /// Get all seasons in chronological order
    pub fn all() -> [Self; 4] {
        [Self::Winter, Self::Spring, Self::Summer, Self::Fall]
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "winter" => Ok(Self::Winter),
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "fall" | "autumn" => Ok(Self::Fall),
            _ => Err(UnknownCode::new("season", s)),
        }
    }
}

/// A season within a specific year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonCursor {
    pub season: Season,
    pub year: i32,
}

impl SeasonCursor {
    pub fn new(season: Season, year: i32) -> Self {
        Self { season, year }
    }

    /// Season the given date falls in
    pub fn containing<D: Datelike>(date: &D) -> Self {
        // Datelike::month is always 1..=12
        let season = Season::from_month(date.month()).unwrap_or(Season::Winter);
        Self::new(season, date.year())
    }

    /// Following season; only fall rolls over into the next year
    pub fn next(self) -> Self {
        match self.season {
            Season::Fall => Self::new(Season::Winter, self.year + 1),
            season => Self::new(season.next(), self.year),
        }
    }

    /// The season after the one containing `date`
    pub fn upcoming<D: Datelike>(date: &D) -> Self {
        Self::containing(date).next()
    }
}

impl fmt::Display for SeasonCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.season.display_name(), self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 15).unwrap()
    }

    #[test]
    fn test_every_month_has_a_season() {
        let expected = [
            Season::Winter,
            Season::Winter,
            Season::Winter,
            Season::Spring,
            Season::Spring,
            Season::Spring,
            Season::Summer,
            Season::Summer,
            Season::Summer,
            Season::Fall,
            Season::Fall,
            Season::Fall,
        ];
        for (i, season) in expected.iter().enumerate() {
            assert_eq!(Season::from_month(i as u32 + 1), Some(*season));
        }
        assert_eq!(Season::from_month(0), None);
        assert_eq!(Season::from_month(13), None);
    }

    #[test]
    fn test_january_upcoming_is_spring_same_year() {
        let current = SeasonCursor::containing(&date(2025, 1));
        assert_eq!(current, SeasonCursor::new(Season::Winter, 2025));
        assert_eq!(
            SeasonCursor::upcoming(&date(2025, 1)),
            SeasonCursor::new(Season::Spring, 2025)
        );
    }

    #[test]
    fn test_december_upcoming_is_winter_next_year() {
        let current = SeasonCursor::containing(&date(2025, 12));
        assert_eq!(current, SeasonCursor::new(Season::Fall, 2025));
        assert_eq!(
            SeasonCursor::upcoming(&date(2025, 12)),
            SeasonCursor::new(Season::Winter, 2026)
        );
    }

    #[test]
    fn test_only_fall_increments_year() {
        let mut cursor = SeasonCursor::new(Season::Winter, 2024);
        let mut seen = Vec::new();
        for _ in 0..4 {
            cursor = cursor.next();
            seen.push(cursor);
        }
        assert_eq!(
            seen,
            vec![
                SeasonCursor::new(Season::Spring, 2024),
                SeasonCursor::new(Season::Summer, 2024),
                SeasonCursor::new(Season::Fall, 2024),
                SeasonCursor::new(Season::Winter, 2025),
            ]
        );
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("winter".parse::<Season>().unwrap(), Season::Winter);
        assert_eq!("FALL".parse::<Season>().unwrap(), Season::Fall);
        assert_eq!("Autumn".parse::<Season>().unwrap(), Season::Fall);
        assert!("monsoon".parse::<Season>().is_err());
        assert_eq!(Season::Summer.to_string(), "SUMMER");
        assert_eq!(SeasonCursor::new(Season::Spring, 2026).to_string(), "Spring 2026");
    }

    #[test]
    fn test_serde_uses_upstream_values() {
        assert_eq!(serde_json::to_value(Season::Winter).unwrap(), "WINTER");
        let season: Season = serde_json::from_str("\"SUMMER\"").unwrap();
        assert_eq!(season, Season::Summer);
    }
}
