//! Time-related types: NBA seasons and recent-game windows.

use crate::error::{NbaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for NBA season identifiers such as `2024-25`.
///
/// The stats provider names a season by its starting year plus the last two
/// digits of the following year. Parsing enforces that the suffix actually
/// follows the start year.
///
/// # Examples
///
/// ```rust
/// use nba_stats::Season;
///
/// let season: Season = "2024-25".parse().unwrap();
/// assert_eq!(season.start_year(), 2024);
/// assert!("2024-26".parse::<Season>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    /// Create a season from its starting year (`2024` for `2024-25`).
    pub fn new(start_year: u16) -> Self {
        Self(start_year)
    }

    pub fn start_year(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2024)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.0, (self.0 + 1) % 100)
    }
}

impl FromStr for Season {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || NbaError::InvalidSeason {
            season: s.to_string(),
        };

        let (start, end) = s.trim().split_once('-').ok_or_else(invalid)?;
        if start.len() != 4 || end.len() != 2 {
            return Err(invalid());
        }
        if !start.bytes().chain(end.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let start_year: u16 = start.parse().map_err(|_| invalid())?;
        let end_year: u16 = end.parse().map_err(|_| invalid())?;
        if (start_year + 1) % 100 != end_year {
            return Err(invalid());
        }

        Ok(Self(start_year))
    }
}

/// Number of most recent games to analyze. Only 5 and 10 are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameCount {
    Five,
    Ten,
}

impl GameCount {
    pub fn as_usize(&self) -> usize {
        match self {
            GameCount::Five => 5,
            GameCount::Ten => 10,
        }
    }

    /// Map a raw count onto the allowed windows.
    pub fn from_count(n: i64) -> Option<Self> {
        match n {
            5 => Some(GameCount::Five),
            10 => Some(GameCount::Ten),
            _ => None,
        }
    }
}

impl fmt::Display for GameCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_usize())
    }
}

impl FromStr for GameCount {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i64>()
            .ok()
            .and_then(GameCount::from_count)
            .ok_or_else(|| NbaError::InvalidGameCount {
                games: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_parse_and_display() {
        let season: Season = "2024-25".parse().unwrap();
        assert_eq!(season, Season::new(2024));
        assert_eq!(season.to_string(), "2024-25");

        // Century rollover
        let season: Season = "1999-00".parse().unwrap();
        assert_eq!(season.start_year(), 1999);
        assert_eq!(season.to_string(), "1999-00");
    }

    #[test]
    fn test_season_default() {
        assert_eq!(Season::default().to_string(), "2024-25");
    }

    #[test]
    fn test_season_rejects_bad_formats() {
        for bad in ["2024", "2024-2025", "24-25", "2024-26", "abcd-ef", "2024/25", ""] {
            match bad.parse::<Season>() {
                Err(NbaError::InvalidSeason { season }) => assert_eq!(season, bad),
                other => panic!("expected InvalidSeason for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_game_count_parse() {
        assert_eq!("5".parse::<GameCount>().unwrap(), GameCount::Five);
        assert_eq!(" 10 ".parse::<GameCount>().unwrap(), GameCount::Ten);
        assert!("7".parse::<GameCount>().is_err());
        assert!("ten".parse::<GameCount>().is_err());
    }

    #[test]
    fn test_game_count_values() {
        assert_eq!(GameCount::Five.as_usize(), 5);
        assert_eq!(GameCount::Ten.to_string(), "10");
        assert_eq!(GameCount::from_count(3), None);
    }
}
