//! Basketball stat categories the predictor understands.

use crate::error::NbaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five box-score categories used for career averages and predictions.
///
/// Variant order is display order: career averages print PTS first and STL
/// last.
///
/// # Examples
///
/// ```rust
/// use nba_stats::StatCode;
///
/// let stat: StatCode = "pts".parse().unwrap();
/// assert_eq!(stat, StatCode::PTS);
/// assert_eq!(stat.to_string(), "PTS");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum StatCode {
    PTS,
    AST,
    REB,
    BLK,
    STL,
}

impl StatCode {
    pub const ALL: [StatCode; 5] = [
        StatCode::PTS,
        StatCode::AST,
        StatCode::REB,
        StatCode::BLK,
        StatCode::STL,
    ];

    /// Column header the stats provider uses for this category.
    pub fn column(&self) -> &'static str {
        match self {
            StatCode::PTS => "PTS",
            StatCode::AST => "AST",
            StatCode::REB => "REB",
            StatCode::BLK => "BLK",
            StatCode::STL => "STL",
        }
    }
}

impl fmt::Display for StatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for StatCode {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        StatCode::ALL
            .into_iter()
            .find(|stat| stat.column() == code)
            .ok_or(NbaError::InvalidStat { stat: code })
    }
}
