//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;
use types::{GameCount, Season, StatCode};

/// Every flag is optional; missing values are asked for interactively.
#[derive(Debug, Clone, Parser)]
#[clap(name = "nba-stats", about = "NBA stat viewer and predictor")]
pub struct NbaStats {
    /// Player full name, e.g. "LeBron James" (prompted for when omitted).
    #[clap(long)]
    pub player: Option<String>,

    /// Stat to analyze: PTS, AST, REB, BLK or STL.
    #[clap(long)]
    pub stat: Option<StatCode>,

    /// Threshold for the stat; enables probability mode instead of averages.
    #[clap(long, allow_negative_numbers = true)]
    pub threshold: Option<f64>,

    /// Number of recent games to analyze (5 or 10).
    #[clap(long)]
    pub games: Option<GameCount>,

    /// Season in YYYY-YY form.
    #[clap(long, default_value_t = Season::default())]
    pub season: Season,

    /// Also print the recent-games table as JSON.
    #[clap(long)]
    pub show_data: bool,
}
