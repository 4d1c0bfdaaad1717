//! NBA Stats CLI Library
//!
//! Looks up an NBA player on stats.nba.com, shows their profile and career
//! averages, and for active players predicts a stat over their most recent
//! games.
//!
//! ## Features
//!
//! - **Player Lookup**: exact, case-insensitive full-name match against the league directory
//! - **Career Averages**: per-game PTS/AST/REB/BLK/STL from career totals
//! - **Recent Games**: last 5 or 10 games of a season as a typed table
//! - **Predictions**: window average, or the share of games at or above a threshold
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_stats::{
//!     nba::{compute::StatFormula, http::StatsClient, player::*},
//!     GameCount, Season, StatCode,
//! };
//!
//! # async fn example() -> nba_stats::Result<()> {
//! let client = StatsClient::new(nba_stats::core::STATS_BASE_URL)?;
//! let player = lookup_player(&client, "LeBron James", Season::default()).await?;
//! let recent = recent_games(&client, &player, Season::default(), GameCount::Five).await?;
//!
//! let prediction = StatFormula::new(&recent, StatCode::PTS, Some(25.0)).compute()?;
//! println!("{:.0}%", prediction.value() * 100.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the client at a different stats host (a proxy or a local mock):
//! ```bash
//! export NBA_STATS_BASE_URL=http://localhost:8080/stats
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod nba;

// Re-export commonly used types
pub use cli::types::{GameCount, PlayerId, Season, StatCode};
pub use error::{NbaError, Result};
pub use nba::types::{CareerAverages, Player, Prediction, Profile, RecentGamesTable};

pub const BASE_URL_ENV_VAR: &str = "NBA_STATS_BASE_URL";
