//! Console text for each block the predictor prints.

use crate::{
    core::display_float,
    nba::types::{CareerAverages, Player, Prediction, RecentGamesTable},
    GameCount, StatCode,
};

pub fn career_header(player: &Player) -> String {
    format!("\nCareer averages for {}:", player.name)
}

/// One `  PTS: 27.1` line per stat, or the no-data notice.
pub fn career_lines(averages: &CareerAverages) -> Vec<String> {
    if averages.is_empty() {
        return vec!["  No career data available.".to_string()];
    }
    averages
        .iter()
        .map(|(stat, avg)| format!("  {stat}: {}", display_float(avg)))
        .collect()
}

pub fn recent_games_header(count: GameCount) -> String {
    format!("\nRecent games played (last {count} games):")
}

/// Fixed-width table of the recent games; missing values show as `NaN`.
pub fn recent_games_table(table: &RecentGamesTable) -> String {
    let mut out = format!("{:<14}", "GAME_DATE");
    for stat in StatCode::ALL {
        out.push_str(&format!("{:>6}", stat.column()));
    }

    for game in table.games() {
        out.push('\n');
        out.push_str(&format!("{:<14}", game.game_date));
        for stat in StatCode::ALL {
            let cell = game
                .stat(stat)
                .map(display_float)
                .unwrap_or_else(|| "NaN".to_string());
            out.push_str(&format!("{cell:>6}"));
        }
    }
    out
}

pub fn prediction_line(
    player: &Player,
    stat: StatCode,
    count: GameCount,
    prediction: &Prediction,
) -> String {
    match prediction {
        Prediction::Probability { threshold, value } => format!(
            "\nPrediction: {} has a {:.1}% chance of \u{2265} {} {}.",
            player.name,
            value * 100.0,
            display_float(*threshold),
            stat
        ),
        Prediction::Average { value } => {
            format!("\nAverage {stat} over last {count} games: {value:.2}")
        }
    }
}

pub fn retired_notice(player: &Player) -> String {
    format!(
        "\nNote: {} is retired. Prediction only works for active players.",
        player.name
    )
}
