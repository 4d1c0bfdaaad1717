//! Player lookup and the data shown or analyzed for one player.
//!
//! Each public `async fn` is one provider round trip plus a pure conversion
//! (`match_player_id`, `profile_from_info`, ...) so the conversions can be
//! tested against literal result sets.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, info};

use crate::{
    core::{round_to, title_case},
    nba::{
        http::StatsClient,
        types::{
            parse_game_date, CareerAverages, GameRecord, Player, Profile,
            RecentGamesTable, ResultSet, Row, NOT_AVAILABLE,
        },
    },
    GameCount, NbaError, PlayerId, Result, Season, StatCode,
};

const LOOKUP_OP: &str = "looking up player ID";
const ACTIVE_OP: &str = "checking active status";
const PROFILE_OP: &str = "retrieving player profile";
const CAREER_OP: &str = "retrieving career averages";
const RECENT_OP: &str = "retrieving recent games";

const GAME_LOG_COLUMNS: [&str; 6] = ["GAME_DATE", "PTS", "AST", "REB", "BLK", "STL"];

/// Resolve a typed name to a player and their roster status.
pub async fn lookup_player(client: &StatsClient, name: &str, season: Season) -> Result<Player> {
    let name = title_case(name);
    let id = find_player_id(client, &name, season).await?;
    let is_active = check_if_active(client, id).await?;

    info!(player = %name, %id, is_active, "resolved player");
    Ok(Player {
        name,
        id,
        is_active,
    })
}

/// Exact, case-insensitive full-name match against the player directory.
pub async fn find_player_id(client: &StatsClient, name: &str, season: Season) -> Result<PlayerId> {
    let directory = client
        .get_all_players(season)
        .await
        .map_err(|e| e.during(LOOKUP_OP))?
        .into_result_set("CommonAllPlayers", 0)
        .ok_or_else(|| NbaError::malformed(LOOKUP_OP, "response has no player directory"))?;

    match_player_id(&directory, name)
}

/// First directory row whose `DISPLAY_FIRST_LAST` equals `name`, ignoring
/// case and extra whitespace.
pub fn match_player_id(directory: &ResultSet, name: &str) -> Result<PlayerId> {
    if !directory.has_columns(&["PERSON_ID", "DISPLAY_FIRST_LAST"]) {
        return Err(NbaError::malformed(
            LOOKUP_OP,
            "player directory is missing PERSON_ID or DISPLAY_FIRST_LAST",
        ));
    }

    let wanted = normalize_name(name);
    let not_found = || NbaError::PlayerNotFound {
        name: name.to_string(),
    };
    if wanted.is_empty() {
        return Err(not_found());
    }

    let row = directory
        .rows()
        .find(|row| {
            row.text("DISPLAY_FIRST_LAST")
                .is_some_and(|full_name| normalize_name(&full_name) == wanted)
        })
        .ok_or_else(not_found)?;

    row.get("PERSON_ID")
        .and_then(value_as_player_id)
        .ok_or_else(|| NbaError::malformed(LOOKUP_OP, "matched player has no usable PERSON_ID"))
}

/// Whether the player is on a roster right now.
pub async fn check_if_active(client: &StatsClient, id: PlayerId) -> Result<bool> {
    let info = fetch_player_info(client, id, ACTIVE_OP).await?;
    let row = info
        .first_row()
        .ok_or_else(|| NbaError::malformed(ACTIVE_OP, "player info has no rows"))?;

    Ok(row.get("ROSTERSTATUS").is_some_and(roster_status_is_active))
}

/// `ROSTERSTATUS` comes back as `"Active"`/`"Inactive"`, occasionally as 1/0.
pub fn roster_status_is_active(status: &Value) -> bool {
    match status {
        Value::String(s) => s.trim().eq_ignore_ascii_case("active") || s.trim() == "1",
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::Bool(b) => *b,
        _ => false,
    }
}

pub async fn fetch_profile(client: &StatsClient, player: &Player) -> Result<Profile> {
    let info = fetch_player_info(client, player.id, PROFILE_OP).await?;
    profile_from_info(&info, &player.name)
}

/// Build a profile from the `CommonPlayerInfo` set; absent fields become `N/A`.
pub fn profile_from_info(info: &ResultSet, name: &str) -> Result<Profile> {
    let row = info
        .first_row()
        .ok_or_else(|| NbaError::malformed(PROFILE_OP, "player info has no rows"))?;
    let field = |header: &str| row.text(header).unwrap_or_else(|| NOT_AVAILABLE.to_string());

    Ok(Profile {
        name: name.to_string(),
        team: field("TEAM_NAME"),
        position: field("POSITION"),
        height: field("HEIGHT"),
        weight: field("WEIGHT"),
        from_year: field("FROM_YEAR"),
        to_year: field("TO_YEAR"),
    })
}

pub async fn career_averages(client: &StatsClient, id: PlayerId) -> Result<CareerAverages> {
    let totals = client
        .get_career_stats(id)
        .await
        .map_err(|e| e.during(CAREER_OP))?
        .into_result_set("CareerTotalsRegularSeason", 1)
        .ok_or_else(|| NbaError::malformed(CAREER_OP, "response has no career totals table"))?;

    averages_from_totals(&totals)
}

/// Per-game averages from the career-totals row.
///
/// No row, or zero games played, yields an empty map. A stat whose total is
/// missing is left out rather than reported as zero.
pub fn averages_from_totals(totals: &ResultSet) -> Result<CareerAverages> {
    let Some(row) = totals.first_row() else {
        return Ok(CareerAverages::default());
    };
    if !totals.has_columns(&["GP"]) {
        return Err(NbaError::malformed(CAREER_OP, "career totals are missing GP"));
    }

    let games_played = row.number("GP").unwrap_or(0.0);
    if games_played <= 0.0 {
        debug!("career totals report no games played");
        return Ok(CareerAverages::default());
    }

    let averages: BTreeMap<StatCode, f64> = StatCode::ALL
        .into_iter()
        .filter_map(|stat| {
            row.number(stat.column())
                .map(|total| (stat, round_to(total / games_played, 1)))
        })
        .collect();

    Ok(CareerAverages(averages))
}

/// The last `count` regular-season games of `season`, most recent first.
pub async fn recent_games(
    client: &StatsClient,
    player: &Player,
    season: Season,
    count: GameCount,
) -> Result<RecentGamesTable> {
    if !player.is_active {
        return Err(NbaError::InactivePlayer {
            name: player.name.clone(),
        });
    }

    let log = client
        .get_game_log(player.id, season)
        .await
        .map_err(|e| e.during(RECENT_OP))?
        .into_result_set("PlayerGameLog", 0)
        .ok_or_else(|| NbaError::malformed(RECENT_OP, "response has no game log"))?;

    if log.is_empty() {
        return Err(NbaError::DataUnavailable {
            message: format!(
                "No game log data available for {} in season {}.",
                player.name, season
            ),
        });
    }

    let table = table_from_game_log(&log, count)?;
    debug!(available = log.len(), kept = table.len(), "built recent games table");
    Ok(table)
}

/// Convert game-log rows into a typed, date-sorted, truncated table.
pub fn table_from_game_log(log: &ResultSet, count: GameCount) -> Result<RecentGamesTable> {
    if !log.has_columns(&GAME_LOG_COLUMNS) {
        return Err(NbaError::malformed(
            RECENT_OP,
            format!("game log is missing one of {}", GAME_LOG_COLUMNS.join(", ")),
        ));
    }

    let games = log.rows().map(game_record).collect();
    Ok(RecentGamesTable::from_games(games, count.as_usize()))
}

fn game_record(row: Row<'_>) -> GameRecord {
    let game_date = row.text("GAME_DATE").unwrap_or_default();
    GameRecord {
        date: parse_game_date(&game_date),
        game_date,
        pts: row.number("PTS"),
        ast: row.number("AST"),
        reb: row.number("REB"),
        blk: row.number("BLK"),
        stl: row.number("STL"),
    }
}

async fn fetch_player_info(
    client: &StatsClient,
    id: PlayerId,
    operation: &'static str,
) -> Result<ResultSet> {
    client
        .get_player_info(id)
        .await
        .map_err(|e| e.during(operation))?
        .into_result_set("CommonPlayerInfo", 0)
        .ok_or_else(|| NbaError::malformed(operation, "response has no player info"))
}

fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn value_as_player_id(value: &Value) -> Option<PlayerId> {
    match value {
        Value::Number(n) => n.as_u64().map(PlayerId::new),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn set(value: Value) -> ResultSet {
        serde_json::from_value(value).unwrap()
    }

    fn directory() -> ResultSet {
        set(json!({
            "name": "CommonAllPlayers",
            "headers": ["PERSON_ID", "DISPLAY_LAST_COMMA_FIRST", "DISPLAY_FIRST_LAST", "ROSTERSTATUS"],
            "rowSet": [
                [893, "Jordan, Michael", "Michael Jordan", 0],
                [2544, "James, LeBron", "LeBron James", 1],
                [1628983, "Gilgeous-Alexander, Shai", "Shai Gilgeous-Alexander", 1],
                ["201939", "Curry, Stephen", "Stephen Curry", 1]
            ]
        }))
    }

    #[test]
    fn test_match_player_id_is_case_insensitive() {
        let dir = directory();
        assert_eq!(match_player_id(&dir, "LeBron James").unwrap(), PlayerId::new(2544));
        assert_eq!(match_player_id(&dir, "Lebron James").unwrap(), PlayerId::new(2544));
        assert_eq!(match_player_id(&dir, "  lebron   JAMES ").unwrap(), PlayerId::new(2544));
        assert_eq!(
            match_player_id(&dir, "shai gilgeous-alexander").unwrap(),
            PlayerId::new(1628983)
        );
    }

    #[test]
    fn test_match_player_id_accepts_string_ids() {
        assert_eq!(
            match_player_id(&directory(), "Stephen Curry").unwrap(),
            PlayerId::new(201939)
        );
    }

    #[test]
    fn test_match_player_id_exact_only() {
        for name in ["LeBron", "James", "Lebron Jame", ""] {
            match match_player_id(&directory(), name) {
                Err(NbaError::PlayerNotFound { name: n }) => assert_eq!(n, name),
                other => panic!("expected PlayerNotFound for {name:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_match_player_id_first_match_wins() {
        let dir = set(json!({
            "headers": ["PERSON_ID", "DISPLAY_FIRST_LAST"],
            "rowSet": [[1, "Tony Mitchell"], [2, "Tony Mitchell"]]
        }));
        assert_eq!(match_player_id(&dir, "tony mitchell").unwrap(), PlayerId::new(1));
    }

    #[test]
    fn test_match_player_id_requires_columns() {
        let dir = set(json!({ "headers": ["PLAYER_NAME"], "rowSet": [["LeBron James"]] }));
        let err = match_player_id(&dir, "LeBron James").unwrap_err();
        assert!(matches!(err, NbaError::Retrieval { operation: LOOKUP_OP, .. }));
    }

    #[test]
    fn test_roster_status_values() {
        assert!(roster_status_is_active(&json!("Active")));
        assert!(roster_status_is_active(&json!("active")));
        assert!(roster_status_is_active(&json!(1)));
        assert!(roster_status_is_active(&json!(true)));
        assert!(!roster_status_is_active(&json!("Inactive")));
        assert!(!roster_status_is_active(&json!(0)));
        assert!(!roster_status_is_active(&json!(null)));
    }

    #[test]
    fn test_profile_defaults_missing_fields() {
        let info = set(json!({
            "name": "CommonPlayerInfo",
            "headers": ["PERSON_ID", "TEAM_NAME", "POSITION", "HEIGHT", "WEIGHT", "FROM_YEAR"],
            "rowSet": [[893, "", "Guard", "6-6", null, 1984]]
        }));

        let profile = profile_from_info(&info, "Michael Jordan").unwrap();
        assert_eq!(profile.name, "Michael Jordan");
        assert_eq!(profile.team, NOT_AVAILABLE);
        assert_eq!(profile.position, "Guard");
        assert_eq!(profile.height, "6-6");
        assert_eq!(profile.weight, NOT_AVAILABLE);
        assert_eq!(profile.from_year, "1984");
        assert_eq!(profile.to_year, NOT_AVAILABLE);
    }

    #[test]
    fn test_profile_without_rows_is_retrieval_error() {
        let info = set(json!({ "headers": ["TEAM_NAME"], "rowSet": [] }));
        let err = profile_from_info(&info, "X").unwrap_err();
        assert!(err.to_string().starts_with("Error retrieving player profile"));
    }

    fn totals(gp: Value) -> ResultSet {
        set(json!({
            "name": "CareerTotalsRegularSeason",
            "headers": ["PLAYER_ID", "LEAGUE_ID", "Team_ID", "GP", "GS", "REB", "AST", "STL", "BLK", "PTS"],
            "rowSet": [[2544, "00", 0, gp, 1490, 11126, 11584, 2275, 1111, 41981]]
        }))
    }

    #[test]
    fn test_averages_from_totals() {
        let averages = averages_from_totals(&totals(json!(1562))).unwrap();

        assert_eq!(averages.get(StatCode::PTS), Some(round_to(41981.0 / 1562.0, 1)));
        assert_eq!(averages.get(StatCode::PTS), Some(26.9));
        assert_eq!(averages.get(StatCode::AST), Some(7.4));
        assert_eq!(averages.get(StatCode::REB), Some(7.1));
        assert_eq!(averages.get(StatCode::BLK), Some(0.7));
        assert_eq!(averages.get(StatCode::STL), Some(1.5));

        let order: Vec<StatCode> = averages.iter().map(|(s, _)| s).collect();
        assert_eq!(order, StatCode::ALL.to_vec());
    }

    #[test]
    fn test_averages_zero_games_is_empty() {
        assert!(averages_from_totals(&totals(json!(0))).unwrap().is_empty());
    }

    #[test]
    fn test_averages_no_row_is_empty() {
        let empty = set(json!({ "headers": ["GP", "PTS"], "rowSet": [] }));
        assert!(averages_from_totals(&empty).unwrap().is_empty());
    }

    #[test]
    fn test_averages_skip_missing_totals() {
        let partial = set(json!({
            "headers": ["GP", "PTS", "AST", "REB", "BLK", "STL"],
            "rowSet": [[10, 250, null, 80, 5, 12]]
        }));
        let averages = averages_from_totals(&partial).unwrap();
        assert_eq!(averages.get(StatCode::PTS), Some(25.0));
        assert_eq!(averages.get(StatCode::AST), None);
        assert_eq!(averages.get(StatCode::STL), Some(1.2));
    }

    #[test]
    fn test_averages_exact_half_rounds_to_even() {
        let totals = set(json!({
            "headers": ["GP", "PTS", "AST", "REB", "BLK", "STL"],
            "rowSet": [[4, 30, 10, 3, 1, 5]]
        }));
        let averages = averages_from_totals(&totals).unwrap();
        assert_eq!(averages.get(StatCode::BLK), Some(0.2));
        assert_eq!(averages.get(StatCode::PTS), Some(7.5));
        assert_eq!(averages.get(StatCode::REB), Some(0.8));
        assert_eq!(averages.get(StatCode::STL), Some(1.2));
    }

    fn game_log(rows: Value) -> ResultSet {
        set(json!({
            "name": "PlayerGameLog",
            "headers": ["SEASON_ID", "Player_ID", "Game_ID", "GAME_DATE", "MATCHUP", "WL",
                        "MIN", "REB", "AST", "STL", "BLK", "PTS"],
            "rowSet": rows
        }))
    }

    #[test]
    fn test_table_from_game_log_coerces_and_truncates() {
        let log = game_log(json!([
            ["22024", 2544, "0022401190", "APR 11, 2025", "LAL vs. HOU", "W", 36, 8, 9, 1, 0, 30],
            ["22024", 2544, "0022401170", "APR 09, 2025", "LAL @ OKC", "L", 34, 7, "x", 2, 1, 20],
            ["22024", 2544, "0022401150", "APR 06, 2025", "LAL vs. OKC", "W", 33, 6, 8, 0, 1, 28],
            ["22024", 2544, "0022401130", "APR 04, 2025", "LAL @ NOP", "W", 35, 9, 5, 1, 1, 24],
            ["22024", 2544, "0022401110", "APR 01, 2025", "LAL vs. HOU", "L", 38, 10, 7, 1, 0, 26],
            ["22024", 2544, "0022401090", "MAR 29, 2025", "LAL @ MEM", "W", 30, 5, 6, 1, 0, 18]
        ]));

        let table = table_from_game_log(&log, GameCount::Five).unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(
            table.column(StatCode::PTS),
            vec![Some(30.0), Some(20.0), Some(28.0), Some(24.0), Some(26.0)]
        );
        assert_eq!(table.games()[1].ast, None);
        assert_eq!(table.games()[0].game_date, "APR 11, 2025");
    }

    #[test]
    fn test_table_from_short_log_keeps_all_rows() {
        let log = game_log(json!([
            ["22024", 1, "g1", "JAN 03, 2025", "", "W", 20, 1, 1, 1, 1, 10],
            ["22024", 1, "g2", "JAN 02, 2025", "", "W", 20, 1, 1, 1, 1, 11],
            ["22024", 1, "g3", "JAN 01, 2025", "", "W", 20, 1, 1, 1, 1, 12]
        ]));
        let table = table_from_game_log(&log, GameCount::Ten).unwrap();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_table_from_game_log_requires_columns() {
        let log = set(json!({ "headers": ["GAME_DATE", "PTS"], "rowSet": [["JAN 01, 2025", 3]] }));
        let err = table_from_game_log(&log, GameCount::Five).unwrap_err();
        assert!(matches!(err, NbaError::Retrieval { operation: RECENT_OP, .. }));
    }
}
