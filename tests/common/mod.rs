//! Mock stats.nba.com responses shared by the integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

pub const LEBRON_ID: u64 = 2544;
pub const JORDAN_ID: u64 = 893;

pub fn directory() -> Value {
    json!({
        "resource": "commonallplayers",
        "resultSets": [{
            "name": "CommonAllPlayers",
            "headers": ["PERSON_ID", "DISPLAY_LAST_COMMA_FIRST", "DISPLAY_FIRST_LAST", "ROSTERSTATUS"],
            "rowSet": [
                [JORDAN_ID, "Jordan, Michael", "Michael Jordan", 0],
                [LEBRON_ID, "James, LeBron", "LeBron James", 1]
            ]
        }]
    })
}

pub fn player_info(team: &str, roster_status: &str, to_year: u16) -> Value {
    json!({
        "resource": "commonplayerinfo",
        "resultSets": [{
            "name": "CommonPlayerInfo",
            "headers": ["PERSON_ID", "DISPLAY_FIRST_LAST", "HEIGHT", "WEIGHT", "POSITION",
                        "ROSTERSTATUS", "TEAM_NAME", "FROM_YEAR", "TO_YEAR"],
            "rowSet": [[LEBRON_ID, "LeBron James", "6-9", "250", "Forward",
                        roster_status, team, 2003, to_year]]
        }]
    })
}

pub fn career_totals(gp: u32, pts: u32) -> Value {
    json!({
        "resource": "playercareerstats",
        "resultSets": [
            {
                "name": "SeasonTotalsRegularSeason",
                "headers": ["PLAYER_ID", "SEASON_ID", "GP", "REB", "AST", "STL", "BLK", "PTS"],
                "rowSet": [[LEBRON_ID, "2003-04", 79, 432, 465, 130, 58, 1654]]
            },
            {
                "name": "CareerTotalsRegularSeason",
                "headers": ["PLAYER_ID", "LEAGUE_ID", "Team_ID", "GP", "GS", "REB", "AST", "STL", "BLK", "PTS"],
                "rowSet": [[LEBRON_ID, "00", 0, gp, gp, 1000, 500, 100, 50, pts]]
            }
        ]
    })
}

/// Game log rows for the given points, newest first, dated backwards from APR 11.
pub fn game_log(points: &[u32]) -> Value {
    let rows: Vec<Value> = points
        .iter()
        .enumerate()
        .map(|(i, pts)| {
            json!([
                "22024",
                LEBRON_ID,
                format!("00224011{i:02}"),
                format!("APR {:02}, 2025", 11 - i),
                "LAL vs. HOU",
                "W",
                35,
                8,
                7,
                1,
                1,
                pts
            ])
        })
        .collect();

    json!({
        "resource": "playergamelog",
        "resultSets": [{
            "name": "PlayerGameLog",
            "headers": ["SEASON_ID", "Player_ID", "Game_ID", "GAME_DATE", "MATCHUP", "WL",
                        "MIN", "REB", "AST", "STL", "BLK", "PTS"],
            "rowSet": rows
        }]
    })
}

pub async fn mount_json(server: &MockServer, endpoint: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/{endpoint}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_game_log(server: &MockServer, body: Value, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/playergamelog"))
        .and(query_param("Season", "2024-25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Directory, an active LeBron with a 1000-game career, and nothing else.
pub async fn active_lebron(server: &MockServer) {
    mount_json(server, "commonallplayers", directory()).await;
    mount_json(server, "commonplayerinfo", player_info("Lakers", "Active", 2024)).await;
    mount_json(server, "playercareerstats", career_totals(1000, 27100)).await;
}
