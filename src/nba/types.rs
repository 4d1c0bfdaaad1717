use crate::cli::types::{PlayerId, StatCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;


/// Placeholder for profile fields the provider leaves out.
pub const NOT_AVAILABLE: &str = "N/A";

/// One named table out of a stats.nba.com response.
///
/// Every endpoint answers with a list of these: column names in `headers`
/// and positional rows in `rowSet`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultSet {
    #[serde(default)]
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Column position for `header`, ignoring case (`Player_ID` vs `PLAYER_ID`).
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(header))
    }

    pub fn has_columns(&self, headers: &[&str]) -> bool {
        headers.iter().all(|h| self.column_index(h).is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.row_set.is_empty()
    }

    pub fn len(&self) -> usize {
        self.row_set.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.row_set.iter().map(move |values| Row {
            set: self,
            values: values.as_slice(),
        })
    }

    pub fn first_row(&self) -> Option<Row<'_>> {
        self.rows().next()
    }
}

/// Borrowed view of one `rowSet` entry with lookup by header name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    set: &'a ResultSet,
    values: &'a [Value],
}

impl<'a> Row<'a> {
    /// Raw cell; `None` when the column is unknown or the row is short.
    pub fn get(&self, header: &str) -> Option<&'a Value> {
        self.set
            .column_index(header)
            .and_then(|idx| self.values.get(idx))
    }

    pub fn number(&self, header: &str) -> Option<f64> {
        self.get(header).and_then(value_as_f64)
    }

    pub fn text(&self, header: &str) -> Option<String> {
        self.get(header).and_then(value_as_text)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<ResultSet>),
    One(ResultSet),
}

/// Top-level envelope shared by every stats endpoint.
///
/// Most endpoints use `resultSets` (a list); a few use `resultSet` (a single
/// object). Both deserialize into the same list.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsEnvelope {
    #[serde(rename = "resultSets", alias = "resultSet")]
    result_sets: OneOrMany,
}

impl StatsEnvelope {
    pub fn result_sets(&self) -> &[ResultSet] {
        match &self.result_sets {
            OneOrMany::Many(sets) => sets,
            OneOrMany::One(set) => std::slice::from_ref(set),
        }
    }

    /// Find a result set by name, falling back to its usual position.
    pub fn into_result_set(self, name: &str, fallback_index: usize) -> Option<ResultSet> {
        let mut sets = match self.result_sets {
            OneOrMany::Many(sets) => sets,
            OneOrMany::One(set) => vec![set],
        };
        match sets.iter().position(|s| s.name == name) {
            Some(idx) => Some(sets.swap_remove(idx)),
            None if fallback_index < sets.len() => Some(sets.swap_remove(fallback_index)),
            None => None,
        }
    }
}

/// Numeric cell coercion: numbers pass, numeric strings parse, the rest is missing.
pub fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Text cell coercion: blank strings and nulls count as missing.
pub fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Resolved player. The name is the title-cased input, not the directory spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub name: String,
    pub id: PlayerId,
    pub is_active: bool,
}

/// Biographical fields from `commonplayerinfo`, each defaulting to `N/A`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub team: String,
    pub position: String,
    pub height: String,
    pub weight: String,
    pub from_year: String,
    pub to_year: String,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "\u{1F4CB} Player Profile for {}:", self.name)?;
        writeln!(f, "  Team: {}", self.team)?;
        writeln!(f, "  Position: {}", self.position)?;
        writeln!(f, "  Height: {}", self.height)?;
        writeln!(f, "  Weight: {}", self.weight)?;
        write!(f, "  Seasons Active: {} to {}", self.from_year, self.to_year)
    }
}

/// Per-game career averages keyed by stat, in display order.
///
/// Empty means the provider had no usable career totals; it never stands in
/// for five zeroes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CareerAverages(pub BTreeMap<StatCode, f64>);

impl CareerAverages {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, stat: StatCode) -> Option<f64> {
        self.0.get(&stat).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatCode, f64)> + '_ {
        self.0.iter().map(|(stat, avg)| (*stat, *avg))
    }
}

/// One game-log row. Stat fields are `None` when the provider sent something unparseable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRecord {
    pub game_date: String,
    #[serde(skip)]
    pub date: Option<NaiveDate>,
    pub pts: Option<f64>,
    pub ast: Option<f64>,
    pub reb: Option<f64>,
    pub blk: Option<f64>,
    pub stl: Option<f64>,
}

impl GameRecord {
    pub fn stat(&self, stat: StatCode) -> Option<f64> {
        match stat {
            StatCode::PTS => self.pts,
            StatCode::AST => self.ast,
            StatCode::REB => self.reb,
            StatCode::BLK => self.blk,
            StatCode::STL => self.stl,
        }
    }
}

/// Most-recent-first window of game records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecentGamesTable {
    games: Vec<GameRecord>,
}

impl RecentGamesTable {
    /// Sort by date descending and keep the first `count` games.
    ///
    /// The sort is stable and undated rows go last, so provider order
    /// survives wherever dates don't decide.
    pub fn from_games(mut games: Vec<GameRecord>, count: usize) -> Self {
        games.sort_by(|a, b| match (a.date, b.date) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        games.truncate(count);
        Self { games }
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// One stat across every game, in table order.
    pub fn column(&self, stat: StatCode) -> Vec<Option<f64>> {
        self.games.iter().map(|g| g.stat(stat)).collect()
    }
}

/// Outcome of a stat formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Prediction {
    /// Mean over the window, two decimals.
    Average { value: f64 },
    /// Share of games at or above `threshold`, in [0, 1], two decimals.
    Probability { threshold: f64, value: f64 },
}

impl Prediction {
    pub fn value(&self) -> f64 {
        match self {
            Prediction::Average { value } | Prediction::Probability { value, .. } => *value,
        }
    }
}

/// Parse a `GAME_DATE` cell. The game log sends `APR 13, 2025`; other
/// endpoints use ISO timestamps.
pub fn parse_game_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.len() >= 10 {
        if let Some(iso) = raw.get(..10) {
            if let Ok(date) = NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
                return Some(date);
            }
        }
    }

    // Normalize "APR" to "Apr" so the month name matches chrono's spelling
    let mut normalized = String::with_capacity(raw.len());
    for (i, c) in raw.chars().enumerate() {
        if i == 0 {
            normalized.extend(c.to_uppercase());
        } else if c.is_ascii_alphabetic() {
            normalized.push(c.to_ascii_lowercase());
        } else {
            normalized.push(c);
        }
    }
    NaiveDate::parse_from_str(&normalized, "%b %d, %Y").ok()
}
