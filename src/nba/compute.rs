use crate::{
    core::round_to,
    nba::types::{Prediction, RecentGamesTable},
    NbaError, Result, StatCode,
};


/// Average or threshold probability for one stat over a recent-games window.
///
/// Every game in the window counts the same; there is no recency weighting.
#[derive(Debug, Clone, Copy)]
pub struct StatFormula<'a> {
    table: &'a RecentGamesTable,
    stat: StatCode,
    threshold: Option<f64>,
}

impl<'a> StatFormula<'a> {
    pub fn new(table: &'a RecentGamesTable, stat: StatCode, threshold: Option<f64>) -> Self {
        Self {
            table,
            stat,
            threshold,
        }
    }

    /// Like [`StatFormula::new`] but takes the stat as typed by the user.
    pub fn from_code(table: &'a RecentGamesTable, stat: &str, threshold: Option<f64>) -> Result<Self> {
        Ok(Self::new(table, stat.parse()?, threshold))
    }

    pub fn stat(&self) -> StatCode {
        self.stat
    }

    /// Threshold mode when a threshold was given, average mode otherwise.
    pub fn compute(&self) -> Result<Prediction> {
        let values = self.table.column(self.stat);
        if values.is_empty() {
            return Err(NbaError::DataUnavailable {
                message: format!("No games to compute {} from.", self.stat),
            });
        }

        match self.threshold {
            Some(threshold) => Ok(Prediction::Probability {
                threshold,
                value: share_at_or_above(&values, threshold),
            }),
            None => mean(&values)
                .map(|value| Prediction::Average { value })
                .ok_or_else(|| NbaError::DataUnavailable {
                    message: format!("No numeric {} values in recent games.", self.stat),
                }),
        }
    }
}

/// Fraction of entries `>= threshold`, two decimals. Missing entries never count
/// but still sit in the denominator. `values` must be non-empty.
fn share_at_or_above(values: &[Option<f64>], threshold: f64) -> f64 {
    let hits = values
        .iter()
        .filter(|v| v.is_some_and(|x| x >= threshold))
        .count();
    round_to(hits as f64 / values.len() as f64, 2)
}

/// Mean of the present entries, two decimals; `None` when nothing is present.
fn mean(values: &[Option<f64>]) -> Option<f64> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        return None;
    }
    Some(round_to(present.iter().sum::<f64>() / present.len() as f64, 2))
}
