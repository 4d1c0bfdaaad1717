//! Error types for the NBA stats CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, NbaError>;

#[derive(Error, Debug)]
pub enum NbaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Player '{name}' not found in NBA stats directory")]
    PlayerNotFound { name: String },

    #[error("Error {operation}: {message}")]
    Retrieval {
        operation: &'static str,
        message: String,
    },

    #[error("'{stat}' is not a valid stat.")]
    InvalidStat { stat: String },

    #[error("Invalid season '{season}', expected format YYYY-YY (e.g. 2024-25)")]
    InvalidSeason { season: String },

    #[error("Invalid game count '{games}', expected 5 or 10")]
    InvalidGameCount { games: String },

    #[error("{message}")]
    DataUnavailable { message: String },

    #[error("{name} is not an active player. Recent game logs unavailable.")]
    InactivePlayer { name: String },
}

impl NbaError {
    /// Build a `Retrieval` error for an unexpected response shape.
    pub fn malformed(operation: &'static str, message: impl Into<String>) -> Self {
        NbaError::Retrieval {
            operation,
            message: message.into(),
        }
    }

    /// Scope transport and parsing failures to the operation that hit them.
    ///
    /// Domain errors pass through untouched so callers can still match on them.
    pub fn during(self, operation: &'static str) -> Self {
        match self {
            NbaError::Http(_)
            | NbaError::Json(_)
            | NbaError::Io(_)
            | NbaError::InvalidHeader(_) => NbaError::Retrieval {
                operation,
                message: self.to_string(),
            },
            other => other,
        }
    }
}
