//! Type-safe wrappers and enums for NBA stats data.

pub mod ids;
pub mod stat;
pub mod time;

pub use ids::PlayerId;
pub use stat::StatCode;
pub use time::{GameCount, Season};
