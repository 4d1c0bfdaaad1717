//! Core utilities for the NBA stats CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `http`: provider headers and base URL resolution
//! - `format`: rounding and display helpers

pub mod format;
pub mod http;

// Re-export commonly used items for convenience
pub use format::{display_float, round_to, title_case};
pub use http::{resolve_base_url, stats_header_map, STATS_BASE_URL};
