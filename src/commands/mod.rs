//! Command implementations for the NBA stats CLI

pub mod predict;
pub mod prompt;
pub mod render;
