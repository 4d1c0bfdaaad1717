//! NBA stats provider access and the computations built on it.

pub mod compute;
pub mod http;
pub mod player;
pub mod types;
