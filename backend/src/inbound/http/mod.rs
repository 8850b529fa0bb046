//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod residents;
pub mod schemas;
pub mod state;
pub mod visitors;

pub use error::{ApiResult, json_config, query_config};
