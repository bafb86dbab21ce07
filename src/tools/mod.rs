//! Kitchen Units Tools module
//!
//! MCP tool implementations.

pub mod prices;
pub mod recipes;
pub mod status;
pub mod units;
