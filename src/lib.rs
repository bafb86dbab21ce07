//! Kitchen Units Library
//!
//! Unit catalog, conversion engine, and recipe tooling for kitchen quantities.

pub mod config;
pub mod conversion;
pub mod mcp;
pub mod models;
pub mod service_info;
pub mod tools;
