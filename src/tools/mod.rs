//! Tools module
//!
//! MCP tool implementations for the food quantity service.

pub mod foods;
pub mod quantities;
pub mod status;
