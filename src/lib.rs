//! Food Quantity Engine Library
//!
//! Unit-aware food quantities: normalization into storage form, equivalent
//! amounts across units, default amounts, and meal item entry.

pub mod build_info;
pub mod catalog;
pub mod form;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod quantity;
pub mod tools;

#[cfg(test)]
mod test_fixtures;
