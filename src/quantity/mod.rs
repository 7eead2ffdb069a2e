//! Quantity engine
//!
//! Unit-aware normalization, equivalence and default resolution for food
//! quantities.

pub mod collaborator;
pub mod defaults;
pub mod equivalence;
pub mod error;
pub mod food_quantity;
pub mod measure;
pub mod normalizer;
pub mod unit;

pub use collaborator::DataCollaborator;
pub use defaults::{default_quantity, resolve_default_quantity};
pub use error::{QuantityError, QuantityResult};
pub use food_quantity::FoodQuantity;
pub use measure::{convert, measure, Measure};
pub use normalizer::{resolve, to_food_value};
pub use unit::{legal_units, FoodQuantityUnit};
