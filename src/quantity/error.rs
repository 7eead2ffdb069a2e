//! Quantity engine errors

use thiserror::Error;

/// Errors raised while resolving or editing a quantity.
///
/// All of them are local to one call; the caller re-prompts and nothing else
/// needs to be undone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("Unit '{unit}' is not valid for food '{food}'")]
    InvalidUnitForFood { unit: String, food: String },

    #[error("'{0}' is not a valid amount")]
    ParseFailure(String),

    #[error("No food selected")]
    MissingContext,
}

impl QuantityError {
    pub(crate) fn invalid_unit(unit: impl Into<String>, food: &crate::models::Food) -> Self {
        QuantityError::InvalidUnitForFood {
            unit: unit.into(),
            food: food.name.clone(),
        }
    }
}

/// Result type for quantity operations
pub type QuantityResult<T> = Result<T, QuantityError>;
