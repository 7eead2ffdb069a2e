//! Default quantity resolution

use super::collaborator::DataCollaborator;
use super::food_quantity::FoodQuantity;
use crate::models::Food;

/// Pick the quantity a food starts with.
///
/// The user's last-used quantity wins over the food's declared default.
/// None means the caller must show the amount as required.
pub fn default_quantity<'a>(
    food: &'a Food,
    last_used: Option<FoodQuantity<'a>>,
) -> Option<FoodQuantity<'a>> {
    last_used.or_else(|| declared_default(food))
}

/// [`default_quantity`] with the last-used lookup done through a collaborator
pub fn resolve_default_quantity<'a>(
    food: &'a Food,
    collaborator: &dyn DataCollaborator,
) -> Option<FoodQuantity<'a>> {
    default_quantity(food, collaborator.last_used_quantity(food))
}

fn declared_default(food: &Food) -> Option<FoodQuantity<'_>> {
    let value = food.default_quantity.as_ref()?;
    let quantity = FoodQuantity::from_food_value(value, food);
    if quantity.is_none() {
        tracing::warn!("Ignoring unusable default quantity of '{}'", food.name);
    }
    quantity
}
