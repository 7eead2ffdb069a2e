//! Food-scoped quantities

use super::error::QuantityResult;
use super::measure::convert;
use super::normalizer::{resolve, to_food_value};
use super::unit::FoodQuantityUnit;
use crate::models::{Food, FoodValue, UnitType};
use crate::nutrition::{clean_amount, UserUnits, UserVolumeUnits};

/// A value and unit, only meaningful for the food it refers to.
///
/// Used for computation and display; stored as a [`FoodValue`].
#[derive(Debug, Clone, PartialEq)]
pub struct FoodQuantity<'a> {
    pub value: f64,
    pub unit: FoodQuantityUnit,
    pub food: &'a Food,
}

impl<'a> FoodQuantity<'a> {
    pub fn new(value: f64, unit: FoodQuantityUnit, food: &'a Food) -> Self {
        Self { value, unit, food }
    }

    /// Rebuild the quantity a [`FoodValue`] was normalized from.
    ///
    /// Returns None when the value is inconsistent or names a size the food
    /// does not declare.
    pub fn from_food_value(value: &FoodValue, food: &'a Food) -> Option<Self> {
        if !value.is_consistent() {
            return None;
        }

        let unit = match value.unit_type {
            UnitType::Weight => FoodQuantityUnit::Weight(value.weight_unit?),
            UnitType::Volume => FoodQuantityUnit::Volume(value.volume_explicit_unit?.volume_unit()),
            UnitType::Serving => FoodQuantityUnit::Serving,
            UnitType::Size => {
                let size = food.size(value.size_unit_id.as_deref()?)?;
                let prefix = value
                    .size_unit_volume_prefix_explicit_unit
                    .map(|p| p.volume_unit());
                FoodQuantityUnit::Size(size.id.clone(), prefix)
            }
        };

        Some(Self::new(value.value, unit, food))
    }

    /// Storage form of this quantity
    pub fn food_value(&self, user_units: &UserUnits) -> QuantityResult<FoodValue> {
        to_food_value(self.value, &self.unit, self.food, user_units)
    }

    /// The same amount in another unit of the food, if it converts
    pub fn converted(
        &self,
        unit: &FoodQuantityUnit,
        user_volume_units: &UserVolumeUnits,
    ) -> Option<FoodQuantity<'a>> {
        let from = resolve(self.value, &self.unit, self.food, user_volume_units).ok()?;
        let to = resolve(1.0, unit, self.food, user_volume_units).ok()?;
        let value = convert(self.food, &from, &to)?;
        Some(FoodQuantity::new(value, unit.clone(), self.food))
    }

    pub fn unit_description(&self) -> String {
        self.unit.short_description(self.food)
    }

    /// "2 tbsp", "0.5 cup"
    pub fn description(&self) -> String {
        format!("{} {}", clean_amount(self.value), self.unit_description())
    }
}
