//! Equivalent quantities
//!
//! Expresses one quantity in every other unit its food supports.

use super::food_quantity::FoodQuantity;
use super::measure::convert;
use super::normalizer::resolve;
use super::unit::legal_units;
use crate::nutrition::UserVolumeUnits;

impl<'a> FoodQuantity<'a> {
    /// The same amount in every other legal unit of the food.
    ///
    /// Ordered weight, volume, serving, then sizes in declared order. Units
    /// the amount cannot be converted into are left out, and a zero or
    /// invalid amount has no equivalents.
    pub fn equivalent_quantities(
        &self,
        user_volume_units: &UserVolumeUnits,
    ) -> Vec<FoodQuantity<'a>> {
        if !(self.value.is_finite() && self.value > 0.0) {
            return Vec::new();
        }

        let food = self.food;
        let from = match resolve(self.value, &self.unit, food, user_volume_units) {
            Ok(from) => from,
            Err(e) => {
                tracing::debug!("No equivalents for {}: {}", self.description(), e);
                return Vec::new();
            }
        };

        legal_units(food, user_volume_units)
            .into_iter()
            .filter(|unit| !unit.is_same_unit(&self.unit, food))
            .filter_map(|unit| {
                let to = resolve(1.0, &unit, food, user_volume_units).ok()?;
                let value = convert(food, &from, &to)?;
                (value > 0.0).then(|| FoodQuantity::new(value, unit, food))
            })
            .collect()
    }
}
