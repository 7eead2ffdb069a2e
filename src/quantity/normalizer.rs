//! Quantity normalization
//!
//! Turns a `(value, unit, food)` triple into a [`FoodValue`], resolving
//! abstract volume units through the user's preferences.

use super::error::{QuantityError, QuantityResult};
use super::unit::FoodQuantityUnit;
use crate::models::{Food, FoodValue};
use crate::nutrition::{UserUnits, UserVolumeUnits, VolumeExplicitUnit, VolumeUnit};

/// Normalize a quantity into its storage form.
///
/// Fails with [`QuantityError::InvalidUnitForFood`] when the food does not
/// support the unit, or when the user's preferences cannot resolve one of
/// its volume units.
pub fn to_food_value(
    value: f64,
    unit: &FoodQuantityUnit,
    food: &Food,
    user_units: &UserUnits,
) -> QuantityResult<FoodValue> {
    resolve(value, unit, food, &user_units.volume)
}

/// [`to_food_value`] against volume preferences alone
pub fn resolve(
    value: f64,
    unit: &FoodQuantityUnit,
    food: &Food,
    user_volume_units: &UserVolumeUnits,
) -> QuantityResult<FoodValue> {
    let description = || unit.short_description(food);

    if !unit.is_legal_for(food) {
        tracing::debug!(
            "Rejecting {} unit '{}' for '{}'",
            unit.unit_type().as_str(),
            description(),
            food.name
        );
        return Err(QuantityError::invalid_unit(description(), food));
    }

    let explicit = |volume: VolumeUnit| -> QuantityResult<VolumeExplicitUnit> {
        user_volume_units.volume_explicit_unit(volume).ok_or_else(|| {
            tracing::warn!(
                "No explicit volume unit for {:?}; cannot store '{}' for '{}'",
                volume,
                description(),
                food.name
            );
            QuantityError::invalid_unit(description(), food)
        })
    };

    let food_value = match unit {
        FoodQuantityUnit::Weight(weight) => FoodValue::weight(value, *weight),
        FoodQuantityUnit::Volume(volume) => FoodValue::volume(value, explicit(*volume)?),
        FoodQuantityUnit::Serving => FoodValue::serving(value),
        FoodQuantityUnit::Size(id, prefix) => {
            let prefix = prefix.map(&explicit).transpose()?;
            FoodValue::size(value, id.clone(), prefix)
        }
    };

    Ok(food_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UnitType;
    use crate::nutrition::WeightUnit;
    use crate::quantity::{legal_units, FoodQuantity};
    use crate::test_fixtures::{chicken_broth, oats, peanut_butter};

    #[test]
    fn test_peanut_butter_size_value() {
        let food = peanut_butter();
        let unit = FoodQuantityUnit::Size("tbsp".to_string(), None);
        let value = to_food_value(2.0, &unit, &food, &UserUnits::standard()).unwrap();

        assert_eq!(value.unit_type, UnitType::Size);
        assert_eq!(value.size_unit_id.as_deref(), Some("tbsp"));
        assert_eq!(value.value, 2.0);
        assert!(value.is_consistent());
    }

    #[test]
    fn test_volume_rejected_for_weight_only_food() {
        let food = peanut_butter();
        let unit = FoodQuantityUnit::Volume(VolumeUnit::Cup);
        let err = to_food_value(1.0, &unit, &food, &UserUnits::standard()).unwrap_err();
        assert!(matches!(err, QuantityError::InvalidUnitForFood { .. }));
    }

    #[test]
    fn test_volume_stores_users_explicit_unit() {
        let food = oats();
        let mut user_units = UserUnits::standard();
        user_units.volume.cup = VolumeExplicitUnit::CupMetric;

        let value =
            to_food_value(1.0, &FoodQuantityUnit::Volume(VolumeUnit::Cup), &food, &user_units)
                .unwrap();
        assert_eq!(value.volume_explicit_unit, Some(VolumeExplicitUnit::CupMetric));
    }

    #[test]
    fn test_unresolvable_volume_is_invalid() {
        let food = oats();
        let err = to_food_value(
            1.0,
            &FoodQuantityUnit::Volume(VolumeUnit::Mug),
            &food,
            &UserUnits::standard(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            QuantityError::InvalidUnitForFood {
                unit: "mug".to_string(),
                food: "Rolled Oats".to_string()
            }
        );
    }

    #[test]
    fn test_size_prefix_is_resolved() {
        let food = oats();
        let unit = FoodQuantityUnit::Size("packed".to_string(), Some(VolumeUnit::Tablespoon));
        let value = to_food_value(3.0, &unit, &food, &UserUnits::standard()).unwrap();
        assert_eq!(
            value.size_unit_volume_prefix_explicit_unit,
            Some(VolumeExplicitUnit::TablespoonUs)
        );
    }

    #[test]
    fn test_serving_rejected_without_definition() {
        let food = chicken_broth();
        assert!(to_food_value(1.0, &FoodQuantityUnit::Serving, &food, &UserUnits::standard())
            .is_err());
    }

    #[test]
    fn test_weight_stored_directly() {
        let food = oats();
        let value = to_food_value(
            50.0,
            &FoodQuantityUnit::Weight(WeightUnit::Oz),
            &food,
            &UserUnits::standard(),
        )
        .unwrap();
        assert_eq!(value, FoodValue::weight(50.0, WeightUnit::Oz));
    }

    #[test]
    fn test_every_legal_unit_round_trips() {
        let user_units = UserUnits::standard();
        for food in [peanut_butter(), oats(), chicken_broth()] {
            let mut units = legal_units(&food, &user_units.volume);
            units.push(FoodQuantityUnit::Size("packed".to_string(), Some(VolumeUnit::Teaspoon)));

            for unit in units.into_iter().filter(|u| u.is_legal_for(&food)) {
                let value = to_food_value(1.5, &unit, &food, &user_units).unwrap();
                let quantity = FoodQuantity::from_food_value(&value, &food).unwrap();
                assert_eq!(quantity.unit, unit, "{} in {:?}", food.name, unit);
                assert_eq!(quantity.value, 1.5);
            }
        }
    }
}
