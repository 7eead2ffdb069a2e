//! Units a food quantity can be expressed in
//!
//! Which units are legal depends on the food: weight and volume need
//! conversion data, servings need a serving definition, and sizes are
//! declared per food.

use crate::models::{Food, UnitType};
use crate::nutrition::{UserVolumeUnits, VolumeUnit, WeightUnit};

/// The unit of a [`FoodQuantity`](super::FoodQuantity)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FoodQuantityUnit {
    Weight(WeightUnit),
    Volume(VolumeUnit),
    Serving,
    /// A food size by id. The volume unit picks the prefix of a
    /// volume-prefixed size; None means the size's own prefix.
    Size(String, Option<VolumeUnit>),
}

impl FoodQuantityUnit {
    pub fn unit_type(&self) -> UnitType {
        match self {
            FoodQuantityUnit::Weight(_) => UnitType::Weight,
            FoodQuantityUnit::Volume(_) => UnitType::Volume,
            FoodQuantityUnit::Serving => UnitType::Serving,
            FoodQuantityUnit::Size(..) => UnitType::Size,
        }
    }

    /// Short label for display ("g", "cup", "serving", "cup packed")
    pub fn short_description(&self, food: &Food) -> String {
        match self {
            FoodQuantityUnit::Weight(unit) => unit.short_description().to_string(),
            FoodQuantityUnit::Volume(unit) => unit.short_description().to_string(),
            FoodQuantityUnit::Serving => "serving".to_string(),
            FoodQuantityUnit::Size(id, prefix) => {
                let Some(size) = food.size(id) else {
                    return id.clone();
                };
                let prefix = prefix.or(size.volume_prefix.map(|p| p.volume_unit()));
                match prefix {
                    Some(volume) => format!("{} {}", volume.short_description(), size.name),
                    None => size.name.clone(),
                }
            }
        }
    }

    /// Whether the food supports this unit at all
    pub fn is_legal_for(&self, food: &Food) -> bool {
        match self {
            FoodQuantityUnit::Weight(_) => food.can_be_measured_in_weight(),
            FoodQuantityUnit::Volume(_) => food.can_be_measured_in_volume(),
            FoodQuantityUnit::Serving => food.serving.is_some(),
            FoodQuantityUnit::Size(id, prefix) => match food.size(id) {
                Some(size) => prefix.is_none() || size.is_volume_prefixed(),
                None => false,
            },
        }
    }

    /// Same unit with a size's implicit prefix spelled out, for comparisons
    pub fn normalized(&self, food: &Food) -> FoodQuantityUnit {
        match self {
            FoodQuantityUnit::Size(id, None) => {
                let prefix = food
                    .size(id)
                    .and_then(|s| s.volume_prefix)
                    .map(|p| p.volume_unit());
                FoodQuantityUnit::Size(id.clone(), prefix)
            }
            other => other.clone(),
        }
    }

    /// True when both name the same unit of `food`
    pub fn is_same_unit(&self, other: &FoodQuantityUnit, food: &Food) -> bool {
        self.normalized(food) == other.normalized(food)
    }
}

/// Every unit the food supports, in picker order: weights, volumes the
/// user can resolve, serving, then sizes as declared.
pub fn legal_units(food: &Food, user_volume_units: &UserVolumeUnits) -> Vec<FoodQuantityUnit> {
    let mut units = Vec::new();

    if food.can_be_measured_in_weight() {
        units.extend(WeightUnit::ALL.into_iter().map(FoodQuantityUnit::Weight));
    }

    if food.can_be_measured_in_volume() {
        units.extend(
            VolumeUnit::ALL
                .into_iter()
                .filter(|v| user_volume_units.volume_explicit_unit(*v).is_some())
                .map(FoodQuantityUnit::Volume),
        );
    }

    if food.serving.is_some() {
        units.push(FoodQuantityUnit::Serving);
    }

    units.extend(
        food.sizes
            .iter()
            .map(|size| FoodQuantityUnit::Size(size.id.clone(), None)),
    );

    units
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{chicken_broth, oats, peanut_butter};

    #[test]
    fn test_peanut_butter_legal_units() {
        let food = peanut_butter();
        let units = legal_units(&food, &UserVolumeUnits::standard());

        assert_eq!(units.first(), Some(&FoodQuantityUnit::Weight(WeightUnit::G)));
        assert!(!units.iter().any(|u| u.unit_type() == UnitType::Volume));
        assert!(units.contains(&FoodQuantityUnit::Serving));
        assert_eq!(
            units.last(),
            Some(&FoodQuantityUnit::Size("tbsp".to_string(), None))
        );
    }

    #[test]
    fn test_legal_units_skip_unresolvable_volumes() {
        let food = oats();
        let units = legal_units(&food, &UserVolumeUnits::standard());
        assert!(units.contains(&FoodQuantityUnit::Volume(VolumeUnit::Cup)));
        assert!(!units.contains(&FoodQuantityUnit::Volume(VolumeUnit::Mug)));
    }

    #[test]
    fn test_serving_requires_definition() {
        let food = chicken_broth();
        assert!(!FoodQuantityUnit::Serving.is_legal_for(&food));
        assert!(FoodQuantityUnit::Volume(VolumeUnit::Cup).is_legal_for(&food));
        assert!(!FoodQuantityUnit::Weight(WeightUnit::G).is_legal_for(&food));
    }

    #[test]
    fn test_prefix_only_legal_on_volume_prefixed_sizes() {
        let food = oats();
        let packed = FoodQuantityUnit::Size("packed".to_string(), Some(VolumeUnit::Tablespoon));
        let scoop = FoodQuantityUnit::Size("scoop".to_string(), Some(VolumeUnit::Tablespoon));
        assert!(packed.is_legal_for(&food));
        assert!(!scoop.is_legal_for(&food));
        assert!(!FoodQuantityUnit::Size("ladle".to_string(), None).is_legal_for(&food));
    }

    #[test]
    fn test_short_descriptions() {
        let food = oats();
        assert_eq!(FoodQuantityUnit::Weight(WeightUnit::G).short_description(&food), "g");
        assert_eq!(FoodQuantityUnit::Volume(VolumeUnit::Cup).short_description(&food), "cup");
        assert_eq!(FoodQuantityUnit::Serving.short_description(&food), "serving");
        assert_eq!(
            FoodQuantityUnit::Size("packed".to_string(), None).short_description(&food),
            "cup packed"
        );
        assert_eq!(
            FoodQuantityUnit::Size("packed".to_string(), Some(VolumeUnit::Tablespoon))
                .short_description(&food),
            "tbsp packed"
        );
    }

    #[test]
    fn test_implicit_prefix_is_same_unit() {
        let food = oats();
        let implicit = FoodQuantityUnit::Size("packed".to_string(), None);
        let explicit = FoodQuantityUnit::Size("packed".to_string(), Some(VolumeUnit::Cup));
        assert!(implicit.is_same_unit(&explicit, &food));
    }
}
