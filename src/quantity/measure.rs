//! Physical measure of a food value
//!
//! Reduces any [`FoodValue`] of a food to grams or milliliters by following
//! its serving and size definitions, and converts between units through that
//! common base.

use crate::models::{Density, Food, FoodValue, UnitType};

/// Sizes may be defined in servings, servings in sizes, and so on.
/// Chains longer than this are treated as unresolvable.
const MAX_RESOLUTION_DEPTH: usize = 8;

/// An amount reduced to one of the two physical dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure {
    Grams(f64),
    Milliliters(f64),
}

impl Measure {
    fn scaled(self, factor: f64) -> Self {
        match self {
            Measure::Grams(g) => Measure::Grams(g * factor),
            Measure::Milliliters(ml) => Measure::Milliliters(ml * factor),
        }
    }

    /// Grams, crossing over from volume with the density if needed
    pub fn grams(self, density: Option<&Density>) -> Option<f64> {
        match self {
            Measure::Grams(g) => Some(g),
            Measure::Milliliters(ml) => Some(ml * density?.grams_per_ml()?),
        }
    }

    /// Milliliters, crossing over from weight with the density if needed
    pub fn milliliters(self, density: Option<&Density>) -> Option<f64> {
        match self {
            Measure::Milliliters(ml) => Some(ml),
            Measure::Grams(g) => Some(g / density?.grams_per_ml()?),
        }
    }
}

/// Reduce a value to grams or milliliters, without crossing dimensions
pub fn measure(food: &Food, value: &FoodValue) -> Option<Measure> {
    measure_at_depth(food, value, 0)
}

fn measure_at_depth(food: &Food, value: &FoodValue, depth: usize) -> Option<Measure> {
    if depth > MAX_RESOLUTION_DEPTH {
        tracing::warn!(
            "Gave up resolving a {} value of '{}' after {} steps",
            value.unit_type.as_str(),
            food.name,
            MAX_RESOLUTION_DEPTH
        );
        return None;
    }

    match value.unit_type {
        UnitType::Weight => Some(Measure::Grams(value.value * value.weight_unit?.grams())),
        UnitType::Volume => Some(Measure::Milliliters(
            value.value * value.volume_explicit_unit?.ml(),
        )),
        UnitType::Serving => {
            let serving = food.serving.as_ref()?;
            Some(measure_at_depth(food, serving, depth + 1)?.scaled(value.value))
        }
        UnitType::Size => {
            let size = food.size(value.size_unit_id.as_deref()?)?;
            if size.quantity <= 0.0 {
                return None;
            }

            // A volume-prefixed size picked with another volume ("1 tbsp
            // packed" against "1 cup packed = 100 g") scales by the ratio.
            let prefix_ratio = match (
                size.volume_prefix,
                value.size_unit_volume_prefix_explicit_unit,
            ) {
                (_, None) => 1.0,
                (Some(declared), Some(chosen)) => chosen.ml() / declared.ml(),
                (None, Some(_)) => return None,
            };

            let per_size = measure_at_depth(food, &size.amount, depth + 1)?;
            Some(per_size.scaled(prefix_ratio * value.value / size.quantity))
        }
    }
}

/// Express `from` in the unit of `unit`, returning the new value.
///
/// Only the unit fields of `unit` are used; its value is ignored.
pub fn convert(food: &Food, from: &FoodValue, unit: &FoodValue) -> Option<f64> {
    if from.has_same_unit(unit) {
        return Some(from.value);
    }

    let source = measure(food, from)?;
    let density = food.density.as_ref();

    let converted = match measure(food, &unit.with_value(1.0))? {
        Measure::Grams(per_unit) if per_unit > 0.0 => source.grams(density)? / per_unit,
        Measure::Milliliters(per_unit) if per_unit > 0.0 => {
            source.milliliters(density)? / per_unit
        }
        _ => return None,
    };

    converted.is_finite().then_some(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::{VolumeExplicitUnit, WeightUnit};
    use crate::test_fixtures::{chicken_broth, oats, peanut_butter};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_measure_size_in_grams() {
        let food = peanut_butter();
        let m = measure(&food, &FoodValue::size(2.0, "tbsp", None)).unwrap();
        assert_eq!(m, Measure::Grams(32.0));
    }

    #[test]
    fn test_measure_serving_follows_size() {
        let food = peanut_butter();
        let m = measure(&food, &FoodValue::serving(1.5)).unwrap();
        assert_eq!(m, Measure::Grams(48.0));
    }

    #[test]
    fn test_measure_volume_prefixed_size() {
        let food = oats();
        // 1 cup packed = 100 g, so 2 tbsp packed = 100 * 2 * tbsp/cup
        let value = FoodValue::size(2.0, "packed", Some(VolumeExplicitUnit::TablespoonUs));
        let grams = measure(&food, &value).unwrap().grams(None).unwrap();
        assert!(approx(grams, 100.0 * 2.0 * 14.7868 / 236.588));
    }

    #[test]
    fn test_prefix_on_plain_size_is_unresolvable() {
        let food = peanut_butter();
        let value = FoodValue::size(1.0, "tbsp", Some(VolumeExplicitUnit::CupMetric));
        assert_eq!(measure(&food, &value), None);
    }

    #[test]
    fn test_missing_serving_is_unresolvable() {
        let food = chicken_broth();
        assert_eq!(measure(&food, &FoodValue::serving(1.0)), None);
    }

    #[test]
    fn test_self_referencing_serving_terminates() {
        let mut food = peanut_butter();
        food.serving = Some(FoodValue::serving(1.0));
        assert_eq!(measure(&food, &FoodValue::serving(1.0)), None);
    }

    #[test]
    fn test_convert_weight_to_volume_with_density() {
        let food = oats();
        let cups = convert(
            &food,
            &FoodValue::weight(160.0, WeightUnit::G),
            &FoodValue::volume(1.0, VolumeExplicitUnit::CupUsCustomary),
        )
        .unwrap();
        assert!(approx(cups, 2.0));
    }

    #[test]
    fn test_convert_without_density_fails() {
        let food = peanut_butter();
        let result = convert(
            &food,
            &FoodValue::weight(32.0, WeightUnit::G),
            &FoodValue::volume(1.0, VolumeExplicitUnit::TablespoonUs),
        );
        assert_eq!(result, None);
    }

    #[test]
    fn test_convert_same_unit_is_identity() {
        let food = chicken_broth();
        let value = FoodValue::serving(3.0);
        assert_eq!(convert(&food, &value, &FoodValue::serving(1.0)), Some(3.0));
    }
}
