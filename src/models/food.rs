//! Food model
//!
//! Represents a food with its nutrients, serving, sizes and density.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{FoodValue, Nutrition};
use crate::nutrition::{VolumeExplicitUnit, WeightUnit};
use crate::quantity::measure::{measure, Measure};

/// A named, food-specific quantity such as "1 scoop" or "2 cookies"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSize {
    pub id: String,
    pub name: String,
    /// How many of this size `amount` describes
    #[serde(default = "default_size_quantity")]
    pub quantity: f64,
    /// Set for sizes measured by volume, e.g. "1 cup, shredded"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_prefix: Option<VolumeExplicitUnit>,
    pub amount: FoodValue,
}

fn default_size_quantity() -> f64 {
    1.0
}

impl FoodSize {
    pub fn is_volume_prefixed(&self) -> bool {
        self.volume_prefix.is_some()
    }
}

/// Weight-to-volume equivalence, e.g. "100 g = 110 mL"
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Density {
    pub weight: f64,
    pub weight_unit: WeightUnit,
    pub volume: f64,
    pub volume_unit: VolumeExplicitUnit,
}

impl Density {
    pub fn grams_per_ml(&self) -> Option<f64> {
        let ml = self.volume * self.volume_unit.ml();
        let grams = self.weight * self.weight_unit.grams();
        if ml > 0.0 && grams > 0.0 {
            Some(grams / ml)
        } else {
            None
        }
    }
}

/// A food, immutable once loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// The amount `nutrition` is given for
    pub amount: FoodValue,
    pub nutrition: Nutrition,
    /// What one serving equals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving: Option<FoodValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_quantity: Option<FoodValue>,
    #[serde(default)]
    pub sizes: Vec<FoodSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<Density>,
}

impl Food {
    /// Look up one of this food's sizes
    pub fn size(&self, id: &str) -> Option<&FoodSize> {
        self.sizes.iter().find(|s| s.id == id)
    }

    pub fn can_be_measured_in_weight(&self) -> bool {
        self.density.is_some()
            || self
                .declared_values()
                .any(|v| matches!(measure(self, v), Some(Measure::Grams(_))))
    }

    pub fn can_be_measured_in_volume(&self) -> bool {
        self.density.is_some()
            || self
                .declared_values()
                .any(|v| matches!(measure(self, v), Some(Measure::Milliliters(_))))
    }

    /// Amount, serving and size amounts, the values that carry conversion data
    fn declared_values(&self) -> impl Iterator<Item = &FoodValue> {
        std::iter::once(&self.amount)
            .chain(self.serving.iter())
            .chain(self.sizes.iter().map(|s| &s.amount))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_fixtures::{chicken_broth, oats, peanut_butter};

    #[test]
    fn test_peanut_butter_is_weight_only() {
        let food = peanut_butter();
        assert!(food.can_be_measured_in_weight());
        assert!(!food.can_be_measured_in_volume());
    }

    #[test]
    fn test_density_enables_both_dimensions() {
        let food = oats();
        assert!(food.can_be_measured_in_weight());
        assert!(food.can_be_measured_in_volume());
    }

    #[test]
    fn test_volume_food_without_density() {
        let food = chicken_broth();
        assert!(!food.can_be_measured_in_weight());
        assert!(food.can_be_measured_in_volume());
    }

    #[test]
    fn test_size_lookup() {
        let food = peanut_butter();
        assert_eq!(food.size("tbsp").map(|s| s.name.as_str()), Some("tbsp"));
        assert!(food.size("scoop").is_none());
    }

    #[test]
    fn test_density_grams_per_ml() {
        let density = oats().density.unwrap();
        assert!((density.grams_per_ml().unwrap() - 80.0 / 236.588).abs() < 1e-9);
    }
}
