//! Meal Food Item model
//!
//! A food logged into a meal, with its amount in storage form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Food, FoodValue, Nutrient, Nutrition};
use crate::quantity::convert;

/// The meal slot an item is logged into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayMeal {
    pub id: Uuid,
    pub name: String,
    pub time: DateTime<Utc>,
}

impl DayMeal {
    pub fn new(name: impl Into<String>, time: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            time,
        }
    }

    /// Slot used when the form is opened without one
    pub fn placeholder(now: DateTime<Utc>) -> Self {
        Self::new("New Meal", now)
    }
}

/// Immutable snapshot of a logged food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealFoodItem {
    pub id: Uuid,
    pub food: Food,
    pub amount: FoodValue,
    pub marked_as_eaten_at: Option<DateTime<Utc>>,
    pub sort_position: i64,
    pub is_soft_deleted: bool,
}

impl MealFoodItem {
    pub fn assemble(
        id: Uuid,
        food: &Food,
        amount: FoodValue,
        marked_as_eaten_at: Option<DateTime<Utc>>,
        sort_position: i64,
        is_soft_deleted: bool,
    ) -> Self {
        Self {
            id,
            food: food.clone(),
            amount,
            marked_as_eaten_at,
            sort_position,
            is_soft_deleted,
        }
    }

    /// Assemble a new snapshot, keeping identity, position, soft-delete and
    /// eaten state of the item being edited
    pub fn carrying_forward(existing: Option<&MealFoodItem>, food: &Food, amount: FoodValue) -> Self {
        match existing {
            Some(existing) => Self::assemble(
                existing.id,
                food,
                amount,
                existing.marked_as_eaten_at,
                existing.sort_position,
                existing.is_soft_deleted,
            ),
            None => Self::assemble(Uuid::new_v4(), food, amount, None, 1, false),
        }
    }

    /// How many of the food's nutrient amounts this item is
    pub fn nutrient_multiplier(&self) -> Option<f64> {
        if self.food.amount.value <= 0.0 {
            return None;
        }
        let in_food_units = convert(&self.food, &self.amount, &self.food.amount)?;
        Some(in_food_units / self.food.amount.value)
    }

    /// Nutrients for this item's amount, if the amount converts
    pub fn scaled_nutrition(&self) -> Option<Nutrition> {
        self.nutrient_multiplier()
            .map(|multiplier| self.food.nutrition.scale(multiplier))
    }

    /// One scaled nutrient, zero when the amount does not convert
    pub fn scaled_value(&self, nutrient: Nutrient) -> f64 {
        self.scaled_nutrition()
            .map(|n| n.value(nutrient))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::{VolumeExplicitUnit, WeightUnit};
    use crate::test_fixtures::{chicken_broth, oats, peanut_butter};

    #[test]
    fn test_scaled_nutrition_by_weight() {
        let food = peanut_butter();
        let item = MealFoodItem::carrying_forward(None, &food, FoodValue::weight(64.0, WeightUnit::G));
        // 64 g is 4 tbsp, twice the 2 tbsp the nutrients are given for
        assert!((item.nutrient_multiplier().unwrap() - 2.0).abs() < 1e-9);
        assert!((item.scaled_value(Nutrient::Energy) - 380.0).abs() < 1e-9);
    }

    #[test]
    fn test_scaled_nutrition_across_density() {
        let food = oats();
        let item = MealFoodItem::carrying_forward(
            None,
            &food,
            FoodValue::volume(1.0, VolumeExplicitUnit::CupUsCustomary),
        );
        // 1 cup = 80 g = 2 x 40 g
        assert!((item.scaled_value(Nutrient::Carb) - 54.0).abs() < 1e-6);
    }

    #[test]
    fn test_unconvertible_amount_scales_to_zero() {
        let food = chicken_broth();
        let item = MealFoodItem::carrying_forward(None, &food, FoodValue::weight(100.0, WeightUnit::G));
        assert_eq!(item.scaled_nutrition(), None);
        assert_eq!(item.scaled_value(Nutrient::Energy), 0.0);
    }

    #[test]
    fn test_carrying_forward_keeps_existing_state() {
        let food = peanut_butter();
        let eaten = Utc::now();
        let existing = MealFoodItem::assemble(
            Uuid::new_v4(),
            &food,
            FoodValue::serving(1.0),
            Some(eaten),
            4,
            true,
        );

        let rebuilt =
            MealFoodItem::carrying_forward(Some(&existing), &food, FoodValue::serving(2.0));
        assert_eq!(rebuilt.id, existing.id);
        assert_eq!(rebuilt.sort_position, 4);
        assert!(rebuilt.is_soft_deleted);
        assert_eq!(rebuilt.marked_as_eaten_at, Some(eaten));
        assert_eq!(rebuilt.amount, FoodValue::serving(2.0));

        let fresh = MealFoodItem::carrying_forward(None, &food, FoodValue::serving(2.0));
        assert_ne!(fresh.id, existing.id);
        assert_eq!(fresh.sort_position, 1);
        assert!(!fresh.is_soft_deleted);
        assert_eq!(fresh.marked_as_eaten_at, None);
    }
}
