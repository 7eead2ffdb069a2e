//! Meal item form state
//!
//! Tracks the food, unit and amount being entered for a meal item, keeps
//! the amount text and parsed value in step, and re-assembles the
//! [`MealFoodItem`] on every change.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::models::{DayMeal, Food, FoodSize, FoodValue, MealFoodItem, Nutrient};
use crate::nutrition::{clean_amount, parse_amount};
use crate::quantity::{
    legal_units, resolve, resolve_default_quantity, to_food_value, DataCollaborator,
    FoodQuantity, FoodQuantityUnit, QuantityResult,
};

/// Everything a form is opened with
pub struct MealItemFormSeed {
    /// Item being edited; None for a new entry
    pub existing: Option<MealFoodItem>,
    pub date: DateTime<Utc>,
    pub day_meal: Option<DayMeal>,
    pub food: Option<Food>,
    pub amount: Option<FoodValue>,
    pub day_meals: Vec<DayMeal>,
}

impl MealItemFormSeed {
    /// A new entry on `date` with nothing chosen yet
    pub fn new(date: DateTime<Utc>) -> Self {
        Self {
            existing: None,
            date,
            day_meal: None,
            food: None,
            amount: None,
            day_meals: Vec::new(),
        }
    }
}

pub struct MealItemForm {
    date: DateTime<Utc>,
    food: Option<Food>,
    day_meals: Vec<DayMeal>,
    unit: FoodQuantityUnit,
    amount: Option<f64>,
    amount_text: String,
    day_meal: DayMeal,
    initial_day_meal: Option<DayMeal>,
    existing: Option<MealFoodItem>,
    meal_food_item: Option<MealFoodItem>,
    collaborator: Arc<dyn DataCollaborator>,
}

impl MealItemForm {
    pub fn new(seed: MealItemFormSeed, collaborator: Arc<dyn DataCollaborator>) -> Self {
        let MealItemFormSeed {
            existing,
            date,
            day_meal,
            food,
            amount,
            day_meals,
        } = seed;

        let mut form = Self {
            date,
            food,
            day_meals,
            unit: FoodQuantityUnit::Serving,
            amount: Some(1.0),
            amount_text: "1".to_string(),
            day_meal: day_meal.clone().unwrap_or_else(|| DayMeal::placeholder(Utc::now())),
            initial_day_meal: day_meal,
            existing,
            meal_food_item: None,
            collaborator,
        };

        let seeded = match (&form.food, &amount) {
            (Some(food), Some(amount)) => FoodQuantity::from_food_value(amount, food)
                .map(|quantity| (quantity.value, quantity.unit)),
            _ => None,
        };

        match seeded {
            Some((value, unit)) => {
                form.unit = unit;
                form.set_amount(Some(value));
            }
            None => {
                form.set_default_unit();
                form.fall_back_to_legal_unit();
                form.assemble();
            }
        }
        form
    }

    // ------------------------------------------------------------------
    // Food and unit
    // ------------------------------------------------------------------

    pub fn food(&self) -> Option<&Food> {
        self.food.as_ref()
    }

    /// Switch food, starting from its default quantity.
    ///
    /// Without a default the amount carries over. A unit the new food cannot
    /// be measured in is replaced by the food's first legal unit.
    pub fn set_food(&mut self, food: Food) {
        tracing::debug!("Form food set to '{}'", food.name);
        self.food = Some(food);
        self.set_default_unit();
        self.fall_back_to_legal_unit();
        self.assemble();
    }

    fn fall_back_to_legal_unit(&mut self) {
        let Some(food) = &self.food else {
            return;
        };
        let user_volume_units = self.collaborator.user_volume_units();
        if resolve(1.0, &self.unit, food, &user_volume_units).is_ok() {
            return;
        }
        if let Some(unit) = legal_units(food, &user_volume_units).into_iter().next() {
            tracing::debug!(
                "Form unit reset to '{}' for '{}'",
                unit.short_description(food),
                food.name
            );
            self.unit = unit;
        }
    }

    /// Apply the last-used or declared default quantity of the current food.
    ///
    /// Leaves the amount and unit alone when the food has neither.
    pub fn set_default_unit(&mut self) {
        let Some(food) = &self.food else {
            return;
        };
        let Some(quantity) = resolve_default_quantity(food, self.collaborator.as_ref()) else {
            return;
        };

        let (value, unit) = (quantity.value, quantity.unit);
        self.unit = unit;
        self.set_amount(Some(value));
    }

    pub fn unit(&self) -> &FoodQuantityUnit {
        &self.unit
    }

    /// Switch to another unit of the current food, keeping the amount.
    ///
    /// Units the food or the user's preferences cannot express are rejected
    /// and leave the form unchanged. Without a food there is nothing to pick
    /// for, and the call does nothing.
    pub fn did_pick_unit(&mut self, unit: FoodQuantityUnit) -> QuantityResult<()> {
        let Some(food) = &self.food else {
            return Ok(());
        };
        resolve(1.0, &unit, food, &self.collaborator.user_volume_units())?;

        tracing::debug!("Form unit set to '{}'", unit.short_description(food));
        self.unit = unit;
        self.assemble();
        Ok(())
    }

    /// Take both amount and unit from a quantity, e.g. a picked equivalent.
    ///
    /// Rejected like [`Self::did_pick_unit`] when the unit is not legal for
    /// the food.
    pub fn did_pick_quantity(&mut self, value: f64, unit: FoodQuantityUnit) -> QuantityResult<()> {
        if let Some(food) = &self.food {
            resolve(value, &unit, food, &self.collaborator.user_volume_units())?;
        }
        self.unit = unit;
        self.set_amount(Some(value));
        Ok(())
    }

    pub fn did_pick_day_meal(&mut self, day_meal: DayMeal) {
        tracing::debug!("Form meal set to '{}'", day_meal.name);
        self.day_meal = day_meal;
    }

    // ------------------------------------------------------------------
    // Amount
    // ------------------------------------------------------------------

    pub fn amount(&self) -> Option<f64> {
        self.amount
    }

    pub fn set_amount(&mut self, amount: Option<f64>) {
        self.amount = amount;
        self.amount_text = amount.map(clean_amount).unwrap_or_default();
        self.assemble();
    }

    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    /// Apply typed amount text.
    ///
    /// Empty text clears the amount. Text that does not parse is rejected
    /// and the previous text and amount are kept.
    pub fn set_amount_text(&mut self, text: &str) -> QuantityResult<()> {
        if text.is_empty() {
            self.amount = None;
        } else {
            self.amount = Some(parse_amount(text)?);
        }
        self.amount_text = text.to_string();
        self.assemble();
        Ok(())
    }

    pub fn amount_is_valid(&self) -> bool {
        self.amount.is_some_and(|amount| amount > 0.0)
    }

    pub fn step_amount(&mut self, step: i32) {
        self.set_amount(Some(self.amount.unwrap_or(0.0) + f64::from(step)));
    }

    pub fn amount_can_be_stepped(&self, step: i32) -> bool {
        self.amount.unwrap_or(0.0) + f64::from(step) > 0.0
    }

    /// The amount in storage form; a missing amount is stored as zero
    pub fn amount_value(&self) -> Option<FoodValue> {
        let food = self.food.as_ref()?;
        let user_units = self.collaborator.units_or_standard();
        match to_food_value(self.amount.unwrap_or(0.0), &self.unit, food, &user_units) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Form amount cannot be stored: {}", e);
                None
            }
        }
    }

    pub fn current_quantity(&self) -> Option<FoodQuantity<'_>> {
        let food = self.food.as_ref()?;
        Some(FoodQuantity::new(self.amount?, self.unit.clone(), food))
    }

    pub fn equivalent_quantities(&self) -> Vec<FoodQuantity<'_>> {
        match self.current_quantity() {
            Some(quantity) => {
                quantity.equivalent_quantities(&self.collaborator.user_volume_units())
            }
            None => Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Editing state
    // ------------------------------------------------------------------

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn day_meal(&self) -> &DayMeal {
        &self.day_meal
    }

    pub fn day_meals(&self) -> &[DayMeal] {
        &self.day_meals
    }

    pub fn is_editing(&self) -> bool {
        self.existing.is_some()
    }

    /// Whether saving would change anything
    pub fn is_dirty(&self) -> bool {
        let Some(existing) = &self.existing else {
            return self.amount_is_valid();
        };

        let food_changed = self.food.as_ref().map(|f| f.id) != Some(existing.food.id);
        let amount_changed =
            self.amount_value().as_ref() != Some(&existing.amount) && self.amount_is_valid();
        let meal_changed = self.initial_day_meal.as_ref().map(|m| m.id) != Some(self.day_meal.id);

        food_changed || amount_changed || meal_changed
    }

    /// The item as it would be saved
    pub fn meal_food_item(&self) -> Option<&MealFoodItem> {
        self.meal_food_item.as_ref()
    }

    /// Rebuild the item, or drop it when the current state cannot be stored
    fn assemble(&mut self) {
        self.meal_food_item = match (&self.food, self.amount_value()) {
            (Some(food), Some(amount)) => Some(MealFoodItem::carrying_forward(
                self.existing.as_ref(),
                food,
                amount,
            )),
            _ => None,
        };
    }

    // ------------------------------------------------------------------
    // Presentation
    // ------------------------------------------------------------------

    /// "2 tbsp"; None while the amount is empty
    pub fn amount_title(&self) -> Option<String> {
        let amount = self.amount?;
        Some(format!("{} {}", clean_amount(amount), self.unit_description()))
    }

    pub fn unit_description(&self) -> String {
        match &self.food {
            Some(food) => self.unit.short_description(food),
            None => self.unit.unit_type().as_str().to_string(),
        }
    }

    pub fn amount_header(&self) -> &'static str {
        self.unit.unit_type().description()
    }

    pub fn navigation_title(&self, now: DateTime<Utc>) -> &'static str {
        if self.is_editing() {
            "Edit Entry"
        } else if self.day_meal.time < now {
            "Log Food"
        } else {
            "Prep Food"
        }
    }

    pub fn save_button_title(&self) -> &'static str {
        if self.is_editing() {
            "Save"
        } else {
            "Add"
        }
    }

    pub fn should_show_serving_in_unit_picker(&self) -> bool {
        self.food.as_ref().is_some_and(|f| f.serving.is_some())
    }

    pub fn should_show_weight_units(&self) -> bool {
        self.food.as_ref().is_some_and(Food::can_be_measured_in_weight)
    }

    pub fn should_show_volume_units(&self) -> bool {
        self.food.as_ref().is_some_and(Food::can_be_measured_in_volume)
    }

    pub fn food_sizes(&self) -> &[FoodSize] {
        self.food.as_ref().map(|f| f.sizes.as_slice()).unwrap_or_default()
    }

    /// What one serving of the food is, e.g. "0.5 cup"
    pub fn serving_description(&self) -> Option<String> {
        let food = self.food.as_ref()?;
        let serving = food.serving.as_ref()?;
        FoodQuantity::from_food_value(serving, food).map(|q| q.description())
    }

    // ------------------------------------------------------------------
    // Nutrition summary
    // ------------------------------------------------------------------

    /// Energy in the user's preferred unit
    pub fn energy_amount(&self) -> f64 {
        let kcal = self.scaled(Nutrient::Energy);
        self.collaborator.units_or_standard().energy.from_kcal(kcal)
    }

    pub fn carb_amount(&self) -> f64 {
        self.scaled(Nutrient::Carb)
    }

    pub fn fat_amount(&self) -> f64 {
        self.scaled(Nutrient::Fat)
    }

    pub fn protein_amount(&self) -> f64 {
        self.scaled(Nutrient::Protein)
    }

    fn scaled(&self, nutrient: Nutrient) -> f64 {
        self.meal_food_item
            .as_ref()
            .map(|item| item.scaled_value(nutrient))
            .unwrap_or(0.0)
    }
}
