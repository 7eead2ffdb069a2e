//! Meal item entry form

mod meal_item_form;

pub use meal_item_form::{MealItemForm, MealItemFormSeed};
