//! Data models
//!
//! Foods, stored amounts and logged meal items.

mod food;
mod food_value;
mod meal_item;
mod nutrition;

pub use food::{Density, Food, FoodSize};
pub use food_value::{FoodValue, UnitType};
pub use meal_item::{DayMeal, MealFoodItem};
pub use nutrition::{Nutrient, Nutrition};
