//! Food MCP Tools
//!
//! Tools for browsing the food catalog.

use serde::Serialize;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::models::{Food, FoodValue};
use crate::quantity::{FoodQuantity, QuantityError};

/// Summary of a food for list/search results
#[derive(Debug, Serialize)]
pub struct FoodSummary {
    pub id: Uuid,
    pub name: String,
    pub emoji: String,
    pub detail: Option<String>,
    pub brand: Option<String>,
    pub energy: f64,
}

impl From<&Food> for FoodSummary {
    fn from(food: &Food) -> Self {
        Self {
            id: food.id,
            name: food.name.clone(),
            emoji: food.emoji.clone(),
            detail: food.detail.clone(),
            brand: food.brand.clone(),
            energy: food.nutrition.energy,
        }
    }
}

/// Response for list_foods
#[derive(Debug, Serialize)]
pub struct ListFoodsResponse {
    pub foods: Vec<FoodSummary>,
    pub total: usize,
}

/// Full food detail response
#[derive(Debug, Serialize)]
pub struct FoodDetail {
    #[serde(flatten)]
    pub food: Food,
    pub amount_description: Option<String>,
    pub serving_description: Option<String>,
    pub can_be_measured_in_weight: bool,
    pub can_be_measured_in_volume: bool,
}

impl FoodDetail {
    pub fn from_food(food: &Food) -> Self {
        let describe = |value: &FoodValue| FoodQuantity::from_food_value(value, food).map(|q| q.description());

        Self {
            amount_description: describe(&food.amount),
            serving_description: food.serving.as_ref().and_then(describe),
            can_be_measured_in_weight: food.can_be_measured_in_weight(),
            can_be_measured_in_volume: food.can_be_measured_in_volume(),
            food: food.clone(),
        }
    }
}

/// Find a food by id, or by exact (case-insensitive) name
pub fn find_food<'a>(catalog: &'a Catalog, food: &str) -> Result<&'a Food, String> {
    let food = food.trim();
    if food.is_empty() {
        return Err(QuantityError::MissingContext.to_string());
    }

    let found = match Uuid::parse_str(food) {
        Ok(id) => catalog.get(id),
        Err(_) => catalog
            .foods()
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(food)),
    };

    found.ok_or_else(|| format!("Food not found: {}", food))
}

/// List foods, optionally filtered by a search query
pub fn list_foods(catalog: &Catalog, query: Option<&str>, limit: i64) -> Result<ListFoodsResponse, String> {
    let limit = limit.clamp(1, 200) as usize;

    let foods: Vec<FoodSummary> = catalog
        .search(query.unwrap_or_default(), limit)
        .into_iter()
        .map(FoodSummary::from)
        .collect();
    let total = foods.len();

    Ok(ListFoodsResponse { foods, total })
}

/// Get a food with its derived measurement info
pub fn get_food(catalog: &Catalog, food: &str) -> Result<FoodDetail, String> {
    find_food(catalog, food).map(FoodDetail::from_food)
}
