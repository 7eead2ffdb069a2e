//! Quantity MCP Tools
//!
//! Normalization, equivalents, defaults and meal item assembly for foods in
//! the catalog.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::foods::find_food;
use crate::catalog::{Catalog, PreferenceStore};
use crate::form::{MealItemForm, MealItemFormSeed};
use crate::models::{DayMeal, Food, FoodValue, MealFoodItem, UnitType};
use crate::nutrition::{parse_amount, parse_unit, unit_text};
use crate::quantity::{
    default_quantity, legal_units, to_food_value as normalize, DataCollaborator, FoodQuantity,
};

/// A quantity as shown to callers
#[derive(Debug, Serialize)]
pub struct QuantitySummary {
    pub value: f64,
    /// Unit text accepted back by the quantity tools
    pub unit: String,
    pub unit_type: UnitType,
    pub description: String,
}

impl From<&FoodQuantity<'_>> for QuantitySummary {
    fn from(quantity: &FoodQuantity<'_>) -> Self {
        Self {
            value: quantity.value,
            unit: unit_text(&quantity.unit, quantity.food),
            unit_type: quantity.unit.unit_type(),
            description: quantity.description(),
        }
    }
}

/// A legal unit of a food
#[derive(Debug, Serialize)]
pub struct UnitSummary {
    pub unit: String,
    pub unit_type: UnitType,
    pub description: String,
}

/// Response for food_units
#[derive(Debug, Serialize)]
pub struct FoodUnitsResponse {
    pub food_id: Uuid,
    pub food_name: String,
    pub units: Vec<UnitSummary>,
}

/// Response for to_food_value
#[derive(Debug, Serialize)]
pub struct ToFoodValueResponse {
    pub food_id: Uuid,
    pub quantity: QuantitySummary,
    pub food_value: FoodValue,
}

/// Response for equivalent_quantities
#[derive(Debug, Serialize)]
pub struct EquivalentQuantitiesResponse {
    pub food_id: Uuid,
    pub quantity: QuantitySummary,
    pub equivalents: Vec<QuantitySummary>,
}

/// Where a default quantity came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultSource {
    LastUsed,
    FoodDefault,
    NoDefault,
}

/// Response for default_quantity
#[derive(Debug, Serialize)]
pub struct DefaultQuantityResponse {
    pub food_id: Uuid,
    pub source: DefaultSource,
    pub quantity: Option<QuantitySummary>,
}

/// Inputs for assemble_meal_item
#[derive(Debug, Default)]
pub struct AssembleMealItemRequest<'a> {
    pub food: &'a str,
    /// Amount text; the food's default quantity is used when absent
    pub amount: Option<&'a str>,
    pub unit: Option<&'a str>,
    pub meal_name: Option<&'a str>,
    pub meal_time: Option<DateTime<Utc>>,
}

/// Response for assemble_meal_item
#[derive(Debug, Serialize)]
pub struct AssembleMealItemResponse {
    pub meal_food_item: MealFoodItem,
    pub day_meal: DayMeal,
    pub title: String,
    pub amount_title: Option<String>,
    pub energy: f64,
    pub carb: f64,
    pub fat: f64,
    pub protein: f64,
    pub equivalents: Vec<QuantitySummary>,
}

/// Response for record_last_used_quantity
#[derive(Debug, Serialize)]
pub struct RecordLastUsedResponse {
    pub success: bool,
    pub food_id: Uuid,
    pub food_value: FoodValue,
}

/// Parse amount and unit text into a quantity of `food`
fn quantity_for<'a>(
    food: &'a Food,
    amount: &str,
    unit: &str,
) -> Result<FoodQuantity<'a>, String> {
    let value = parse_amount(amount).map_err(|e| e.to_string())?;
    let unit = parse_unit(unit, food).map_err(|e| e.to_string())?;
    Ok(FoodQuantity::new(value, unit, food))
}

/// List every unit a food can be measured in
pub fn food_units(catalog: &Catalog, store: &PreferenceStore, food: &str) -> Result<FoodUnitsResponse, String> {
    let food = find_food(catalog, food)?;

    let units = legal_units(food, &store.user_volume_units())
        .iter()
        .map(|unit| UnitSummary {
            unit: unit_text(unit, food),
            unit_type: unit.unit_type(),
            description: unit.short_description(food),
        })
        .collect();

    Ok(FoodUnitsResponse {
        food_id: food.id,
        food_name: food.name.clone(),
        units,
    })
}

/// Normalize an amount of a food into its storage form
pub fn to_food_value(
    catalog: &Catalog,
    store: &PreferenceStore,
    food: &str,
    amount: &str,
    unit: &str,
) -> Result<ToFoodValueResponse, String> {
    let food = find_food(catalog, food)?;
    let quantity = quantity_for(food, amount, unit)?;

    let food_value = normalize(quantity.value, &quantity.unit, food, &store.units_or_standard())
        .map_err(|e| e.to_string())?;

    Ok(ToFoodValueResponse {
        food_id: food.id,
        quantity: QuantitySummary::from(&quantity),
        food_value,
    })
}

/// The same amount of a food in every other unit it converts to
pub fn equivalent_quantities(
    catalog: &Catalog,
    store: &PreferenceStore,
    food: &str,
    amount: &str,
    unit: &str,
) -> Result<EquivalentQuantitiesResponse, String> {
    let food = find_food(catalog, food)?;
    let quantity = quantity_for(food, amount, unit)?;

    // Validates the unit against the food and the user's preferences
    normalize(quantity.value, &quantity.unit, food, &store.units_or_standard())
        .map_err(|e| e.to_string())?;

    let equivalents = quantity
        .equivalent_quantities(&store.user_volume_units())
        .iter()
        .map(QuantitySummary::from)
        .collect();

    Ok(EquivalentQuantitiesResponse {
        food_id: food.id,
        quantity: QuantitySummary::from(&quantity),
        equivalents,
    })
}

/// The quantity a food starts with: last used, else the food's default
pub fn default_quantity_for(
    catalog: &Catalog,
    store: &PreferenceStore,
    food: &str,
) -> Result<DefaultQuantityResponse, String> {
    let food = find_food(catalog, food)?;

    let last_used = store.last_used_quantity(food);
    let source = if last_used.is_some() {
        DefaultSource::LastUsed
    } else if food.default_quantity.is_some() {
        DefaultSource::FoodDefault
    } else {
        DefaultSource::NoDefault
    };

    let quantity = default_quantity(food, last_used);
    let source = if quantity.is_some() { source } else { DefaultSource::NoDefault };

    Ok(DefaultQuantityResponse {
        food_id: food.id,
        source,
        quantity: quantity.as_ref().map(QuantitySummary::from),
    })
}

/// Build the meal item a form with these inputs would save
pub fn assemble_meal_item(
    catalog: &Catalog,
    store: std::sync::Arc<PreferenceStore>,
    request: AssembleMealItemRequest<'_>,
) -> Result<AssembleMealItemResponse, String> {
    let food = find_food(catalog, request.food)?.clone();
    let now = Utc::now();

    let seed = MealItemFormSeed {
        food: Some(food.clone()),
        day_meal: request
            .meal_name
            .map(|name| DayMeal::new(name, request.meal_time.unwrap_or(now))),
        ..MealItemFormSeed::new(request.meal_time.unwrap_or(now))
    };
    let mut form = MealItemForm::new(seed, store);

    if let Some(unit) = request.unit {
        let unit = parse_unit(unit, &food).map_err(|e| e.to_string())?;
        form.did_pick_unit(unit).map_err(|e| e.to_string())?;
    }
    if let Some(amount) = request.amount {
        form.set_amount_text(amount.trim()).map_err(|e| e.to_string())?;
    }

    if !form.amount_is_valid() {
        return Err(format!("Amount must be greater than 0 for '{}'", food.name));
    }
    let meal_food_item = form
        .meal_food_item()
        .cloned()
        .ok_or_else(|| format!("Could not assemble an item for '{}'", food.name))?;

    Ok(AssembleMealItemResponse {
        title: form.navigation_title(now).to_string(),
        amount_title: form.amount_title(),
        energy: form.energy_amount(),
        carb: form.carb_amount(),
        fat: form.fat_amount(),
        protein: form.protein_amount(),
        equivalents: form.equivalent_quantities().iter().map(QuantitySummary::from).collect(),
        day_meal: form.day_meal().clone(),
        meal_food_item,
    })
}

/// Remember the amount a food was logged with
pub fn record_last_used_quantity(
    catalog: &Catalog,
    store: &PreferenceStore,
    food: &str,
    amount: &str,
    unit: &str,
) -> Result<RecordLastUsedResponse, String> {
    let food = find_food(catalog, food)?;
    let quantity = quantity_for(food, amount, unit)?;
    if quantity.value <= 0.0 {
        return Err("amount must be greater than 0".to_string());
    }

    let food_value = normalize(quantity.value, &quantity.unit, food, &store.units_or_standard())
        .map_err(|e| e.to_string())?;
    store.record_last_used(food.id, food_value.clone());
    tracing::info!("Recorded last used '{}' for '{}'", quantity.description(), food.name);

    Ok(RecordLastUsedResponse {
        success: true,
        food_id: food.id,
        food_value,
    })
}
