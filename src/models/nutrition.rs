//! Shared nutrition data structure
//!
//! Nutrients of a food for its declared amount, and of a logged meal item.

use serde::{Deserialize, Serialize};

/// Nutrient amounts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub energy: f64,  // kcal
    pub carb: f64,    // grams
    pub fat: f64,     // grams
    pub protein: f64, // grams
    #[serde(default)]
    pub fiber: f64, // grams
    #[serde(default)]
    pub sugar: f64, // grams
    #[serde(default)]
    pub sodium: f64, // milligrams
}

impl Nutrition {
    /// Scale every nutrient by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            energy: self.energy * multiplier,
            carb: self.carb * multiplier,
            fat: self.fat * multiplier,
            protein: self.protein * multiplier,
            fiber: self.fiber * multiplier,
            sugar: self.sugar * multiplier,
            sodium: self.sodium * multiplier,
        }
    }

    /// Value of a single nutrient
    pub fn value(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Energy => self.energy,
            Nutrient::Carb => self.carb,
            Nutrient::Fat => self.fat,
            Nutrient::Protein => self.protein,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sugar => self.sugar,
            Nutrient::Sodium => self.sodium,
        }
    }
}

/// Individual nutrients tracked in [`Nutrition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Energy,
    Carb,
    Fat,
    Protein,
    Fiber,
    Sugar,
    Sodium,
}
